//! Text normalization applied before field extraction.

mod normalizer;

pub use normalizer::{NormalizedText, Normalizer};
