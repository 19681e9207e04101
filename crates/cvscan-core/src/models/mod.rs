//! Data models.

pub mod config;
pub mod resume;

pub use config::{CvscanConfig, ExportConfig, ExtractionConfig, NameRule};
pub use resume::{ExtractionResult, FieldEdit, ResultField};
