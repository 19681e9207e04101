//! PDF text-layer extraction using pdf-extract.

use tracing::trace;

use super::{Result, TextDecoder};
use crate::error::DecodeError;

/// PDF decoder. Reads the embedded text layer only; scanned pages yield no text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfDecoder;

impl TextDecoder for PdfDecoder {
    fn decode(&self, data: &[u8]) -> Result<String> {
        trace!("Extracting PDF text from {} bytes", data.len());

        guard_panics(|| pdf_extract::extract_text_from_mem(data))?
            .map_err(|e| DecodeError::Pdf(e.to_string()))
    }
}

/// Run `f`, turning a panic into [`DecodeError::Pdf`].
///
/// pdf-extract panics on some malformed inputs.
#[cfg(not(target_arch = "wasm32"))]
fn guard_panics<T>(f: impl FnOnce() -> T) -> Result<T> {
    use std::panic::{self, AssertUnwindSafe};

    panic::catch_unwind(AssertUnwindSafe(f))
        .map_err(|_| DecodeError::Pdf("pdf-extract panicked on malformed input".to_string()))
}

/// Panics abort on `wasm32-unknown-unknown` and cannot be caught here.
#[cfg(target_arch = "wasm32")]
fn guard_panics<T>(f: impl FnOnce() -> T) -> Result<T> {
    Ok(f())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pdf_is_error() {
        assert!(matches!(PdfDecoder.decode(b"not a pdf"), Err(DecodeError::Pdf(_))));
        assert!(PdfDecoder.decode(b"").is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_panic_becomes_decode_error() {
        let result: Result<()> = guard_panics(|| panic!("malformed xref"));
        assert!(matches!(result, Err(DecodeError::Pdf(_))));
        assert_eq!(guard_panics(|| 7).ok(), Some(7));
    }
}
