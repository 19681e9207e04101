//! Plain text decoding.

use super::{Result, TextDecoder};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Plain text decoder. Strips a UTF-8 byte order mark and replaces invalid
/// sequences with U+FFFD, so it never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextDecoder;

impl TextDecoder for PlainTextDecoder {
    fn decode(&self, data: &[u8]) -> Result<String> {
        let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
        Ok(String::from_utf8_lossy(data).into_owned())
    }
}
