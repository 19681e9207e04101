//! JSON export of extraction results.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::models::config::ExportConfig;
use crate::models::resume::ExtractionResult;

/// Stem used when the original file name has none.
const FALLBACK_STEM: &str = "resume";

/// Serialize a result to JSON.
pub fn to_json(result: &ExtractionResult, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Export file name: the original file stem followed by `suffix`.
///
/// `cv.pdf` with `_extracted.json` becomes `cv_extracted.json`. Any directory
/// part of `original` is dropped.
pub fn export_file_name(original: &str, suffix: &str) -> String {
    let stem = Path::new(original)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_STEM);

    format!("{stem}{suffix}")
}

/// Write `result` as JSON into `dir`, named after `original`.
///
/// Returns the path written.
pub fn write_json(
    dir: &Path,
    original: &str,
    result: &ExtractionResult,
    config: &ExportConfig,
) -> Result<PathBuf> {
    let path = dir.join(export_file_name(original, &config.file_suffix));
    std::fs::write(&path, to_json(result, config.pretty)?)?;
    info!("Exported extraction result to {}", path.display());
    Ok(path)
}
