//! WASM bindings for resume field extraction.
//!
//! Everything runs in the browser: documents are decoded and parsed locally
//! and nothing leaves the page.

use std::path::Path;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag};

use cvscan_core::export;
use cvscan_core::{
    CvscanConfig, DecodedText, DocumentDecoder, DocumentFormat, ExportConfig, ExtractionResult,
    HeuristicResumeParser, NameRule, ParseOutcome, ResumeParser, Vocabulary,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract resume fields from plain text using the default rules.
#[wasm_bindgen]
pub fn extract_from_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&cvscan_core::extract_resume(text))
}

/// Decode an uploaded document and extract its fields.
///
/// The format comes from the file name's extension, or from the leading
/// bytes when the extension is unknown.
#[wasm_bindgen]
pub fn extract_from_bytes(bytes: &[u8], file_name: &str) -> Result<JsValue, JsValue> {
    let decoded = decode_upload(bytes, file_name);
    to_js(&HeuristicResumeParser::new().parse(&decoded.text).result)
}

/// Name of the JSON download for an uploaded file (`cv.pdf` → `cv_extracted.json`).
#[wasm_bindgen]
pub fn export_file_name(file_name: &str) -> String {
    export::export_file_name(file_name, &ExportConfig::default().file_suffix)
}

/// Serialize a result as indented JSON in a `Blob` ready for download.
#[wasm_bindgen]
pub fn to_json_blob(result: JsValue) -> Result<Blob, JsValue> {
    let result = from_js(result)?;
    let json = export::to_json(&result, true).map_err(to_js_error)?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");

    Blob::new_with_str_sequence_and_options(&parts, &options)
}

/// Resume extractor class for browser use.
#[wasm_bindgen]
pub struct ResumeExtractor {
    parser: HeuristicResumeParser,
}

#[wasm_bindgen]
impl ResumeExtractor {
    /// Create a new resume extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: HeuristicResumeParser::new(),
        }
    }

    /// Create an extractor from a configuration object shaped like the
    /// CLI's `config.json`. Missing keys take their defaults.
    #[wasm_bindgen]
    pub fn from_config(config: JsValue) -> Result<ResumeExtractor, JsValue> {
        let config: CvscanConfig = serde_wasm_bindgen::from_value(config)?;
        Ok(Self {
            parser: HeuristicResumeParser::from_config(&config),
        })
    }

    /// Accept single-word and all-uppercase names.
    #[wasm_bindgen]
    pub fn set_lenient_names(&mut self, lenient: bool) {
        let rule = if lenient {
            NameRule::Lenient
        } else {
            NameRule::Strict
        };
        self.parser = self.parser.clone().with_name_rule(rule);
    }

    /// Add skill keywords to the vocabulary.
    #[wasm_bindgen]
    pub fn add_skills(&mut self, skills: Vec<String>) {
        let vocabulary: Vocabulary = self.parser.vocabulary().clone().with_extra_skills(skills);
        self.parser = self.parser.clone().with_vocabulary(vocabulary);
    }

    /// Extract fields from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text).result)
    }

    /// Decode a document and extract its fields.
    #[wasm_bindgen]
    pub fn extract_bytes(&self, bytes: &[u8], file_name: &str) -> Result<JsValue, JsValue> {
        let decoded = decode_upload(bytes, file_name);
        to_js(&self.parser.parse(&decoded.text).result)
    }

    /// Get extraction result with metadata.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        #[derive(Serialize)]
        struct ExtractResult {
            #[serde(flatten)]
            outcome: ParseOutcome,
            raw_text: String,
        }

        to_js(&ExtractResult {
            outcome: self.parser.parse(text),
            raw_text: text.to_string(),
        })
    }

    /// Return a copy of `result` with one field replaced.
    ///
    /// An empty value clears the field; skills take a comma-separated list.
    #[wasm_bindgen]
    pub fn edit(&self, result: JsValue, field: &str, value: &str) -> Result<JsValue, JsValue> {
        let result = from_js(result)?;
        let edited = result
            .with_edits([format!("{field}={value}")])
            .map_err(to_js_error)?;
        to_js(&edited)
    }
}

impl Default for ResumeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_upload(bytes: &[u8], file_name: &str) -> DecodedText {
    let decoded = DocumentDecoder::new().decode(bytes, DocumentFormat::from_path(Path::new(file_name)));
    if decoded.fell_back {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "Could not decode {} as {}, extracting from raw bytes",
            file_name,
            decoded.format.as_str()
        )));
    }
    decoded
}

/// Absent fields become `null` and skills a plain array.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(Into::into)
}

fn from_js(value: JsValue) -> Result<ExtractionResult, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(Into::into)
}

fn to_js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}
