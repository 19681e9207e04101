//! DOCX text extraction using zip and quick-xml.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::trace;

use super::{Result, TextDecoder};
use crate::error::DecodeError;

/// Main document part inside the package.
const DOCUMENT_PART: &str = "word/document.xml";

/// DOCX decoder.
///
/// Reads the run text of the main document part. Paragraph ends and line
/// breaks become newlines, tabs become `\t`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxDecoder;

impl TextDecoder for DocxDecoder {
    fn decode(&self, data: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
        trace!("DOCX package has {} entries", archive.len());

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .map_err(|_| DecodeError::MissingPart(DOCUMENT_PART.to_string()))?
            .read_to_string(&mut xml)
            .map_err(|e| DecodeError::Docx(e.to_string()))?;

        document_text(&xml)
    }
}

/// Extract plain text from WordprocessingML.
pub fn document_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_text = true,
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" | b"cr" | b"p" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane</w:t></w:r><w:r><w:t xml:space="preserve"> Doe</w:t></w:r></w:p>
    <w:p><w:r><w:t>Skills:</w:t><w:tab/><w:t>React &amp; AWS</w:t></w:r></w:p>
    <w:p/>
    <w:p><w:r><w:t>Line one</w:t><w:br/><w:t>Line two</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_document_text() {
        let text = document_text(BODY).unwrap();
        assert_eq!(text, "Jane Doe\nSkills:\tReact & AWS\n\nLine one\nLine two\n");
    }

    #[test]
    fn test_ignores_text_outside_runs() {
        let xml = r#"<w:document xmlns:w="x"><w:body><w:p><w:instrText>PAGE</w:instrText><w:r><w:t>Body</w:t></w:r></w:p></w:body></w:document>"#;
        assert_eq!(document_text(xml).unwrap(), "Body\n");
    }

    #[test]
    fn test_decode_package() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PART, zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(BODY.as_bytes()).unwrap();
        let data = writer.finish().unwrap().into_inner();

        let text = DocxDecoder.decode(&data).unwrap();
        assert!(text.starts_with("Jane Doe\n"));
    }

    #[test]
    fn test_missing_document_part() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("docProps/core.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let data = writer.finish().unwrap().into_inner();

        assert!(matches!(DocxDecoder.decode(&data), Err(DecodeError::MissingPart(_))));
    }

    #[test]
    fn test_not_a_zip() {
        assert!(matches!(DocxDecoder.decode(b"plain text"), Err(DecodeError::Archive(_))));
    }
}
