//! Document text extraction from in-memory bytes.
//!
//! PDF goes through `pdf-extract`. Word documents are OOXML zip containers:
//! the main document part is read with a streaming XML reader, collecting
//! `<w:t>` runs into one line per paragraph.

use std::io::{Cursor, Read};

use crate::errors::EngineError;

/// Extracts the full text of a PDF document.
pub fn text_from_pdf(bytes: &[u8]) -> Result<String, EngineError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| EngineError::Extraction(format!("failed to read PDF: {e}")))
}

/// Extracts the full text of a Word document (OOXML).
pub fn text_from_word(bytes: &[u8]) -> Result<String, EngineError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| EngineError::Extraction(format!("failed to read document container: {e}")))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|_| EngineError::Extraction("missing word/document.xml".to_string()))?
        .read_to_string(&mut document_xml)
        .map_err(|e| EngineError::Extraction(format!("failed to read document body: {e}")))?;

    flatten_document_xml(&document_xml)
}

/// Walks the document XML, emitting one line per `<w:p>` paragraph.
fn flatten_document_xml(xml: &str) -> Result<String, EngineError> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut output = String::new();
    let mut paragraph_text = String::new();
    let mut in_text_element = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(ref e)) => {
                if local_name(e.local_name().as_ref()) == "t" {
                    in_text_element = true;
                }
            }
            Ok(quick_xml::events::Event::Empty(ref e)) => {
                // Explicit line breaks and tabs inside a run.
                match local_name(e.local_name().as_ref()) {
                    "br" => paragraph_text.push('\n'),
                    "tab" => paragraph_text.push(' '),
                    _ => {}
                }
            }
            Ok(quick_xml::events::Event::End(ref e)) => match local_name(e.local_name().as_ref()) {
                "p" => {
                    let line = paragraph_text.trim();
                    if !line.is_empty() {
                        output.push_str(line);
                        output.push('\n');
                    }
                    paragraph_text.clear();
                }
                "t" => in_text_element = false,
                _ => {}
            },
            Ok(quick_xml::events::Event::Text(ref e)) => {
                if in_text_element {
                    if let Ok(text) = e.unescape() {
                        paragraph_text.push_str(&text);
                    }
                }
            }
            Ok(quick_xml::events::Event::Eof) => break,
            Err(e) => {
                return Err(EngineError::Extraction(format!("document XML parse error: {e}")))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(output.trim_end().to_string())
}

fn local_name(name: &[u8]) -> &str {
    std::str::from_utf8(name).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Builds a minimal OOXML container with the given document body.
    fn docx_with_body(body: &str) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buffer);
            writer
                .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(body.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buffer.into_inner()
    }

    #[test]
    fn test_word_paragraphs_become_lines() {
        let body = r#"<w:document><w:body>
            <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
            <w:p><w:r><w:t>jane.doe@example.com</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let bytes = docx_with_body(body);
        let text = text_from_word(&bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Jane Doe", "jane.doe@example.com"]);
    }

    #[test]
    fn test_word_runs_within_paragraph_are_joined() {
        let body = r#"<w:p><w:r><w:t>Senior </w:t></w:r><w:r><w:t>Engineer</w:t></w:r></w:p>"#;
        let bytes = docx_with_body(body);
        assert_eq!(text_from_word(&bytes).unwrap(), "Senior Engineer");
    }

    #[test]
    fn test_text_outside_runs_is_ignored() {
        let body = r#"<w:p><w:pPr>style-noise</w:pPr><w:r><w:t>Kept</w:t></w:r></w:p>"#;
        let bytes = docx_with_body(body);
        assert_eq!(text_from_word(&bytes).unwrap(), "Kept");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let body = r#"<w:p><w:r><w:t>Research &amp; Development</w:t></w:r></w:p>"#;
        let bytes = docx_with_body(body);
        assert_eq!(text_from_word(&bytes).unwrap(), "Research & Development");
    }

    #[test]
    fn test_missing_document_body_is_an_extraction_error() {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buffer);
            writer
                .start_file("unrelated.txt", zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(b"nothing").unwrap();
            writer.finish().unwrap();
        }
        let result = text_from_word(&buffer.into_inner());
        assert!(matches!(result, Err(EngineError::Extraction(_))));
    }

    #[test]
    fn test_invalid_pdf_is_an_extraction_error() {
        assert!(matches!(
            text_from_pdf(b"garbage"),
            Err(EngineError::Extraction(_))
        ));
    }
}
