//! Document text extraction.
//!
//! Turns an uploaded file's raw bytes into plain text for the text scorer.
//! Dispatch is by file extension over a closed set of formats; anything else
//! is rejected before any parsing happens.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The extension is not one we can decode. Carries the rejected
    /// extension (lower-cased, empty if the filename had no dot).
    #[error("unsupported file extension {extension:?}")]
    UnsupportedFormat { extension: String },

    /// The bytes could not be parsed as the format the extension promised.
    #[error("failed to read document: {0}")]
    Malformed(String),
}

/// The formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Docx,
}

impl DocumentFormat {
    fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "txt" | "md" => Some(Self::PlainText),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Extracts plain text from `content`, dispatching on the extension after the
/// last `.` in `filename` (case-insensitive).
pub fn extract_text(filename: &str, content: &[u8]) -> Result<String, ExtractError> {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    let format = DocumentFormat::from_extension(&extension)
        .ok_or(ExtractError::UnsupportedFormat { extension })?;

    match format {
        DocumentFormat::PlainText => Ok(String::from_utf8_lossy(content).into_owned()),
        DocumentFormat::Pdf => extract_pdf(content),
        DocumentFormat::Docx => extract_docx(content),
    }
}

/// Per-page text extraction, joined with newlines. A page lopdf cannot pull
/// text out of (scanned image, odd encoding) contributes an empty string
/// rather than failing the whole document.
fn extract_pdf(content: &[u8]) -> Result<String, ExtractError> {
    let doc = lopdf::Document::load_mem(content)
        .map_err(|e| ExtractError::Malformed(e.to_string()))?;
    let pages: Vec<String> = doc
        .get_pages()
        .keys()
        .map(|page| doc.extract_text(&[*page]).unwrap_or_default())
        .collect();
    Ok(pages.join("\n"))
}

/// Walks paragraph -> run -> text in document order, one paragraph per line.
fn extract_docx(content: &[u8]) -> Result<String, ExtractError> {
    let docx =
        docx_rs::read_docx(content).map_err(|e| ExtractError::Malformed(format!("{e:?}")))?;
    let mut paragraphs = Vec::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for paragraph_child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = paragraph_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(text) = run_child {
                            line.push_str(&text.text);
                        }
                    }
                }
            }
            paragraphs.push(line);
        }
    }
    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_txt_round_trip() {
        let body = b"Skills: Go, Rust\nExperience: 5 years";
        let text = extract_text("resume.txt", body).unwrap();
        assert_eq!(text, "Skills: Go, Rust\nExperience: 5 years");
    }

    #[test]
    fn test_md_is_treated_as_plain_text() {
        let text = extract_text("resume.md", b"# Jane Doe").unwrap();
        assert_eq!(text, "# Jane Doe");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let text = extract_text("RESUME.TXT", b"hello").unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_rejected() {
        let text = extract_text("resume.txt", b"caf\xff").unwrap();
        assert!(text.starts_with("caf"));
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let err = extract_text("resume.xyz", b"...").unwrap_err();
        match err {
            ExtractError::UnsupportedFormat { extension } => assert_eq!(extension, "xyz"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let err = extract_text("resume", b"...").unwrap_err();
        match err {
            ExtractError::UnsupportedFormat { extension } => assert_eq!(extension, ""),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_pdf_bytes_are_malformed() {
        let err = extract_text("resume.pdf", b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(_)));
    }

    #[test]
    fn test_garbage_docx_bytes_are_malformed() {
        let err = extract_text("resume.docx", b"definitely not a zip").unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(_)));
    }

    #[test]
    fn test_docx_paragraphs_extracted_in_order() {
        use docx_rs::{Docx, Paragraph, Run};

        let mut buf = Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Skills: Rust, Go")))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Experience: 5 years")))
            .build()
            .pack(&mut buf)
            .unwrap();

        let text = extract_text("resume.docx", buf.get_ref()).unwrap();
        assert_eq!(text, "Skills: Rust, Go\nExperience: 5 years");
    }
}
