//! Plain-text extraction from uploaded standings documents.
//!
//! Uploads arrive as `.docx` packages, legacy `.doc` files (which in practice
//! are often RTF saved under a `.doc` name), or plain text. Every path ends
//! in a single newline-separated string for the standings parser.

pub mod docx;
pub mod legacy;
pub mod plain;
pub mod rtf;

use topscore_core::ConversionError;

pub use docx::extract_docx_text;
pub use legacy::{MIN_CONFIDENCE, extract_legacy_doc_text, keyword_score};
pub use plain::decode_text_best_effort;
pub use rtf::strip_rtf;

/// Sub-format of an uploaded standings document, as told by its filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Word-processor package (`.docx`)
    Docx,
    /// Legacy binary word-processor document (`.doc`)
    LegacyDoc,
    /// Plain text or anything unrecognized
    PlainText,
}

impl SourceFormat {
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.trim().to_lowercase();
        if lower.ends_with(".docx") {
            Self::Docx
        } else if lower.ends_with(".doc") {
            Self::LegacyDoc
        } else {
            Self::PlainText
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Docx => "docx",
            Self::LegacyDoc => "doc",
            Self::PlainText => "text",
        }
    }
}

/// Turn an uploaded standings document into plain text.
///
/// Pure over `raw`; nothing touches the filesystem.
pub fn extract_text(raw: &[u8], filename: &str) -> Result<String, ConversionError> {
    let format = SourceFormat::from_filename(filename);
    log::debug!(
        "Extracting text from '{}' ({} bytes) as {}",
        filename,
        raw.len(),
        format.name()
    );

    match format {
        SourceFormat::Docx => extract_docx_text(raw),
        SourceFormat::LegacyDoc => extract_legacy_doc_text(raw),
        SourceFormat::PlainText => Ok(decode_text_best_effort(raw).trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_filename() {
        assert_eq!(SourceFormat::from_filename("stand.DOCX"), SourceFormat::Docx);
        assert_eq!(SourceFormat::from_filename("stand.doc"), SourceFormat::LegacyDoc);
        assert_eq!(SourceFormat::from_filename("stand.txt"), SourceFormat::PlainText);
        assert_eq!(SourceFormat::from_filename(""), SourceFormat::PlainText);
    }

    #[test]
    fn test_plain_text_is_trimmed() {
        let text = extract_text(b"\n  Eerste klasse\n\n", "stand.txt").unwrap();
        assert_eq!(text, "Eerste klasse");
    }

    #[test]
    fn test_unknown_extension_decodes_as_text() {
        let text = extract_text("Tweede klasse\n1. Jan (Born) - 3 doelpunten".as_bytes(), "stand")
            .unwrap();
        assert!(text.starts_with("Tweede klasse"));
    }
}
