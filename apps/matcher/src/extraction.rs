//! Text extraction — adapters that turn document bytes into raw text.
//!
//! The analyzers start at the string level; everything that can fail on
//! bytes lives here and reports through `ExtractionError`.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::ExtractionError;
use crate::parsing::RawDocument;

const PDF_MAGIC: &[u8] = b"%PDF";

/// Extensions read as UTF-8 text. A file without an extension is also plain.
const PLAIN_EXTENSIONS: &[&str] = &["txt", "md", "text"];

pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        // pdf-extract panics on some malformed inputs instead of erroring.
        match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(ExtractionError::Pdf(e.to_string())),
            Err(_) => Err(ExtractionError::Pdf("extractor panicked on malformed input".to_string())),
        }
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        String::from_utf8(bytes.to_vec())
            .map_err(|_| ExtractionError::UnsupportedFormat("binary content is not UTF-8 text".to_string()))
    }
}

/// Picks an extractor for `bytes`: PDF magic wins over the extension.
pub fn extractor_for(bytes: &[u8], extension: Option<&str>) -> Result<Box<dyn TextExtractor>, ExtractionError> {
    if bytes.starts_with(PDF_MAGIC) {
        return Ok(Box::new(PdfTextExtractor));
    }
    match extension.map(str::to_lowercase) {
        Some(ext) if ext == "pdf" => Ok(Box::new(PdfTextExtractor)),
        Some(ext) if PLAIN_EXTENSIONS.contains(&ext.as_str()) => Ok(Box::new(PlainTextExtractor)),
        None => Ok(Box::new(PlainTextExtractor)),
        Some(ext) => Err(ExtractionError::UnsupportedFormat(ext)),
    }
}

/// Extracts `bytes` and rejects whitespace-only output.
pub fn extract_bytes(bytes: &[u8], extension: Option<&str>) -> Result<RawDocument, ExtractionError> {
    let text = extractor_for(bytes, extension)?.extract(bytes)?;
    let document = RawDocument::new(&text);
    if document.is_blank() {
        return Err(ExtractionError::EmptyContent);
    }
    debug!(chars = document.text().len(), lines = document.lines().len(), "Extracted document");
    Ok(document)
}

/// Reads and extracts a document from disk.
pub fn extract_document(path: &Path) -> Result<RawDocument, ExtractionError> {
    let bytes = std::fs::read(path)?;
    let extension = path.extension().and_then(|e| e.to_str());
    extract_bytes(&bytes, extension).map_err(|e| {
        warn!(path = %path.display(), error = %e, "Document extraction failed");
        e
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn test_plain_text_file_is_normalized() {
        let file = write_temp(".txt", b"John Doe\r\nSkills\r\nPython \xE2\x80\x93 SQL\r\n");
        let document = extract_document(file.path()).unwrap();
        assert_eq!(document.lines()[0], "John Doe");
        assert!(document.text().contains("Python - SQL"));
        assert!(!document.text().contains('\r'));
    }

    #[test]
    fn test_markdown_and_extensionless_files_are_plain() {
        assert!(extract_bytes(b"Skills\nRust", Some("md")).is_ok());
        assert!(extract_bytes(b"Skills\nRust", None).is_ok());
        assert!(extract_bytes(b"Skills\nRust", Some("TXT")).is_ok());
    }

    #[test]
    fn test_blank_document_is_empty_content() {
        let file = write_temp(".txt", b" \n\t\n  ");
        let err = extract_document(file.path()).unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyContent));
        assert!(!err.is_upstream_failure());
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let err = extract_bytes(b"PK\x03\x04", Some("docx")).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(ref ext) if ext == "docx"));
    }

    #[test]
    fn test_invalid_utf8_is_unsupported() {
        let err = extract_bytes(&[0xff, 0xfe, 0x00, 0x41], Some("txt")).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(_)));
        assert!(err.is_upstream_failure());
    }

    #[test]
    fn test_corrupt_pdf_is_upstream_failure() {
        // Magic bytes take precedence over the misleading extension.
        let err = extract_bytes(b"%PDF-1.4\nthis is not a real pdf body", Some("txt")).unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_document(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, ExtractionError::Io(_)));
    }
}
