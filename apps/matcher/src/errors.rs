use thiserror::Error;

/// Failure of the upstream text-extraction collaborator.
///
/// `EmptyContent` is kept separate from the other variants: extraction worked
/// but produced nothing to analyze, and callers report it differently.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document contains no readable text")]
    EmptyContent,
}

impl ExtractionError {
    /// True for failures of the extractor itself, as opposed to blank output.
    pub fn is_upstream_failure(&self) -> bool {
        !matches!(self, ExtractionError::EmptyContent)
    }
}

/// Failure to load the skills vocabulary at startup.
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("Could not read vocabulary file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Vocabulary must be a JSON array of strings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Vocabulary matcher could not be built: {0}")]
    Matcher(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_is_not_upstream_failure() {
        assert!(!ExtractionError::EmptyContent.is_upstream_failure());
        assert!(ExtractionError::Pdf("bad xref".to_string()).is_upstream_failure());
        assert!(ExtractionError::UnsupportedFormat("png".to_string()).is_upstream_failure());
    }

    #[test]
    fn test_error_messages_name_the_cause() {
        let err = ExtractionError::UnsupportedFormat("image/png".to_string());
        assert_eq!(err.to_string(), "Unsupported document format: image/png");
    }
}
