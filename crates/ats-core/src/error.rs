use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of document text extraction.
///
/// Returned as values so the caller can surface them to the user instead of
/// aborting the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("File not found at {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported file format {0}")]
    UnsupportedFormat(String),

    #[error("Error parsing file: {0}")]
    ExtractionFailed(String),
}

impl ExtractError {
    /// Stable machine-readable code, used by the HTTP layer.
    pub fn code(&self) -> &'static str {
        match self {
            ExtractError::FileNotFound(_) => "FILE_NOT_FOUND",
            ExtractError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            ExtractError::ExtractionFailed(_) => "EXTRACTION_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = ExtractError::FileNotFound(PathBuf::from("/tmp/missing.pdf"));
        assert_eq!(err.to_string(), "File not found at /tmp/missing.pdf");

        let err = ExtractError::UnsupportedFormat(".rtf".to_string());
        assert_eq!(err.to_string(), "Unsupported file format .rtf");
        assert_eq!(err.code(), "UNSUPPORTED_FORMAT");
    }
}
