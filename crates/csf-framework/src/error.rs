//! Framework-specific error types.
//!
//! Loader errors carry the file path or the record position that failed so
//! a bad export can be located without re-running under a debugger.
//! Integrity findings are not errors; see [`crate::integrity`].

use std::path::PathBuf;

use csf_core::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading a framework.
#[derive(Debug, Error)]
pub enum FrameworkError {
    /// A required file was not found.
    #[error("framework file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// JSON parsing failed.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A record in one of the document sections failed validation.
    #[error("invalid record in {section}[{index}]: {source}")]
    InvalidRecord {
        section: &'static str,
        index: usize,
        source: ValidationError,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic serde_json error (not file-specific).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for framework operations.
pub type FrameworkResult<T> = Result<T, FrameworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let err = FrameworkError::FileNotFound {
            path: PathBuf::from("/tmp/csf-2.0-framework.json"),
        };
        assert!(format!("{err}").contains("/tmp/csf-2.0-framework.json"));
    }

    #[test]
    fn invalid_record_names_position_and_cause() {
        let err = FrameworkError::InvalidRecord {
            section: "elements",
            index: 17,
            source: ValidationError::MissingField("element_type"),
        };
        let msg = format!("{err}");
        assert!(msg.contains("elements[17]"));
        assert!(msg.contains("element_type"));
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = FrameworkError::from(io_err);
        assert!(format!("{err}").contains("access denied"));
    }
}
