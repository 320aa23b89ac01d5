//! # Error Hierarchy
//!
//! Structured error types for the CSF taxonomy stack, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Construction of every element, relationship, document, and overlay record
//! funnels its failures through [`ValidationError`]. Each variant carries the
//! offending input and, where a shape is involved, the expected shape, so a
//! bad record in a bulk load can be diagnosed from the message alone.

use thiserror::Error;

/// Top-level error type for the CSF taxonomy stack.
#[derive(Error, Debug)]
pub enum CsfError {
    /// Record validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors raised while constructing a typed record.
///
/// Always fatal to the single construction that raised it. Whether a bad
/// record aborts a whole load or is skipped is the caller's decision.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field was absent from the raw record.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The element identifier was present but empty.
    #[error("element identifier cannot be empty")]
    EmptyIdentifier,

    /// The identifier does not match the grammar required by its kind.
    #[error("invalid {kind} identifier: \"{value}\" (expected {expected})")]
    InvalidIdentifier {
        /// The element kind whose grammar was violated.
        kind: String,
        /// The identifier that failed.
        value: String,
        /// Human-readable description of the required shape.
        expected: &'static str,
    },

    /// Relationship type is not one of the recognized edge types.
    #[error("invalid relationship type: \"{0}\" (expected projection, related_to, supersedes, or incorporated_into)")]
    UnknownRelationshipType(String),

    /// Document website does not carry an HTTP(S) scheme.
    #[error("invalid website: \"{0}\" (expected an http:// or https:// URL)")]
    InvalidWebsite(String),

    /// A numeric field fell outside its permitted closed range.
    #[error("{field} out of range: {value} (expected {min} to {max})")]
    OutOfRange {
        /// Field name.
        field: &'static str,
        /// The rejected value, rendered as text.
        value: String,
        /// Inclusive lower bound.
        min: String,
        /// Inclusive upper bound.
        max: String,
    },

    /// A string field did not match any member of its enumeration.
    #[error("invalid {field}: \"{value}\"")]
    UnknownEnumValue {
        /// Field name.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Timestamp string is not valid RFC 3339.
    #[error("invalid timestamp: \"{value}\" ({reason})")]
    InvalidTimestamp {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The record could not be read into its raw shape at all (a field of
    /// the wrong JSON type, or a record that is not an object).
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

impl ValidationError {
    /// Shorthand for an [`ValidationError::OutOfRange`] over any displayable bounds.
    pub fn out_of_range(
        field: &'static str,
        value: impl std::fmt::Display,
        min: impl std::fmt::Display,
        max: impl std::fmt::Display,
    ) -> Self {
        Self::OutOfRange {
            field,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Shorthand for an [`ValidationError::UnknownEnumValue`].
    pub fn unknown_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csf_error_validation_display() {
        let err = CsfError::Validation(ValidationError::MissingField("doc_identifier"));
        let msg = format!("{err}");
        assert!(msg.contains("validation error"));
        assert!(msg.contains("doc_identifier"));
    }

    #[test]
    fn malformed_record_display() {
        let err = ValidationError::MalformedRecord("invalid type: integer `42`".to_string());
        assert_eq!(format!("{err}"), "malformed record: invalid type: integer `42`");
    }

    #[test]
    fn invalid_identifier_names_expected_shape() {
        let err = ValidationError::InvalidIdentifier {
            kind: "subcategory".to_string(),
            value: "GV.OC.INVALID".to_string(),
            expected: "XX.YY-NN",
        };
        let msg = format!("{err}");
        assert!(msg.contains("GV.OC.INVALID"));
        assert!(msg.contains("XX.YY-NN"));
        assert!(msg.contains("subcategory"));
    }

    #[test]
    fn out_of_range_display() {
        let err = ValidationError::out_of_range("maturity_level", 7, 0, 5);
        let msg = format!("{err}");
        assert!(msg.contains("maturity_level"));
        assert!(msg.contains('7'));
        assert!(msg.contains("0 to 5"));
    }

    #[test]
    fn unknown_value_display() {
        let err = ValidationError::unknown_value("risk_level", "Severe");
        assert!(format!("{err}").contains("Severe"));
    }

    #[test]
    fn unknown_relationship_type_lists_allowed() {
        let err = ValidationError::UnknownRelationshipType("parent_of".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("parent_of"));
        assert!(msg.contains("incorporated_into"));
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = CsfError::from(io_err);
        assert!(format!("{err}").contains("access denied"));
    }
}
