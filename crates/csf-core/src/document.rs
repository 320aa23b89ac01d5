//! # Framework Documents
//!
//! A [`Document`] describes one published framework version. Elements and
//! relationships point at documents by `doc_identifier`.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Raw document record as found in a source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Document identifier.
    #[serde(default)]
    pub doc_identifier: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Version string.
    #[serde(default)]
    pub version: Option<String>,
    /// Publication website.
    #[serde(default)]
    pub website: Option<String>,
}

/// A validated framework document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DocumentRecord")]
pub struct Document {
    doc_identifier: String,
    name: String,
    version: String,
    website: String,
}

impl Document {
    /// Construct a document, validating the website scheme.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidWebsite`] when `website` does not start
    /// with `http://` or `https://`.
    pub fn new(
        doc_identifier: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        website: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let website = website.into();
        if !(website.starts_with("http://") || website.starts_with("https://")) {
            return Err(ValidationError::InvalidWebsite(website));
        }
        Ok(Self {
            doc_identifier: doc_identifier.into(),
            name: name.into(),
            version: version.into(),
            website,
        })
    }

    /// Build from a raw record.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingField`] for any absent field, otherwise as
    /// [`Document::new`].
    pub fn from_record(record: DocumentRecord) -> Result<Self, ValidationError> {
        Self::new(
            record
                .doc_identifier
                .ok_or(ValidationError::MissingField("doc_identifier"))?,
            record.name.ok_or(ValidationError::MissingField("name"))?,
            record
                .version
                .ok_or(ValidationError::MissingField("version"))?,
            record
                .website
                .ok_or(ValidationError::MissingField("website"))?,
        )
    }

    /// Document identifier (e.g., `CSF_2_0_0`).
    pub fn doc_identifier(&self) -> &str {
        &self.doc_identifier
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Publication website; always an `http://` or `https://` URL.
    pub fn website(&self) -> &str {
        &self.website
    }
}

impl TryFrom<DocumentRecord> for Document {
    type Error = ValidationError;

    fn try_from(record: DocumentRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_document() {
        let doc = Document::new(
            "CSF_2_0_0",
            "Cybersecurity Framework",
            "2.0",
            "https://www.nist.gov/cyberframework",
        )
        .unwrap();
        assert_eq!(doc.doc_identifier(), "CSF_2_0_0");
        assert_eq!(doc.version(), "2.0");
        assert_eq!(doc.website(), "https://www.nist.gov/cyberframework");
    }

    #[test]
    fn plain_http_accepted() {
        assert!(Document::new("D", "n", "1", "http://example.org").is_ok());
    }

    #[test]
    fn website_without_scheme_rejected() {
        assert_eq!(
            Document::new("D", "n", "1", "www.nist.gov"),
            Err(ValidationError::InvalidWebsite("www.nist.gov".to_string()))
        );
        assert!(Document::new("D", "n", "1", "ftp://nist.gov").is_err());
    }

    #[test]
    fn deserialization_validates_website() {
        let doc: Result<Document, _> = serde_json::from_value(serde_json::json!({
            "doc_identifier": "D",
            "name": "n",
            "version": "1",
            "website": "ftp://nist.gov"
        }));
        assert!(doc.is_err());

        let doc: Document = serde_json::from_value(serde_json::json!({
            "doc_identifier": "D",
            "name": "Cybersecurity Framework",
            "version": "1.1",
            "website": "https://nist.gov"
        }))
        .unwrap();
        assert_eq!(doc.name(), "Cybersecurity Framework");
    }

    #[test]
    fn record_missing_version() {
        let record = DocumentRecord {
            doc_identifier: Some("D".to_string()),
            name: Some("n".to_string()),
            version: None,
            website: Some("https://nist.gov".to_string()),
        };
        assert_eq!(
            Document::from_record(record),
            Err(ValidationError::MissingField("version"))
        );
    }
}
