//! # Bulk Loader
//!
//! Builds a [`Framework`] from a CSF JSON export:
//!
//! ```json
//! {
//!   "response": {
//!     "elements": {
//!       "documents":     [ { "doc_identifier": "...", ... } ],
//!       "elements":      [ { "element_type": "function", ... } ],
//!       "relationships": [ { "relationship_identifier": "projection", ... } ]
//!     }
//!   }
//! }
//! ```
//!
//! Each section defaults to empty when absent, but `response.elements`
//! itself is required. Unknown record fields are ignored. Records are read
//! one at a time, so a record with a field of the wrong JSON type is handled
//! by the [`LoadMode`] like any other invalid record. Other source formats
//! (CSV extracts, relational rows) can fill a [`RawFramework`] directly and
//! share the same record validation.
//!
//! After assembly the integrity pass runs once and its findings are logged.
//! Findings never fail a load.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use csf_core::{
    Document, DocumentRecord, Element, ElementRecord, Relationship, RelationshipRecord,
    ValidationError,
};

use crate::error::{FrameworkError, FrameworkResult};
use crate::framework::Framework;

/// How invalid records are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadMode {
    /// Abort on the first invalid record.
    #[default]
    Strict,
    /// Skip invalid records, logging each at `warn`.
    Lenient,
}

/// Unvalidated records for the three sections of a framework.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFramework {
    /// Document records.
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
    /// Element records.
    #[serde(default)]
    pub elements: Vec<ElementRecord>,
    /// Relationship records.
    #[serde(default)]
    pub relationships: Vec<RelationshipRecord>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    response: Response,
}

#[derive(Debug, Deserialize)]
struct Response {
    elements: JsonSections,
}

/// The three sections of a JSON export with each record still untyped.
#[derive(Debug, Deserialize)]
struct JsonSections {
    #[serde(default)]
    documents: Vec<Value>,
    #[serde(default)]
    elements: Vec<Value>,
    #[serde(default)]
    relationships: Vec<Value>,
}

/// Read one JSON record into its raw shape.
fn decode<R: DeserializeOwned>(value: Value) -> Result<R, ValidationError> {
    serde_json::from_value(value).map_err(|e| ValidationError::MalformedRecord(e.to_string()))
}

impl JsonSections {
    fn build(self, mode: LoadMode) -> FrameworkResult<Framework> {
        let documents = build_section("documents", self.documents, mode, |v| {
            Document::from_record(decode(v)?)
        })?;
        let elements = build_section("elements", self.elements, mode, |v| {
            Element::from_record(decode(v)?)
        })?;
        let relationships = build_section("relationships", self.relationships, mode, |v| {
            Relationship::from_record(decode(v)?)
        })?;
        Ok(assemble(documents, elements, relationships))
    }
}

/// Validate one section's records, applying `mode` to failures.
fn build_section<R, T>(
    section: &'static str,
    records: Vec<R>,
    mode: LoadMode,
    construct: impl Fn(R) -> Result<T, ValidationError>,
) -> FrameworkResult<Vec<T>> {
    let mut built = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match construct(record) {
            Ok(value) => built.push(value),
            Err(source) => match mode {
                LoadMode::Strict => {
                    return Err(FrameworkError::InvalidRecord {
                        section,
                        index,
                        source,
                    })
                }
                LoadMode::Lenient => {
                    tracing::warn!(section, index, error = %source, "skipping invalid record");
                }
            },
        }
    }
    Ok(built)
}

impl RawFramework {
    /// Validate every record and assemble the framework.
    ///
    /// # Errors
    ///
    /// In [`LoadMode::Strict`], [`FrameworkError::InvalidRecord`] for the
    /// first record that fails validation. [`LoadMode::Lenient`] never fails.
    pub fn build(self, mode: LoadMode) -> FrameworkResult<Framework> {
        let documents = build_section("documents", self.documents, mode, Document::from_record)?;
        let elements = build_section("elements", self.elements, mode, Element::from_record)?;
        let relationships = build_section(
            "relationships",
            self.relationships,
            mode,
            Relationship::from_record,
        )?;
        Ok(assemble(documents, elements, relationships))
    }
}

fn assemble(
    documents: Vec<Document>,
    elements: Vec<Element>,
    relationships: Vec<Relationship>,
) -> Framework {
    let framework = Framework::new(documents, elements, relationships);
    let (functions, categories, subcategories) = framework.index_sizes();
    tracing::info!(
        documents = framework.documents().len(),
        elements = framework.elements().len(),
        relationships = framework.relationships().len(),
        functions,
        categories,
        subcategories,
        "framework assembled"
    );

    log_integrity(&framework);
    framework
}

fn log_integrity(framework: &Framework) {
    let report = framework.integrity_report();
    for finding in &report.advisory {
        tracing::debug!(%finding, "framework integrity advisory");
    }
    for finding in &report.structural {
        tracing::warn!(%finding, "framework integrity issue");
    }
    if !report.is_valid() {
        tracing::warn!(
            structural = report.structural.len(),
            advisory = report.advisory.len(),
            "framework loaded with integrity issues"
        );
    }
}

/// Parse a JSON export held in memory.
///
/// # Errors
///
/// [`FrameworkError::Json`] when the text is not a JSON export envelope.
/// In [`LoadMode::Strict`], [`FrameworkError::InvalidRecord`] for the first
/// record that is malformed or fails validation.
pub fn parse_framework_json(content: &str, mode: LoadMode) -> FrameworkResult<Framework> {
    let envelope: Envelope = serde_json::from_str(content)?;
    envelope.response.elements.build(mode)
}

/// Load a JSON export from disk, rejecting any invalid record.
pub fn load_framework_from_json(path: &Path) -> FrameworkResult<Framework> {
    load_framework_from_json_with(path, LoadMode::Strict)
}

/// Load a JSON export from disk.
///
/// # Errors
///
/// [`FrameworkError::FileNotFound`] / [`FrameworkError::Io`] when the file
/// cannot be read, [`FrameworkError::JsonParse`] when it is not a JSON
/// export envelope, otherwise as [`parse_framework_json`].
pub fn load_framework_from_json_with(path: &Path, mode: LoadMode) -> FrameworkResult<Framework> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FrameworkError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FrameworkError::Io(e)
        }
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read framework export");

    let envelope: Envelope =
        serde_json::from_str(&content).map_err(|e| FrameworkError::JsonParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    envelope.response.elements.build(mode)
}
