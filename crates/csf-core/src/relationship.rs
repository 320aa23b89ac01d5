//! # Relationships
//!
//! A [`Relationship`] is a directed, typed edge between two elements,
//! possibly in different documents (framework versions), together with the
//! document that asserted it.
//!
//! Construction only checks the edge type. Whether the endpoints exist is a
//! property of the whole framework, checked by the integrity pass, since
//! relationships may be loaded before the elements they reference.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The recognized edge types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    /// Element projected into another framework version.
    Projection,
    /// Loose association.
    RelatedTo,
    /// Source replaces destination.
    Supersedes,
    /// Source was folded into destination.
    IncorporatedInto,
}

impl RelationshipType {
    /// All edge types.
    pub fn all() -> &'static [RelationshipType] {
        &[
            Self::Projection,
            Self::RelatedTo,
            Self::Supersedes,
            Self::IncorporatedInto,
        ]
    }

    /// Source identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Projection => "projection",
            Self::RelatedTo => "related_to",
            Self::Supersedes => "supersedes",
            Self::IncorporatedInto => "incorporated_into",
        }
    }

    /// Parse a source identifier string.
    ///
    /// # Errors
    ///
    /// [`ValidationError::UnknownRelationshipType`] for anything but the
    /// four recognized strings.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| ValidationError::UnknownRelationshipType(value.to_string()))
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw relationship record as found in a source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    /// Document of the source element.
    #[serde(default)]
    pub source_doc_identifier: Option<String>,
    /// Source element identifier.
    #[serde(default)]
    pub source_element_identifier: Option<String>,
    /// Document of the destination element.
    #[serde(default)]
    pub dest_doc_identifier: Option<String>,
    /// Destination element identifier.
    #[serde(default)]
    pub dest_element_identifier: Option<String>,
    /// Edge type string.
    #[serde(default)]
    pub relationship_identifier: Option<String>,
    /// Document asserting the edge.
    #[serde(default)]
    pub provenance_doc_identifier: Option<String>,
}

/// A validated directed edge. Multiple edges between the same pair are legal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RelationshipRecord")]
pub struct Relationship {
    source_doc_identifier: String,
    source_element_identifier: String,
    dest_doc_identifier: String,
    dest_element_identifier: String,
    #[serde(rename = "relationship_identifier")]
    relationship_type: RelationshipType,
    provenance_doc_identifier: String,
}

impl Relationship {
    /// Construct an edge within a single document, with that document as
    /// provenance.
    pub fn within(
        doc_identifier: &str,
        source: impl Into<String>,
        relationship_type: RelationshipType,
        dest: impl Into<String>,
    ) -> Self {
        Self {
            source_doc_identifier: doc_identifier.to_string(),
            source_element_identifier: source.into(),
            dest_doc_identifier: doc_identifier.to_string(),
            dest_element_identifier: dest.into(),
            relationship_type,
            provenance_doc_identifier: doc_identifier.to_string(),
        }
    }

    /// Build from a raw record.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingField`] for any absent field,
    /// [`ValidationError::UnknownRelationshipType`] for an unrecognized type.
    pub fn from_record(record: RelationshipRecord) -> Result<Self, ValidationError> {
        fn required(
            value: Option<String>,
            field: &'static str,
        ) -> Result<String, ValidationError> {
            value.ok_or(ValidationError::MissingField(field))
        }

        let relationship_type = RelationshipType::parse(&required(
            record.relationship_identifier,
            "relationship_identifier",
        )?)?;

        Ok(Self {
            source_doc_identifier: required(record.source_doc_identifier, "source_doc_identifier")?,
            source_element_identifier: required(
                record.source_element_identifier,
                "source_element_identifier",
            )?,
            dest_doc_identifier: required(record.dest_doc_identifier, "dest_doc_identifier")?,
            dest_element_identifier: required(
                record.dest_element_identifier,
                "dest_element_identifier",
            )?,
            relationship_type,
            provenance_doc_identifier: required(
                record.provenance_doc_identifier,
                "provenance_doc_identifier",
            )?,
        })
    }

    /// Document of the source element.
    pub fn source_doc_identifier(&self) -> &str {
        &self.source_doc_identifier
    }

    /// Source element identifier.
    pub fn source_element_identifier(&self) -> &str {
        &self.source_element_identifier
    }

    /// Document of the destination element.
    pub fn dest_doc_identifier(&self) -> &str {
        &self.dest_doc_identifier
    }

    /// Destination element identifier.
    pub fn dest_element_identifier(&self) -> &str {
        &self.dest_element_identifier
    }

    /// Edge type.
    pub fn relationship_type(&self) -> RelationshipType {
        self.relationship_type
    }

    /// Document asserting the edge.
    pub fn provenance_doc_identifier(&self) -> &str {
        &self.provenance_doc_identifier
    }

    /// Whether `element_id` is this edge's source.
    pub fn is_source(&self, element_id: &str) -> bool {
        self.source_element_identifier == element_id
    }

    /// Whether `element_id` is this edge's destination.
    pub fn is_dest(&self, element_id: &str) -> bool {
        self.dest_element_identifier == element_id
    }

    /// Whether source and destination are the same element identifier.
    pub fn is_self_loop(&self) -> bool {
        self.source_element_identifier == self.dest_element_identifier
    }
}

impl TryFrom<RelationshipRecord> for Relationship {
    type Error = ValidationError;

    fn try_from(record: RelationshipRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}
