//! # Subcategory Implementation
//!
//! How far an organization has implemented one subcategory. The
//! subcategory identifier is checked against the grammar only; whether it
//! names a loaded subcategory is not this record's concern.

use serde::{Deserialize, Serialize};

use csf_core::identifier;
use csf_core::{ElementType, Timestamp, ValidationError};

use crate::fields::{int_in_range, required, timestamp_or_now};

/// Highest maturity level.
pub const MAX_MATURITY: u8 = 5;

/// Implementation status of a subcategory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImplementationStatus {
    /// Nothing in place.
    #[serde(rename = "Not Implemented")]
    NotImplemented,
    /// Some outcomes achieved.
    #[serde(rename = "Partially Implemented")]
    PartiallyImplemented,
    /// Most outcomes achieved.
    #[serde(rename = "Largely Implemented")]
    LargelyImplemented,
    /// All outcomes achieved.
    #[serde(rename = "Fully Implemented")]
    FullyImplemented,
}

impl ImplementationStatus {
    /// All statuses, least to most complete.
    pub fn all() -> &'static [ImplementationStatus] {
        &[
            Self::NotImplemented,
            Self::PartiallyImplemented,
            Self::LargelyImplemented,
            Self::FullyImplemented,
        ]
    }

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotImplemented => "Not Implemented",
            Self::PartiallyImplemented => "Partially Implemented",
            Self::LargelyImplemented => "Largely Implemented",
            Self::FullyImplemented => "Fully Implemented",
        }
    }

    /// Parse an exact display label.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::all()
            .iter()
            .copied()
            .find(|s| s.as_str() == value)
            .ok_or_else(|| ValidationError::unknown_value("implementation_status", value))
    }
}

impl std::fmt::Display for ImplementationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw implementation record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryImplementationRecord {
    /// Organization identifier.
    #[serde(default)]
    pub org_id: Option<String>,
    /// Subcategory identifier (`GV.OC-01`).
    #[serde(default)]
    pub subcategory_id: Option<String>,
    /// Status label.
    #[serde(default)]
    pub implementation_status: Option<String>,
    /// Maturity, 0 through 5.
    #[serde(default)]
    pub maturity_level: Option<i64>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Evidence links.
    #[serde(default)]
    pub evidence: Option<Vec<String>>,
    /// Assessment time (RFC 3339); now when absent.
    #[serde(default)]
    pub last_assessed: Option<String>,
    /// Assessor identifier.
    #[serde(default)]
    pub assessed_by: Option<String>,
}

/// A validated subcategory implementation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SubcategoryImplementationRecord")]
pub struct SubcategoryImplementation {
    org_id: String,
    subcategory_id: String,
    implementation_status: ImplementationStatus,
    maturity_level: u8,
    notes: Option<String>,
    evidence: Vec<String>,
    last_assessed: Timestamp,
    assessed_by: Option<String>,
}

impl SubcategoryImplementation {
    /// Construct an entry assessed now, with no notes or evidence.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidIdentifier`] for a malformed subcategory
    /// identifier, [`ValidationError::OutOfRange`] for a maturity above 5.
    pub fn new(
        org_id: impl Into<String>,
        subcategory_id: impl Into<String>,
        implementation_status: ImplementationStatus,
        maturity_level: u8,
    ) -> Result<Self, ValidationError> {
        let subcategory_id = subcategory_id.into();
        identifier::validate_identifier(&ElementType::Subcategory, &subcategory_id)?;
        let maturity_level = int_in_range(
            "maturity_level",
            i64::from(maturity_level),
            0,
            i64::from(MAX_MATURITY),
        )?;
        Ok(Self {
            org_id: org_id.into(),
            subcategory_id,
            implementation_status,
            maturity_level,
            notes: None,
            evidence: Vec::new(),
            last_assessed: Timestamp::now(),
            assessed_by: None,
        })
    }

    /// Attach notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Append an evidence link.
    pub fn with_evidence(mut self, link: impl Into<String>) -> Self {
        self.evidence.push(link.into());
        self
    }

    /// Record the assessor.
    pub fn with_assessor(mut self, assessor: impl Into<String>) -> Self {
        self.assessed_by = Some(assessor.into());
        self
    }

    /// Organization identifier.
    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    /// Subcategory identifier.
    pub fn subcategory_id(&self) -> &str {
        &self.subcategory_id
    }

    /// Category the subcategory belongs to, derived from its identifier.
    pub fn category_id(&self) -> &str {
        identifier::category_prefix(&self.subcategory_id)
    }

    /// Implementation status.
    pub fn implementation_status(&self) -> ImplementationStatus {
        self.implementation_status
    }

    /// Maturity level, 0 through 5.
    pub fn maturity_level(&self) -> u8 {
        self.maturity_level
    }

    /// Notes.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Evidence links.
    pub fn evidence(&self) -> &[String] {
        &self.evidence
    }

    /// Time of last assessment.
    pub fn last_assessed(&self) -> Timestamp {
        self.last_assessed
    }

    /// Assessor identifier.
    pub fn assessed_by(&self) -> Option<&str> {
        self.assessed_by.as_deref()
    }
}

impl TryFrom<SubcategoryImplementationRecord> for SubcategoryImplementation {
    type Error = ValidationError;

    fn try_from(record: SubcategoryImplementationRecord) -> Result<Self, Self::Error> {
        let org_id = required("org_id", record.org_id)?;
        let subcategory_id = required("subcategory_id", record.subcategory_id)?;
        identifier::validate_identifier(&ElementType::Subcategory, &subcategory_id)?;
        let status = ImplementationStatus::parse(&required(
            "implementation_status",
            record.implementation_status,
        )?)?;
        let maturity_level = int_in_range(
            "maturity_level",
            required("maturity_level", record.maturity_level)?,
            0,
            i64::from(MAX_MATURITY),
        )?;
        Ok(Self {
            org_id,
            subcategory_id,
            implementation_status: status,
            maturity_level,
            notes: record.notes,
            evidence: record.evidence.unwrap_or_default(),
            last_assessed: timestamp_or_now(record.last_assessed)?,
            assessed_by: record.assessed_by,
        })
    }
}
