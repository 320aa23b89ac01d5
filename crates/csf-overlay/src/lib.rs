//! # csf-overlay — Organizational Overlay Records
//!
//! Per-organization data layered over the taxonomy: the profile, the
//! implementation status of individual subcategories, risk assessments, and
//! category-level gap analyses.
//!
//! Records reference taxonomy elements by identifier only and never consult
//! a loaded framework. Each validated type is built from a raw `*Record`
//! (`TryFrom`, also used by `Deserialize`), so range and enumeration checks
//! apply however a record arrives. Derived scores are recomputed at
//! construction.

mod fields;

pub mod gap;
pub mod implementation;
pub mod profile;
pub mod risk;

pub use gap::{GapAnalysis, GapAnalysisRecord, Priority};
pub use implementation::{
    ImplementationStatus, SubcategoryImplementation, SubcategoryImplementationRecord,
};
pub use profile::{ImplementationTier, OrganizationProfile, OrganizationProfileRecord};
pub use risk::{RiskAssessment, RiskAssessmentRecord, RiskLevel, Severity};
