//! # Integrity Validation
//!
//! Detects structural defects in a loaded [`Framework`]. The pass never
//! mutates the framework and never fails; it returns findings.
//!
//! ## Checks, in order
//!
//! 1. **Duplicate identifiers.** Any identifier carried by more than one
//!    element, across all kinds. At most one finding, naming the whole set
//!    in order of first occurrence.
//! 2. **Dangling relationship endpoints.** Per relationship, in order: an
//!    "invalid source" finding if the source identifier is not an element
//!    identifier, then independently an "invalid destination" finding.
//! 3. **Orphan subcategories.** Per indexed subcategory, a finding if the
//!    category before the `-` is not an indexed category.
//!
//! Category→function and example→subcategory parentage are not checked.
//!
//! ## Advisory vs structural
//!
//! The published CSF 2.0 export repeats elements once per risk-party
//! association, so duplicate findings are expected on real data.
//! [`IntegrityReport`] separates them from the structural findings that
//! indicate a broken export.

use std::collections::{HashMap, HashSet};

use crate::framework::Framework;

/// A single integrity finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IntegrityFinding {
    /// Identifiers carried by more than one element.
    DuplicateIdentifiers(Vec<String>),
    /// A relationship's source identifier is not a loaded element.
    InvalidSource(String),
    /// A relationship's destination identifier is not a loaded element.
    InvalidDestination(String),
    /// A subcategory whose derived parent category is not loaded.
    MissingCategory {
        /// The orphaned subcategory.
        subcategory: String,
        /// The category it derives as its parent.
        category: String,
    },
}

impl IntegrityFinding {
    /// Whether the finding is expected on well-formed published data.
    pub fn is_advisory(&self) -> bool {
        matches!(self, Self::DuplicateIdentifiers(_))
    }

    /// Whether the finding indicates a broken export.
    pub fn is_structural(&self) -> bool {
        !self.is_advisory()
    }
}

impl std::fmt::Display for IntegrityFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateIdentifiers(ids) => {
                write!(f, "Duplicate element IDs found: {{{}}}", ids.join(", "))
            }
            Self::InvalidSource(id) => {
                write!(f, "Relationship references invalid source: {id}")
            }
            Self::InvalidDestination(id) => {
                write!(f, "Relationship references invalid destination: {id}")
            }
            Self::MissingCategory {
                subcategory,
                category,
            } => write!(
                f,
                "Subcategory {subcategory} references non-existent category {category}"
            ),
        }
    }
}

/// Run every check against `framework`, returning findings in check order.
pub fn check(framework: &Framework) -> Vec<IntegrityFinding> {
    let mut findings = Vec::new();

    // 1. Duplicates
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for element in framework.elements() {
        *counts.entry(element.element_identifier()).or_insert(0) += 1;
    }
    let mut reported = HashSet::new();
    let duplicates: Vec<String> = framework
        .elements()
        .iter()
        .map(|e| e.element_identifier())
        .filter(|id| counts.get(id).copied().unwrap_or(0) > 1 && reported.insert(*id))
        .map(str::to_string)
        .collect();
    if !duplicates.is_empty() {
        findings.push(IntegrityFinding::DuplicateIdentifiers(duplicates));
    }

    // 2. Relationship endpoints
    for rel in framework.relationships() {
        if !counts.contains_key(rel.source_element_identifier()) {
            findings.push(IntegrityFinding::InvalidSource(
                rel.source_element_identifier().to_string(),
            ));
        }
        if !counts.contains_key(rel.dest_element_identifier()) {
            findings.push(IntegrityFinding::InvalidDestination(
                rel.dest_element_identifier().to_string(),
            ));
        }
    }

    // 3. Subcategory → category
    for subcategory in framework.subcategories() {
        let id = subcategory.element_identifier();
        let category = csf_core::identifier::category_prefix(id);
        if !framework.has_category(category) {
            findings.push(IntegrityFinding::MissingCategory {
                subcategory: id.to_string(),
                category: category.to_string(),
            });
        }
    }

    findings
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Integrity findings partitioned by severity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    /// Expected findings (duplicate identifiers).
    pub advisory: Vec<IntegrityFinding>,
    /// Findings indicating a broken export.
    pub structural: Vec<IntegrityFinding>,
}

impl IntegrityReport {
    /// Partition findings, preserving order within each group.
    pub fn from_findings(findings: Vec<IntegrityFinding>) -> Self {
        let (advisory, structural): (Vec<_>, Vec<_>) =
            findings.into_iter().partition(IntegrityFinding::is_advisory);
        Self {
            advisory,
            structural,
        }
    }

    /// No findings at all.
    pub fn is_clean(&self) -> bool {
        self.advisory.is_empty() && self.structural.is_empty()
    }

    /// No structural findings; advisory findings are tolerated.
    pub fn is_valid(&self) -> bool {
        self.structural.is_empty()
    }

    /// Total number of findings.
    pub fn len(&self) -> usize {
        self.advisory.len() + self.structural.len()
    }

    /// Whether there are no findings.
    pub fn is_empty(&self) -> bool {
        self.is_clean()
    }
}
