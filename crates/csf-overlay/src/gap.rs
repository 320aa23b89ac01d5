//! # Gap Analysis
//!
//! Current versus target maturity for one category, each scored 0 to 5.
//! `gap_score = target_score - current_score`, computed at construction; a
//! supplied gap is ignored. A negative gap means the category already
//! exceeds its target.

use serde::{Deserialize, Serialize};

use csf_core::{Timestamp, ValidationError};

use crate::fields::{optional_timestamp, required, score_in_range, timestamp_or_now};
use crate::risk::Severity;

/// Highest maturity score.
pub const MAX_SCORE: f64 = 5.0;

/// Priority for closing a gap.
pub type Priority = Severity;

/// Raw gap analysis record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysisRecord {
    /// Organization identifier.
    #[serde(default)]
    pub org_id: Option<String>,
    /// Category identifier.
    #[serde(default)]
    pub category_id: Option<String>,
    /// Current maturity, 0 through 5.
    #[serde(default)]
    pub current_score: Option<f64>,
    /// Target maturity, 0 through 5.
    #[serde(default)]
    pub target_score: Option<f64>,
    /// Accepted and discarded; always recomputed.
    #[serde(default)]
    pub gap_score: Option<f64>,
    /// Priority label.
    #[serde(default)]
    pub priority: Option<String>,
    /// Effort estimate, free text.
    #[serde(default)]
    pub estimated_effort: Option<String>,
    /// Target completion (RFC 3339).
    #[serde(default)]
    pub target_date: Option<String>,
    /// Analysis time (RFC 3339); now when absent.
    #[serde(default)]
    pub analysis_date: Option<String>,
}

/// A validated gap analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GapAnalysisRecord")]
pub struct GapAnalysis {
    org_id: String,
    category_id: String,
    current_score: f64,
    target_score: f64,
    gap_score: f64,
    priority: Priority,
    estimated_effort: Option<String>,
    target_date: Option<Timestamp>,
    analysis_date: Timestamp,
}

impl GapAnalysis {
    /// Construct an analysis dated now.
    ///
    /// # Errors
    ///
    /// [`ValidationError::OutOfRange`] when either score is outside 0 to 5.
    pub fn new(
        org_id: impl Into<String>,
        category_id: impl Into<String>,
        current_score: f64,
        target_score: f64,
        priority: Priority,
    ) -> Result<Self, ValidationError> {
        let current_score = score_in_range("current_score", current_score, 0.0, MAX_SCORE)?;
        let target_score = score_in_range("target_score", target_score, 0.0, MAX_SCORE)?;
        Ok(Self {
            org_id: org_id.into(),
            category_id: category_id.into(),
            current_score,
            target_score,
            gap_score: target_score - current_score,
            priority,
            estimated_effort: None,
            target_date: None,
            analysis_date: Timestamp::now(),
        })
    }

    /// Attach an effort estimate.
    pub fn with_estimated_effort(mut self, effort: impl Into<String>) -> Self {
        self.estimated_effort = Some(effort.into());
        self
    }

    /// Set the target completion date.
    pub fn with_target_date(mut self, at: Timestamp) -> Self {
        self.target_date = Some(at);
        self
    }

    /// Organization identifier.
    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    /// Category identifier.
    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    /// Current maturity.
    pub fn current_score(&self) -> f64 {
        self.current_score
    }

    /// Target maturity.
    pub fn target_score(&self) -> f64 {
        self.target_score
    }

    /// Target minus current.
    pub fn gap_score(&self) -> f64 {
        self.gap_score
    }

    /// Whether current maturity meets or exceeds the target.
    pub fn is_closed(&self) -> bool {
        self.gap_score <= 0.0
    }

    /// Priority.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Effort estimate.
    pub fn estimated_effort(&self) -> Option<&str> {
        self.estimated_effort.as_deref()
    }

    /// Target completion date.
    pub fn target_date(&self) -> Option<Timestamp> {
        self.target_date
    }

    /// Analysis time.
    pub fn analysis_date(&self) -> Timestamp {
        self.analysis_date
    }
}

impl TryFrom<GapAnalysisRecord> for GapAnalysis {
    type Error = ValidationError;

    fn try_from(record: GapAnalysisRecord) -> Result<Self, Self::Error> {
        let priority = Severity::parse("priority", &required("priority", record.priority)?)?;
        let analysis = Self::new(
            required("org_id", record.org_id)?,
            required("category_id", record.category_id)?,
            required("current_score", record.current_score)?,
            required("target_score", record.target_score)?,
            priority,
        )?;
        Ok(Self {
            estimated_effort: record.estimated_effort,
            target_date: optional_timestamp(record.target_date)?,
            analysis_date: timestamp_or_now(record.analysis_date)?,
            ..analysis
        })
    }
}
