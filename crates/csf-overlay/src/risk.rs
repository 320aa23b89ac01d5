//! # Risk Assessment
//!
//! Likelihood and impact of a risk against one element, each scored 1 to 5.
//! The risk score is `likelihood * impact / 5.0`, normalized onto the 0–5
//! scale used by maturity and gap scores. It is computed at construction;
//! a score supplied in the input is accepted and ignored.

use serde::{Deserialize, Serialize};

use csf_core::{Timestamp, ValidationError};

use crate::fields::{int_in_range, optional_timestamp, required, timestamp_or_now};

/// Lowest likelihood or impact score.
pub const MIN_FACTOR: u8 = 1;
/// Highest likelihood or impact score.
pub const MAX_FACTOR: u8 = 5;

/// Four-step severity scale used for risk levels and gap priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
    /// Critical.
    Critical,
}

/// Risk level of an assessment.
pub type RiskLevel = Severity;

impl Severity {
    /// All levels, ascending.
    pub fn all() -> &'static [Severity] {
        &[Self::Low, Self::Medium, Self::High, Self::Critical]
    }

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Parse an exact label, naming `field` in the error.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, ValidationError> {
        Self::all()
            .iter()
            .copied()
            .find(|s| s.as_str() == value)
            .ok_or_else(|| ValidationError::unknown_value(field, value))
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `likelihood * impact / 5.0`.
pub fn risk_score(likelihood: u8, impact: u8) -> f64 {
    f64::from(likelihood) * f64::from(impact) / 5.0
}

/// Raw risk assessment record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessmentRecord {
    /// Organization identifier.
    #[serde(default)]
    pub org_id: Option<String>,
    /// Assessed element identifier (any kind).
    #[serde(default)]
    pub element_id: Option<String>,
    /// Level label.
    #[serde(default)]
    pub risk_level: Option<String>,
    /// Likelihood, 1 through 5.
    #[serde(default)]
    pub likelihood: Option<i64>,
    /// Impact, 1 through 5.
    #[serde(default)]
    pub impact: Option<i64>,
    /// Accepted and discarded; always recomputed.
    #[serde(default)]
    pub risk_score: Option<f64>,
    /// Mitigation status, free text.
    #[serde(default)]
    pub mitigation_status: Option<String>,
    /// Mitigation plan.
    #[serde(default)]
    pub mitigation_plan: Option<String>,
    /// Assessment time (RFC 3339); now when absent.
    #[serde(default)]
    pub assessment_date: Option<String>,
    /// Next review time (RFC 3339).
    #[serde(default)]
    pub next_review_date: Option<String>,
}

/// A validated risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RiskAssessmentRecord")]
pub struct RiskAssessment {
    org_id: String,
    element_id: String,
    risk_level: RiskLevel,
    likelihood: u8,
    impact: u8,
    risk_score: f64,
    mitigation_status: String,
    mitigation_plan: Option<String>,
    assessment_date: Timestamp,
    next_review_date: Option<Timestamp>,
}

impl RiskAssessment {
    /// Construct an assessment dated now.
    ///
    /// # Errors
    ///
    /// [`ValidationError::OutOfRange`] when likelihood or impact is outside
    /// 1 to 5.
    pub fn new(
        org_id: impl Into<String>,
        element_id: impl Into<String>,
        risk_level: RiskLevel,
        likelihood: u8,
        impact: u8,
        mitigation_status: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let likelihood = check_factor("likelihood", i64::from(likelihood))?;
        let impact = check_factor("impact", i64::from(impact))?;
        Ok(Self {
            org_id: org_id.into(),
            element_id: element_id.into(),
            risk_level,
            likelihood,
            impact,
            risk_score: risk_score(likelihood, impact),
            mitigation_status: mitigation_status.into(),
            mitigation_plan: None,
            assessment_date: Timestamp::now(),
            next_review_date: None,
        })
    }

    /// Attach a mitigation plan.
    pub fn with_mitigation_plan(mut self, plan: impl Into<String>) -> Self {
        self.mitigation_plan = Some(plan.into());
        self
    }

    /// Schedule the next review.
    pub fn with_next_review(mut self, at: Timestamp) -> Self {
        self.next_review_date = Some(at);
        self
    }

    /// Organization identifier.
    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    /// Assessed element identifier.
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Risk level.
    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    /// Likelihood, 1 through 5.
    pub fn likelihood(&self) -> u8 {
        self.likelihood
    }

    /// Impact, 1 through 5.
    pub fn impact(&self) -> u8 {
        self.impact
    }

    /// Normalized risk score, 0.2 through 5.0.
    pub fn risk_score(&self) -> f64 {
        self.risk_score
    }

    /// Mitigation status.
    pub fn mitigation_status(&self) -> &str {
        &self.mitigation_status
    }

    /// Mitigation plan.
    pub fn mitigation_plan(&self) -> Option<&str> {
        self.mitigation_plan.as_deref()
    }

    /// Assessment time.
    pub fn assessment_date(&self) -> Timestamp {
        self.assessment_date
    }

    /// Next scheduled review.
    pub fn next_review_date(&self) -> Option<Timestamp> {
        self.next_review_date
    }

    /// Whether a review is scheduled at or before `now`.
    pub fn is_review_due(&self, now: Timestamp) -> bool {
        self.next_review_date.is_some_and(|at| at <= now)
    }
}

fn check_factor(field: &'static str, value: i64) -> Result<u8, ValidationError> {
    int_in_range(field, value, i64::from(MIN_FACTOR), i64::from(MAX_FACTOR))
}

impl TryFrom<RiskAssessmentRecord> for RiskAssessment {
    type Error = ValidationError;

    fn try_from(record: RiskAssessmentRecord) -> Result<Self, Self::Error> {
        let org_id = required("org_id", record.org_id)?;
        let element_id = required("element_id", record.element_id)?;
        let risk_level = Severity::parse("risk_level", &required("risk_level", record.risk_level)?)?;
        let likelihood = check_factor("likelihood", required("likelihood", record.likelihood)?)?;
        let impact = check_factor("impact", required("impact", record.impact)?)?;
        let mitigation_status = required("mitigation_status", record.mitigation_status)?;
        Ok(Self {
            org_id,
            element_id,
            risk_level,
            likelihood,
            impact,
            risk_score: risk_score(likelihood, impact),
            mitigation_status,
            mitigation_plan: record.mitigation_plan,
            assessment_date: timestamp_or_now(record.assessment_date)?,
            next_review_date: optional_timestamp(record.next_review_date)?,
        })
    }
}
