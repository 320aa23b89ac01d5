//! # Organization Profile
//!
//! An organization's implementation profile: who it is and which
//! implementation tier it sits at and aims for.
//!
//! `updated_at` is stamped at construction regardless of input and
//! refreshed by every mutator.

use serde::{Deserialize, Serialize};

use csf_core::{Timestamp, ValidationError};

use crate::fields::{required, timestamp_or_now};

/// Implementation tier, from least to most rigorous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImplementationTier {
    /// Tier 1.
    #[serde(rename = "Tier 1 - Partial")]
    Partial,
    /// Tier 2.
    #[serde(rename = "Tier 2 - Risk Informed")]
    RiskInformed,
    /// Tier 3.
    #[serde(rename = "Tier 3 - Repeatable")]
    Repeatable,
    /// Tier 4.
    #[serde(rename = "Tier 4 - Adaptive")]
    Adaptive,
}

impl ImplementationTier {
    /// All tiers in ascending order.
    pub fn all() -> &'static [ImplementationTier] {
        &[
            Self::Partial,
            Self::RiskInformed,
            Self::Repeatable,
            Self::Adaptive,
        ]
    }

    /// Tier number, 1 through 4.
    pub fn level(&self) -> u8 {
        match self {
            Self::Partial => 1,
            Self::RiskInformed => 2,
            Self::Repeatable => 3,
            Self::Adaptive => 4,
        }
    }

    /// Display label (`"Tier 2 - Risk Informed"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Partial => "Tier 1 - Partial",
            Self::RiskInformed => "Tier 2 - Risk Informed",
            Self::Repeatable => "Tier 3 - Repeatable",
            Self::Adaptive => "Tier 4 - Adaptive",
        }
    }

    /// Parse a display label.
    ///
    /// # Errors
    ///
    /// [`ValidationError::UnknownEnumValue`] for anything but an exact label.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, ValidationError> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| ValidationError::unknown_value(field, value))
    }
}

impl std::fmt::Display for ImplementationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw profile record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationProfileRecord {
    /// Organization identifier.
    #[serde(default)]
    pub org_id: Option<String>,
    /// Organization name.
    #[serde(default)]
    pub org_name: Option<String>,
    /// Industry sector.
    #[serde(default)]
    pub industry: Option<String>,
    /// Size category.
    #[serde(default)]
    pub size: Option<String>,
    /// Creation time (RFC 3339); now when absent.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Accepted and discarded.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Current tier label.
    #[serde(default)]
    pub current_tier: Option<String>,
    /// Target tier label.
    #[serde(default)]
    pub target_tier: Option<String>,
}

/// A validated organization profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrganizationProfileRecord")]
pub struct OrganizationProfile {
    org_id: String,
    org_name: String,
    industry: String,
    size: String,
    created_at: Timestamp,
    updated_at: Timestamp,
    current_tier: Option<ImplementationTier>,
    target_tier: Option<ImplementationTier>,
}

impl OrganizationProfile {
    /// A new profile with no tiers set, created now.
    pub fn new(
        org_id: impl Into<String>,
        org_name: impl Into<String>,
        industry: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            org_id: org_id.into(),
            org_name: org_name.into(),
            industry: industry.into(),
            size: size.into(),
            created_at: now,
            updated_at: now,
            current_tier: None,
            target_tier: None,
        }
    }

    /// Organization identifier.
    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    /// Organization name.
    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// Industry sector.
    pub fn industry(&self) -> &str {
        &self.industry
    }

    /// Size category.
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Creation time.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Last modification time.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Current implementation tier.
    pub fn current_tier(&self) -> Option<ImplementationTier> {
        self.current_tier
    }

    /// Target implementation tier.
    pub fn target_tier(&self) -> Option<ImplementationTier> {
        self.target_tier
    }

    /// Tiers between current and target; `None` unless both are set.
    /// Negative when the target is below the current tier.
    pub fn tier_gap(&self) -> Option<i8> {
        let current = self.current_tier?.level() as i8;
        let target = self.target_tier?.level() as i8;
        Some(target - current)
    }

    // -- Mutators --

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    /// Set or clear the current tier.
    pub fn set_current_tier(&mut self, tier: Option<ImplementationTier>) {
        self.current_tier = tier;
        self.touch();
    }

    /// Set or clear the target tier.
    pub fn set_target_tier(&mut self, tier: Option<ImplementationTier>) {
        self.target_tier = tier;
        self.touch();
    }

    /// Change the organization name.
    pub fn rename(&mut self, org_name: impl Into<String>) {
        self.org_name = org_name.into();
        self.touch();
    }
}

impl TryFrom<OrganizationProfileRecord> for OrganizationProfile {
    type Error = ValidationError;

    fn try_from(record: OrganizationProfileRecord) -> Result<Self, Self::Error> {
        let parse_tier = |field: &'static str, value: Option<String>| {
            value
                .as_deref()
                .map(|v| ImplementationTier::parse(field, v))
                .transpose()
        };
        Ok(Self {
            org_id: required("org_id", record.org_id)?,
            org_name: required("org_name", record.org_name)?,
            industry: required("industry", record.industry)?,
            size: required("size", record.size)?,
            created_at: timestamp_or_now(record.created_at)?,
            updated_at: Timestamp::now(),
            current_tier: parse_tier("current_tier", record.current_tier)?,
            target_tier: parse_tier("target_tier", record.target_tier)?,
        })
    }
}
