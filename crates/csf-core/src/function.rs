//! # Functions and Parties
//!
//! The six CSF 2.0 functions and the two risk-party associations, as
//! exhaustive enums. Element identifiers stay plain strings; these enums are
//! what callers get back when asking which function an element belongs to
//! or which party a party element stands for.

use serde::{Deserialize, Serialize};

/// A top-level CSF 2.0 function.
///
/// Serializes as its two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CsfFunction {
    /// GOVERN (GV).
    #[serde(rename = "GV")]
    Govern,
    /// IDENTIFY (ID).
    #[serde(rename = "ID")]
    Identify,
    /// PROTECT (PR).
    #[serde(rename = "PR")]
    Protect,
    /// DETECT (DE).
    #[serde(rename = "DE")]
    Detect,
    /// RESPOND (RS).
    #[serde(rename = "RS")]
    Respond,
    /// RECOVER (RC).
    #[serde(rename = "RC")]
    Recover,
}

impl CsfFunction {
    /// All functions in framework order.
    pub fn all() -> &'static [CsfFunction] {
        &[
            Self::Govern,
            Self::Identify,
            Self::Protect,
            Self::Detect,
            Self::Respond,
            Self::Recover,
        ]
    }

    /// Two-letter identifier code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Govern => "GV",
            Self::Identify => "ID",
            Self::Protect => "PR",
            Self::Detect => "DE",
            Self::Respond => "RS",
            Self::Recover => "RC",
        }
    }

    /// Upper-case full name, as used for function titles.
    pub fn full_name(&self) -> &'static str {
        match self {
            Self::Govern => "GOVERN",
            Self::Identify => "IDENTIFY",
            Self::Protect => "PROTECT",
            Self::Detect => "DETECT",
            Self::Respond => "RESPOND",
            Self::Recover => "RECOVER",
        }
    }

    /// Exact match on the two-letter code. Used for identifier decomposition,
    /// where `gv` is not a function code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.code() == code)
    }

    /// Lenient parse: code or full name, any case.
    pub fn parse(value: &str) -> Option<Self> {
        let upper = value.trim().to_ascii_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|f| f.code() == upper || f.full_name() == upper)
    }
}

impl std::fmt::Display for CsfFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Risk party association carried by party elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyType {
    /// First-party risk.
    First,
    /// Third-party (supply chain) risk.
    Third,
}

impl PartyType {
    /// Parse a party identifier (`first` / `third`).
    pub fn from_identifier(id: &str) -> Option<Self> {
        match id {
            "first" => Some(Self::First),
            "third" => Some(Self::Third),
            _ => None,
        }
    }

    /// The element identifier for this party.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Third => "third",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::First => "1st Party Risk",
            Self::Third => "3rd Party Risk",
        }
    }
}

impl std::fmt::Display for PartyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
