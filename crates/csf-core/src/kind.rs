//! # Element Kinds
//!
//! Defines [`ElementType`], the tag carried by every taxonomy element. The
//! six known kinds are a closed set and every `match` over them is
//! exhaustive. Source data may carry tags this crate does not know yet;
//! those are kept verbatim in [`ElementType::Unrecognized`] instead of
//! failing the record, so a newer taxonomy export still loads.

use serde::{Deserialize, Serialize};

/// The kind tag of a taxonomy element.
///
/// Serializes to and from the snake_case tag used in source documents
/// (`"function"`, `"implementation_example"`, ...). Unknown tags round-trip
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementType {
    /// Top-level outcome grouping (`GV`).
    Function,
    /// Group of related outcomes within a function (`GV.OC`).
    Category,
    /// Specific outcome within a category (`GV.OC-01`).
    Subcategory,
    /// Illustrative action for achieving a subcategory (`GV.OC-01.001`).
    ImplementationExample,
    /// Risk party association (`first` / `third`).
    Party,
    /// Reason attached to a withdrawn element.
    WithdrawReason,
    /// A tag not known to this version, preserved as-is.
    Unrecognized(String),
}

impl ElementType {
    /// All known kinds, in hierarchy order.
    pub fn known() -> &'static [ElementType] {
        &[
            Self::Function,
            Self::Category,
            Self::Subcategory,
            Self::ImplementationExample,
            Self::Party,
            Self::WithdrawReason,
        ]
    }

    /// Map a source tag to its kind. Never fails; unknown tags become
    /// [`ElementType::Unrecognized`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "function" => Self::Function,
            "category" => Self::Category,
            "subcategory" => Self::Subcategory,
            "implementation_example" => Self::ImplementationExample,
            "party" => Self::Party,
            "withdraw_reason" => Self::WithdrawReason,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The source tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Function => "function",
            Self::Category => "category",
            Self::Subcategory => "subcategory",
            Self::ImplementationExample => "implementation_example",
            Self::Party => "party",
            Self::WithdrawReason => "withdraw_reason",
            Self::Unrecognized(tag) => tag,
        }
    }

    /// Whether this is one of the six known kinds.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for ElementType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<ElementType> for String {
    fn from(kind: ElementType) -> Self {
        kind.as_str().to_string()
    }
}
