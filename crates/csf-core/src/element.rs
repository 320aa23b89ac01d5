//! # Taxonomy Elements
//!
//! [`Element`] is the single representation for every node of the taxonomy.
//! Instead of one type per kind, an element carries its [`ElementType`] tag
//! and the kind-specific rules (identifier grammar, parent derivation,
//! party lookup) dispatch on that tag.
//!
//! ## Construction
//!
//! Every path into an `Element` validates:
//!
//! - [`Element::new`] and the per-kind shorthands ([`Element::function`],
//!   [`Element::category`], ...).
//! - [`Element::from_record`], the factory used by loaders. It maps the raw
//!   `element_type` tag to its kind; an unknown tag yields an element of
//!   kind [`ElementType::Unrecognized`] rather than an error.
//! - Deserialization, which goes through `from_record`.
//!
//! Fields are private so that a constructed element cannot be re-tagged or
//! re-identified without passing validation again.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::function::{CsfFunction, PartyType};
use crate::identifier;
use crate::kind::ElementType;

/// Raw element record as found in a source document.
///
/// Every field is optional so that a missing field is reported as a
/// [`ValidationError::MissingField`] instead of a serde error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    /// Owning document identifier.
    #[serde(default)]
    pub doc_identifier: Option<String>,
    /// Element identifier.
    #[serde(default)]
    pub element_identifier: Option<String>,
    /// Kind tag (`"function"`, `"category"`, ...).
    #[serde(default)]
    pub element_type: Option<String>,
    /// Description text.
    #[serde(default)]
    pub text: Option<String>,
    /// Title.
    #[serde(default)]
    pub title: Option<String>,
}

/// A validated taxonomy element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ElementRecord")]
pub struct Element {
    doc_identifier: String,
    element_identifier: String,
    element_type: ElementType,
    text: String,
    title: String,
}

impl Element {
    /// Construct an element of `kind`, validating the identifier against the
    /// kind's grammar.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyIdentifier`] or
    /// [`ValidationError::InvalidIdentifier`].
    pub fn new(
        kind: ElementType,
        doc_identifier: impl Into<String>,
        element_identifier: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let element_identifier = element_identifier.into();
        identifier::validate_identifier(&kind, &element_identifier)?;
        Ok(Self {
            doc_identifier: doc_identifier.into(),
            element_identifier,
            element_type: kind,
            text: String::new(),
            title: String::new(),
        })
    }

    /// A function element (`GV`).
    pub fn function(
        doc_identifier: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(ElementType::Function, doc_identifier, id)
    }

    /// A category element (`GV.OC`).
    pub fn category(
        doc_identifier: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(ElementType::Category, doc_identifier, id)
    }

    /// A subcategory element (`GV.OC-01`).
    pub fn subcategory(
        doc_identifier: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(ElementType::Subcategory, doc_identifier, id)
    }

    /// An implementation example element (`GV.OC-01.001`).
    pub fn implementation_example(
        doc_identifier: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(ElementType::ImplementationExample, doc_identifier, id)
    }

    /// A party element (`first` / `third`).
    pub fn party(
        doc_identifier: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(ElementType::Party, doc_identifier, id)
    }

    /// A withdrawal reason element.
    pub fn withdraw_reason(
        doc_identifier: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(ElementType::WithdrawReason, doc_identifier, id)
    }

    /// Factory dispatch from a raw record.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingField`] when `doc_identifier`,
    /// `element_identifier` or `element_type` is absent; otherwise whatever
    /// [`Element::new`] reports for the identifier.
    pub fn from_record(record: ElementRecord) -> Result<Self, ValidationError> {
        let doc_identifier = record
            .doc_identifier
            .ok_or(ValidationError::MissingField("doc_identifier"))?;
        let element_identifier = record
            .element_identifier
            .ok_or(ValidationError::MissingField("element_identifier"))?;
        let tag = record
            .element_type
            .ok_or(ValidationError::MissingField("element_type"))?;

        let element = Self::new(ElementType::from_tag(&tag), doc_identifier, element_identifier)?;
        Ok(element
            .with_text(record.text.unwrap_or_default())
            .with_title(record.title.unwrap_or_default()))
    }

    /// Replace the description text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Replace the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Owning document identifier.
    pub fn doc_identifier(&self) -> &str {
        &self.doc_identifier
    }

    /// Element identifier.
    pub fn element_identifier(&self) -> &str {
        &self.element_identifier
    }

    /// Kind tag.
    pub fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    /// Description text (may be empty).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Title (may be empty).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the element is of `kind`.
    pub fn is(&self, kind: &ElementType) -> bool {
        &self.element_type == kind
    }

    /// The function this element ultimately belongs to.
    ///
    /// A function element resolves to itself; any other element resolves
    /// through the token before its first `.`. `None` when there is no `.`
    /// (parties, most withdrawal reasons) or the token is not a known code.
    pub fn function_code(&self) -> Option<CsfFunction> {
        match self.element_type {
            ElementType::Function => CsfFunction::from_code(&self.element_identifier),
            _ if self.element_identifier.contains('.') => {
                CsfFunction::from_code(identifier::function_prefix(&self.element_identifier))
            }
            _ => None,
        }
    }

    /// Parent function id, for categories and subcategories.
    pub fn parent_function(&self) -> Option<&str> {
        match self.element_type {
            ElementType::Category | ElementType::Subcategory => {
                Some(identifier::function_prefix(&self.element_identifier))
            }
            _ => None,
        }
    }

    /// Parent category id, for subcategories.
    pub fn parent_category(&self) -> Option<&str> {
        match self.element_type {
            ElementType::Subcategory => Some(identifier::category_prefix(&self.element_identifier)),
            _ => None,
        }
    }

    /// Parent subcategory id, for implementation examples whose id has the
    /// `XX.YY-NN.<suffix>` layout.
    pub fn parent_subcategory(&self) -> Option<&str> {
        match self.element_type {
            ElementType::ImplementationExample => {
                identifier::subcategory_prefix(&self.element_identifier)
            }
            _ => None,
        }
    }

    /// The identifier directly above this element in the hierarchy.
    pub fn parent(&self) -> Option<&str> {
        match self.element_type {
            ElementType::Category => self.parent_function(),
            ElementType::Subcategory => self.parent_category(),
            ElementType::ImplementationExample => self.parent_subcategory(),
            ElementType::Function
            | ElementType::Party
            | ElementType::WithdrawReason
            | ElementType::Unrecognized(_) => None,
        }
    }

    /// Party association, for party elements.
    pub fn party_type(&self) -> Option<PartyType> {
        match self.element_type {
            ElementType::Party => PartyType::from_identifier(&self.element_identifier),
            _ => None,
        }
    }
}

impl TryFrom<ElementRecord> for Element {
    type Error = ValidationError;

    fn try_from(record: ElementRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.title.is_empty() {
            write!(f, "{} ({})", self.element_identifier, self.element_type)
        } else {
            write!(
                f,
                "{}: {} ({})",
                self.element_identifier, self.title, self.element_type
            )
        }
    }
}
