//! # Identifier Grammar
//!
//! Shape rules for element identifiers, one per [`ElementType`]:
//!
//! | Kind | Shape | Example |
//! |---|---|---|
//! | function | `XX` | `GV` |
//! | category | `XX.YY` | `GV.OC` |
//! | subcategory | `XX.YY-NN` | `GV.OC-01` |
//! | implementation example | `XX.YY-NN.NNN`, or any legacy form | `GV.OC-01.001` |
//! | party | `first` or `third` | `first` |
//! | withdraw reason | unconstrained | |
//!
//! `X`/`Y` are ASCII uppercase letters, `N` ASCII digits.
//!
//! Implementation examples are never rejected. Published exports carry
//! several historical numbering formats and the loader must accept them
//! all; [`is_implementation_example_id`] reports whether an id is in the
//! current canonical form, but [`validate_identifier`] does not enforce it.
//!
//! The checks operate on bytes, so multibyte input simply fails the shape
//! instead of panicking on a char boundary.

use crate::error::ValidationError;
use crate::kind::ElementType;

/// Party identifiers accepted for [`ElementType::Party`].
pub const PARTY_IDENTIFIERS: [&str; 2] = ["first", "third"];

fn is_upper_pair(b: &[u8]) -> bool {
    b.len() == 2 && b.iter().all(u8::is_ascii_uppercase)
}

fn is_digits(b: &[u8], n: usize) -> bool {
    b.len() == n && b.iter().all(u8::is_ascii_digit)
}

fn category_shape(b: &[u8]) -> bool {
    b.len() == 5 && is_upper_pair(&b[..2]) && b[2] == b'.' && is_upper_pair(&b[3..])
}

fn subcategory_shape(b: &[u8]) -> bool {
    b.len() == 8 && category_shape(&b[..5]) && b[5] == b'-' && is_digits(&b[6..], 2)
}

/// `XX`: exactly two uppercase letters.
pub fn is_function_id(s: &str) -> bool {
    is_upper_pair(s.as_bytes())
}

/// `XX.YY`
pub fn is_category_id(s: &str) -> bool {
    category_shape(s.as_bytes())
}

/// `XX.YY-NN`
pub fn is_subcategory_id(s: &str) -> bool {
    subcategory_shape(s.as_bytes())
}

/// `XX.YY-NN.NNN`, the canonical implementation example form.
pub fn is_implementation_example_id(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 12 && subcategory_shape(&b[..8]) && b[8] == b'.' && is_digits(&b[9..], 3)
}

/// `first` or `third`.
pub fn is_party_id(s: &str) -> bool {
    PARTY_IDENTIFIERS.contains(&s)
}

// ---------------------------------------------------------------------------
// Parent derivation
// ---------------------------------------------------------------------------
//
// Parents are always derived from the identifier text, never looked up.

/// Leading token before the first `.` (`GV.OC-01` → `GV`).
pub fn function_prefix(id: &str) -> &str {
    id.split('.').next().unwrap_or(id)
}

/// Leading token before the first `-` (`GV.OC-01` → `GV.OC`).
pub fn category_prefix(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}

/// Everything before the last `.`, provided the id contains both `.` and
/// `-` (`GV.OC-01.001` → `GV.OC-01`).
pub fn subcategory_prefix(id: &str) -> Option<&str> {
    if !id.contains('-') {
        return None;
    }
    id.rsplit_once('.').map(|(parent, _)| parent)
}

/// The shape enforced for `kind`, or `None` when the kind is unconstrained.
pub fn expected_shape(kind: &ElementType) -> Option<&'static str> {
    match kind {
        ElementType::Function => Some("XX (2 uppercase letters)"),
        ElementType::Category => Some("XX.YY"),
        ElementType::Subcategory => Some("XX.YY-NN"),
        ElementType::Party => Some("'first' or 'third'"),
        ElementType::ImplementationExample
        | ElementType::WithdrawReason
        | ElementType::Unrecognized(_) => None,
    }
}

/// Check `id` against the grammar for `kind`.
///
/// # Errors
///
/// [`ValidationError::EmptyIdentifier`] for an empty string regardless of
/// kind, otherwise [`ValidationError::InvalidIdentifier`] naming the
/// expected shape.
pub fn validate_identifier(kind: &ElementType, id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::EmptyIdentifier);
    }

    let ok = match kind {
        ElementType::Function => is_function_id(id),
        ElementType::Category => is_category_id(id),
        ElementType::Subcategory => is_subcategory_id(id),
        ElementType::Party => is_party_id(id),
        // Legacy example numbering is tolerated.
        ElementType::ImplementationExample => true,
        ElementType::WithdrawReason | ElementType::Unrecognized(_) => true,
    };

    match (ok, expected_shape(kind)) {
        (false, Some(expected)) => Err(ValidationError::InvalidIdentifier {
            kind: kind.to_string(),
            value: id.to_string(),
            expected,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // -- Function --

    #[test]
    fn function_ids() {
        assert!(is_function_id("GV"));
        assert!(is_function_id("RC"));
        assert!(!is_function_id("gv"));
        assert!(!is_function_id("G"));
        assert!(!is_function_id("GVX"));
        assert!(!is_function_id("INVALID"));
        assert!(!is_function_id("G1"));
    }

    // -- Category --

    #[test]
    fn category_ids() {
        assert!(is_category_id("GV.OC"));
        assert!(!is_category_id("GV-OC"));
        assert!(!is_category_id("GV.oc"));
        assert!(!is_category_id("INVALID.FORMAT"));
        assert!(!is_category_id("GV.OC-01"));
    }

    // -- Subcategory --

    #[test]
    fn subcategory_ids() {
        assert!(is_subcategory_id("GV.OC-01"));
        assert!(is_subcategory_id("XX.YY-99"));
        assert!(!is_subcategory_id("GV.OC.INVALID"));
        assert!(!is_subcategory_id("GV.OC-1"));
        assert!(!is_subcategory_id("GV.OC-001"));
        assert!(!is_subcategory_id("GV.OC-0A"));
    }

    // -- Implementation example --

    #[test]
    fn implementation_example_canonical_form() {
        assert!(is_implementation_example_id("GV.OC-01.001"));
        assert!(!is_implementation_example_id("GV.OC-01.01"));
        assert!(!is_implementation_example_id("GV.OC-01"));
    }

    #[test]
    fn implementation_example_never_rejected() {
        let kind = ElementType::ImplementationExample;
        assert!(validate_identifier(&kind, "GV.OC-01.001").is_ok());
        assert!(validate_identifier(&kind, "GV.OC-01.Ex1").is_ok());
        assert!(validate_identifier(&kind, "first").is_ok());
        assert!(validate_identifier(&kind, "anything at all").is_ok());
    }

    // -- Party --

    #[test]
    fn party_ids() {
        assert!(is_party_id("first"));
        assert!(is_party_id("third"));
        assert!(!is_party_id("second"));
        assert!(!is_party_id("First"));
    }

    // -- validate_identifier --

    #[test]
    fn empty_identifier_rejected_for_every_kind() {
        for kind in ElementType::known() {
            assert_eq!(
                validate_identifier(kind, ""),
                Err(ValidationError::EmptyIdentifier)
            );
        }
        assert_eq!(
            validate_identifier(&ElementType::Unrecognized("x".into()), ""),
            Err(ValidationError::EmptyIdentifier)
        );
    }

    #[test]
    fn failure_names_expected_shape() {
        let err = validate_identifier(&ElementType::Subcategory, "GV.OC.INVALID").unwrap_err();
        match err {
            ValidationError::InvalidIdentifier {
                kind,
                value,
                expected,
            } => {
                assert_eq!(kind, "subcategory");
                assert_eq!(value, "GV.OC.INVALID");
                assert_eq!(expected, "XX.YY-NN");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unconstrained_kinds_accept_anything_non_empty() {
        assert!(validate_identifier(&ElementType::WithdrawReason, "withdrawn-1").is_ok());
        assert!(validate_identifier(&ElementType::Unrecognized("x".into()), "??").is_ok());
    }

    // -- Parent derivation --

    #[test]
    fn prefixes() {
        assert_eq!(function_prefix("GV.OC-01"), "GV");
        assert_eq!(function_prefix("GV"), "GV");
        assert_eq!(category_prefix("GV.OC-01"), "GV.OC");
        assert_eq!(category_prefix("GV.OC"), "GV.OC");
        assert_eq!(subcategory_prefix("GV.OC-01.001"), Some("GV.OC-01"));
        assert_eq!(subcategory_prefix("GV.OC"), None);
        assert_eq!(subcategory_prefix("GV-01"), None);
    }

    #[test]
    fn multibyte_input_fails_without_panicking() {
        assert!(!is_category_id("GV.ÖC"));
        assert!(!is_subcategory_id("GV.OC-٠١"));
        assert!(validate_identifier(&ElementType::Function, "ÖÖ").is_err());
    }

    proptest! {
        /// Any generated canonical subcategory id is accepted as a subcategory
        /// and rejected as a category or function.
        #[test]
        fn generated_subcategory_ids_accepted(id in "[A-Z]{2}\\.[A-Z]{2}-[0-9]{2}") {
            prop_assert!(validate_identifier(&ElementType::Subcategory, &id).is_ok());
            prop_assert!(validate_identifier(&ElementType::Category, &id).is_err());
            prop_assert!(validate_identifier(&ElementType::Function, &id).is_err());
        }

        /// Appending a three-digit suffix to a subcategory yields a canonical example id.
        #[test]
        fn example_suffix_is_canonical(
            sub in "[A-Z]{2}\\.[A-Z]{2}-[0-9]{2}",
            n in 0u16..1000,
        ) {
            let id = format!("{sub}.{n:03}");
            prop_assert!(is_implementation_example_id(&id));
        }

        /// Decomposing an example id walks back up the hierarchy.
        #[test]
        fn example_prefixes_walk_up(
            cat in "[A-Z]{2}\\.[A-Z]{2}",
            n in 0u8..100,
            m in 0u16..1000,
        ) {
            let sub = format!("{cat}-{n:02}");
            let ex = format!("{sub}.{m:03}");
            prop_assert_eq!(subcategory_prefix(&ex), Some(sub.as_str()));
            prop_assert_eq!(category_prefix(&sub), cat.as_str());
            prop_assert_eq!(function_prefix(&cat), &cat[..2]);
        }

        /// Lowercase input never satisfies the function grammar.
        #[test]
        fn lowercase_functions_rejected(id in "[a-z]{2}") {
            prop_assert!(validate_identifier(&ElementType::Function, &id).is_err());
        }
    }
}
