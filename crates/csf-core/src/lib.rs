#![deny(missing_docs)]

//! # csf-core — Foundational Types for the CSF Taxonomy Stack
//!
//! This crate defines the types every other crate in the workspace builds on.
//! It has no internal crate dependencies; it uses only `serde`, `serde_json`,
//! `thiserror`, and `chrono` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **One element type, one kind tag.** Every taxonomy node is an
//!    [`Element`] carrying an [`ElementType`]. Kind-specific behavior
//!    (identifier grammar, parent derivation) is an exhaustive `match` on
//!    the tag rather than a type hierarchy.
//!
//! 2. **Validated construction.** Elements, relationships, and documents can
//!    only be built through constructors that check them, including when
//!    deserialized (`serde(try_from)`). Raw `*Record` types carry the
//!    unchecked source shape.
//!
//! 3. **Parents are derived, never stored.** A subcategory knows its
//!    category by decomposing `GV.OC-01`, not by holding a reference. See
//!    [`identifier`].
//!
//! 4. **[`ValidationError`] for bad input.** Structured errors with
//!    `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod document;
pub mod element;
pub mod error;
pub mod function;
pub mod identifier;
pub mod kind;
pub mod relationship;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use document::{Document, DocumentRecord};
pub use element::{Element, ElementRecord};
pub use error::{CsfError, ValidationError};
pub use function::{CsfFunction, PartyType};
pub use kind::ElementType;
pub use relationship::{Relationship, RelationshipRecord, RelationshipType};
pub use temporal::Timestamp;
