//! # csf-framework — The Framework Aggregate
//!
//! Owns a loaded taxonomy and everything computed over it:
//!
//! - **Aggregate** ([`framework`]): documents, elements, and relationships
//!   plus the function/category/subcategory indices built at construction.
//!   Hierarchical queries (`get_categories_for_function`, ...) and
//!   relational queries (`get_related_elements`).
//!
//! - **Integrity** ([`integrity`]): duplicate identifiers, dangling
//!   relationship endpoints, orphan subcategories. Findings are values,
//!   partitioned into advisory and structural by [`IntegrityReport`].
//!
//! - **Loader** ([`loader`]): the CSF JSON export envelope to a validated
//!   [`Framework`], strict or lenient about bad records.
//!
//! ## Architecture
//!
//! ```text
//! JSON export  -->  RawFramework  -->  Framework  -->  queries / integrity
//!                   (records)         (validated,
//!                                      indexed once)
//! ```

pub mod error;
pub mod framework;
pub mod integrity;
pub mod loader;

pub use error::{FrameworkError, FrameworkResult};
pub use framework::{Direction, Framework, RelatedElement};
pub use integrity::{IntegrityFinding, IntegrityReport};
pub use loader::{
    load_framework_from_json, load_framework_from_json_with, parse_framework_json, LoadMode,
    RawFramework,
};
