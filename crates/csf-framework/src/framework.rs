//! # Framework Aggregate
//!
//! [`Framework`] owns the documents, elements, and relationships of a loaded
//! taxonomy and answers hierarchical and relational queries over them.
//!
//! ## Indices
//!
//! Three identifier→element indices (functions, categories, subcategories)
//! are built once, in a single pass over the element sequence, when the
//! framework is constructed. There is no incremental update path: a
//! different element set means a new `Framework`.
//!
//! - Only elements of the matching kind enter an index.
//! - When two elements share an identifier, the later one wins the lookup
//!   but the identifier keeps the position where it was first seen.
//! - The element sequence itself keeps every entry, duplicates included.
//!
//! Implementation examples, parties, withdrawal reasons, and unrecognized
//! kinds are not indexed; queries over them scan the element sequence.
//!
//! ## Absence
//!
//! Lookups return `None` or an empty `Vec`. A missing element is an
//! answer, not an error.

use std::collections::HashMap;

use csf_core::{Document, Element, ElementType, Relationship, RelationshipType};

use crate::integrity::{self, IntegrityFinding, IntegrityReport};

// ---------------------------------------------------------------------------
// Kind index
// ---------------------------------------------------------------------------

/// Identifier → element position, iterated in first-seen order.
#[derive(Debug, Clone, Default)]
struct KindIndex {
    order: Vec<String>,
    positions: HashMap<String, usize>,
}

impl KindIndex {
    fn insert(&mut self, id: &str, position: usize) {
        match self.positions.get_mut(id) {
            Some(slot) => *slot = position,
            None => {
                self.order.push(id.to_string());
                self.positions.insert(id.to_string(), position);
            }
        }
    }

    fn get(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn positions(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.positions.get(id).map(|&p| (id.as_str(), p)))
    }
}

// ---------------------------------------------------------------------------
// Related elements
// ---------------------------------------------------------------------------

/// Which end of a relationship the queried element sat on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Queried element is the source; the related element is the destination.
    Forward,
    /// Queried element is the destination; the related element is the source.
    Reverse,
}

/// One entry of [`Framework::get_related_elements`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelatedElement<'a> {
    /// Which end the queried element was on.
    pub direction: Direction,
    /// Edge type.
    pub relationship_type: RelationshipType,
    /// The element at the other end.
    pub element: &'a Element,
}

impl RelatedElement<'_> {
    /// Relationship label: the edge type, prefixed with `reverse_` when the
    /// queried element was the destination.
    pub fn label(&self) -> String {
        match self.direction {
            Direction::Forward => self.relationship_type.as_str().to_string(),
            Direction::Reverse => format!("reverse_{}", self.relationship_type),
        }
    }
}

// ---------------------------------------------------------------------------
// Framework
// ---------------------------------------------------------------------------

/// A complete, indexed taxonomy.
///
/// Immutable after construction; every query takes `&self`.
#[derive(Debug, Clone, Default)]
pub struct Framework {
    documents: Vec<Document>,
    elements: Vec<Element>,
    relationships: Vec<Relationship>,
    functions: KindIndex,
    categories: KindIndex,
    subcategories: KindIndex,
}

impl Framework {
    /// Assemble a framework from already-validated parts and build the
    /// kind indices.
    pub fn new(
        documents: Vec<Document>,
        elements: Vec<Element>,
        relationships: Vec<Relationship>,
    ) -> Self {
        let mut functions = KindIndex::default();
        let mut categories = KindIndex::default();
        let mut subcategories = KindIndex::default();

        for (position, element) in elements.iter().enumerate() {
            let id = element.element_identifier();
            match element.element_type() {
                ElementType::Function => functions.insert(id, position),
                ElementType::Category => categories.insert(id, position),
                ElementType::Subcategory => subcategories.insert(id, position),
                ElementType::ImplementationExample
                | ElementType::Party
                | ElementType::WithdrawReason
                | ElementType::Unrecognized(_) => {}
            }
        }

        Self {
            documents,
            elements,
            relationships,
            functions,
            categories,
            subcategories,
        }
    }

    // -- Accessors --

    /// All documents, in load order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// All elements, in load order, duplicates included.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// All relationships, in load order.
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Document by identifier.
    pub fn get_document(&self, doc_identifier: &str) -> Option<&Document> {
        self.documents
            .iter()
            .find(|d| d.doc_identifier() == doc_identifier)
    }

    fn resolve<'a>(&'a self, index: &'a KindIndex) -> impl Iterator<Item = &'a Element> + 'a {
        index.positions().map(move |(_, p)| &self.elements[p])
    }

    /// Indexed functions, in first-seen order.
    pub fn functions(&self) -> impl Iterator<Item = &Element> + '_ {
        self.resolve(&self.functions)
    }

    /// Indexed categories, in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = &Element> + '_ {
        self.resolve(&self.categories)
    }

    /// Indexed subcategories, in first-seen order.
    pub fn subcategories(&self) -> impl Iterator<Item = &Element> + '_ {
        self.resolve(&self.subcategories)
    }

    /// Number of distinct function, category, and subcategory identifiers.
    pub fn index_sizes(&self) -> (usize, usize, usize) {
        (
            self.functions.len(),
            self.categories.len(),
            self.subcategories.len(),
        )
    }

    // -- Indexed lookups --

    /// Function by identifier.
    pub fn get_function(&self, function_id: &str) -> Option<&Element> {
        self.functions.get(function_id).map(|p| &self.elements[p])
    }

    /// Category by identifier.
    pub fn get_category(&self, category_id: &str) -> Option<&Element> {
        self.categories.get(category_id).map(|p| &self.elements[p])
    }

    /// Subcategory by identifier.
    pub fn get_subcategory(&self, subcategory_id: &str) -> Option<&Element> {
        self.subcategories
            .get(subcategory_id)
            .map(|p| &self.elements[p])
    }

    /// Whether `category_id` is an indexed category.
    pub fn has_category(&self, category_id: &str) -> bool {
        self.categories.contains(category_id)
    }

    /// Categories whose identifier starts with `"{function_id}."`.
    pub fn get_categories_for_function(&self, function_id: &str) -> Vec<&Element> {
        let prefix = format!("{function_id}.");
        self.categories()
            .filter(|c| c.element_identifier().starts_with(&prefix))
            .collect()
    }

    /// Subcategories whose identifier starts with `"{category_id}-"`.
    pub fn get_subcategories_for_category(&self, category_id: &str) -> Vec<&Element> {
        let prefix = format!("{category_id}-");
        self.subcategories()
            .filter(|s| s.element_identifier().starts_with(&prefix))
            .collect()
    }

    // -- Scans --

    /// Implementation examples whose identifier starts with
    /// `"{subcategory_id}."`, in element order. Not indexed.
    pub fn get_implementation_examples(&self, subcategory_id: &str) -> Vec<&Element> {
        let prefix = format!("{subcategory_id}.");
        self.elements
            .iter()
            .filter(|e| {
                e.is(&ElementType::ImplementationExample)
                    && e.element_identifier().starts_with(&prefix)
            })
            .collect()
    }

    /// First element of any kind with this identifier.
    pub fn get_element_by_id(&self, element_id: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| e.element_identifier() == element_id)
    }

    /// Elements connected to `element_id` by a relationship, in
    /// relationship order.
    ///
    /// An edge leaving `element_id` yields its destination under the edge
    /// type; an edge arriving yields its source under `reverse_<type>`. A
    /// self-loop yields both. Endpoints that do not resolve to a loaded
    /// element are skipped; reporting them is the integrity pass's job.
    pub fn get_related_elements(&self, element_id: &str) -> Vec<RelatedElement<'_>> {
        let mut related = Vec::new();
        for rel in &self.relationships {
            if rel.is_source(element_id) {
                if let Some(dest) = self.get_element_by_id(rel.dest_element_identifier()) {
                    related.push(RelatedElement {
                        direction: Direction::Forward,
                        relationship_type: rel.relationship_type(),
                        element: dest,
                    });
                }
            }
            if rel.is_dest(element_id) {
                if let Some(source) = self.get_element_by_id(rel.source_element_identifier()) {
                    related.push(RelatedElement {
                        direction: Direction::Reverse,
                        relationship_type: rel.relationship_type(),
                        element: source,
                    });
                }
            }
        }
        related
    }

    // -- Integrity --

    /// Run the integrity pass and return its findings as messages.
    ///
    /// Duplicate-identifier findings are expected for the published data
    /// and should be filtered by callers wanting a strict signal; see
    /// [`Framework::integrity_report`].
    pub fn validate_framework_integrity(&self) -> Vec<String> {
        self.integrity_findings()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Run the integrity pass and return typed findings.
    pub fn integrity_findings(&self) -> Vec<IntegrityFinding> {
        integrity::check(self)
    }

    /// Run the integrity pass and split findings into advisory and
    /// structural.
    pub fn integrity_report(&self) -> IntegrityReport {
        IntegrityReport::from_findings(self.integrity_findings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "CSF_2_0_0";

    fn func(id: &str) -> Element {
        Element::function(DOC, id).unwrap()
    }

    fn cat(id: &str) -> Element {
        Element::category(DOC, id).unwrap()
    }

    fn sub(id: &str) -> Element {
        Element::subcategory(DOC, id).unwrap()
    }

    fn example(id: &str) -> Element {
        Element::implementation_example(DOC, id).unwrap()
    }

    fn ids(elements: &[&Element]) -> Vec<String> {
        elements
            .iter()
            .map(|e| e.element_identifier().to_string())
            .collect()
    }

    fn sample() -> Framework {
        Framework::new(
            vec![Document::new(DOC, "Cybersecurity Framework", "2.0", "https://www.nist.gov").unwrap()],
            vec![
                func("GV").with_title("GOVERN"),
                cat("GV.OC"),
                sub("GV.OC-01"),
                example("GV.OC-01.001"),
                example("GV.OC-01.002"),
                sub("GV.OC-02"),
                cat("GV.RM"),
                sub("GV.RM-01"),
                func("ID"),
                cat("ID.AM"),
                Element::party(DOC, "first").unwrap(),
            ],
            vec![Relationship::within(
                DOC,
                "GV",
                RelationshipType::Projection,
                "GV.OC",
            )],
        )
    }

    // -- Indexed lookups --

    #[test]
    fn indexed_lookups() {
        let fw = sample();
        assert_eq!(fw.get_function("GV").unwrap().title(), "GOVERN");
        assert!(fw.get_category("GV.OC").is_some());
        assert!(fw.get_subcategory("GV.RM-01").is_some());
        assert!(fw.get_function("PR").is_none());
        assert!(fw.get_category("GV").is_none());
        assert_eq!(fw.index_sizes(), (2, 3, 3));
    }

    #[test]
    fn indices_are_kind_filtered() {
        let fw = sample();
        assert!(fw.get_function("GV.OC").is_none());
        assert!(fw.get_subcategory("GV.OC-01.001").is_none());
        assert!(fw.get_function("first").is_none());
    }

    #[test]
    fn categories_for_function_by_prefix() {
        let fw = sample();
        assert_eq!(
            ids(&fw.get_categories_for_function("GV")),
            vec!["GV.OC", "GV.RM"]
        );
        assert_eq!(ids(&fw.get_categories_for_function("ID")), vec!["ID.AM"]);
        assert!(fw.get_categories_for_function("PR").is_empty());
    }

    #[test]
    fn subcategories_for_category_by_prefix() {
        let fw = sample();
        assert_eq!(
            ids(&fw.get_subcategories_for_category("GV.OC")),
            vec!["GV.OC-01", "GV.OC-02"]
        );
        assert!(fw.get_subcategories_for_category("ID.AM").is_empty());
    }

    #[test]
    fn subcategories_independent_of_interleaving() {
        let forward = Framework::new(
            vec![],
            vec![sub("GV.OC-01"), func("GV"), sub("GV.OC-02"), cat("GV.OC")],
            vec![],
        );
        let shuffled = Framework::new(
            vec![],
            vec![cat("GV.OC"), sub("GV.OC-01"), example("GV.OC-01.001"), func("GV"), sub("GV.OC-02")],
            vec![],
        );
        assert_eq!(
            ids(&forward.get_subcategories_for_category("GV.OC")),
            ids(&shuffled.get_subcategories_for_category("GV.OC"))
        );
    }

    #[test]
    fn last_write_wins_but_first_position_kept() {
        let fw = Framework::new(
            vec![],
            vec![
                cat("GV.OC").with_title("first"),
                cat("GV.RM"),
                cat("GV.OC").with_title("second"),
            ],
            vec![],
        );
        assert_eq!(fw.get_category("GV.OC").unwrap().title(), "second");
        let cats = fw.get_categories_for_function("GV");
        assert_eq!(ids(&cats), vec!["GV.OC", "GV.RM"]);
        assert_eq!(cats[0].title(), "second");
        assert_eq!(fw.elements().len(), 3);
    }

    // -- Scans --

    #[test]
    fn implementation_examples_scan() {
        let fw = sample();
        assert_eq!(
            ids(&fw.get_implementation_examples("GV.OC-01")),
            vec!["GV.OC-01.001", "GV.OC-01.002"]
        );
        assert!(fw.get_implementation_examples("GV.OC-02").is_empty());
    }

    #[test]
    fn element_by_id_searches_every_kind() {
        let fw = sample();
        assert_eq!(
            fw.get_element_by_id("first").unwrap().element_type(),
            &ElementType::Party
        );
        assert!(fw.get_element_by_id("GV.OC-01.002").is_some());
        assert!(fw.get_element_by_id("missing").is_none());
    }

    #[test]
    fn element_by_id_returns_first_duplicate() {
        let fw = Framework::new(
            vec![],
            vec![func("GV").with_title("one"), func("GV").with_title("two")],
            vec![],
        );
        assert_eq!(fw.get_element_by_id("GV").unwrap().title(), "one");
        assert_eq!(fw.get_function("GV").unwrap().title(), "two");
    }

    // -- Related elements --

    #[test]
    fn related_elements_forward_and_reverse() {
        let fw = sample();

        let from_gv = fw.get_related_elements("GV");
        assert_eq!(from_gv.len(), 1);
        assert_eq!(from_gv[0].label(), "projection");
        assert_eq!(from_gv[0].element.element_identifier(), "GV.OC");

        let from_oc = fw.get_related_elements("GV.OC");
        assert_eq!(from_oc.len(), 1);
        assert_eq!(from_oc[0].label(), "reverse_projection");
        assert_eq!(from_oc[0].direction, Direction::Reverse);
        assert_eq!(from_oc[0].element.element_identifier(), "GV");
    }

    #[test]
    fn related_elements_skip_dangling() {
        let fw = Framework::new(
            vec![],
            vec![func("GV")],
            vec![
                Relationship::within(DOC, "GV", RelationshipType::Supersedes, "GONE"),
                Relationship::within(DOC, "GONE", RelationshipType::RelatedTo, "GV"),
            ],
        );
        assert!(fw.get_related_elements("GV").is_empty());
    }

    #[test]
    fn self_loop_yields_two_entries() {
        let fw = Framework::new(
            vec![],
            vec![func("GV")],
            vec![Relationship::within(DOC, "GV", RelationshipType::RelatedTo, "GV")],
        );
        let labels: Vec<String> = fw
            .get_related_elements("GV")
            .iter()
            .map(RelatedElement::label)
            .collect();
        assert_eq!(labels, vec!["related_to", "reverse_related_to"]);
    }

    #[test]
    fn related_elements_follow_relationship_order() {
        let fw = Framework::new(
            vec![],
            vec![func("GV"), cat("GV.OC"), cat("GV.RM")],
            vec![
                Relationship::within(DOC, "GV.RM", RelationshipType::IncorporatedInto, "GV"),
                Relationship::within(DOC, "GV", RelationshipType::Projection, "GV.OC"),
            ],
        );
        let labels: Vec<String> = fw
            .get_related_elements("GV")
            .iter()
            .map(RelatedElement::label)
            .collect();
        assert_eq!(labels, vec!["reverse_incorporated_into", "projection"]);
    }

    #[test]
    fn get_document_by_identifier() {
        let fw = sample();
        assert_eq!(fw.get_document(DOC).unwrap().version(), "2.0");
        assert!(fw.get_document("CSF_1_1_0").is_none());
    }
}
