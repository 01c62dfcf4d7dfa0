//! Build learning path documents from plain concept lists.

use super::{GraphItem, CONCEPT_IRI, DESCRIPTION_IRI, GOAL_IRI, LABEL_IRI, PREREQUISITE_IRI};

/// Incrementally assembles an expanded learning path document.
///
/// Local ids passed in are resolved against `base`, so
/// `LearningPathBuilder::new("http://ex.org/kg#").concept("a", ..)` yields
/// an item with `@id` `http://ex.org/kg#a`.
#[derive(Debug, Clone)]
pub struct LearningPathBuilder {
    base: String,
    items: Vec<GraphItem>,
}

impl LearningPathBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            items: Vec::new(),
        }
    }

    /// Add a concept requiring the given local ids
    pub fn concept(self, id: &str, label: &str, prerequisites: &[&str]) -> Self {
        self.node(CONCEPT_IRI, id, label, prerequisites)
    }

    /// Add a goal requiring the given local ids
    pub fn goal(self, id: &str, label: &str, prerequisites: &[&str]) -> Self {
        self.node(GOAL_IRI, id, label, prerequisites)
    }

    /// Attach a description to the most recently added node
    pub fn describe(mut self, description: &str) -> Self {
        if let Some(last) = self.items.pop() {
            self.items.push(last.with_literal(DESCRIPTION_IRI, description));
        }
        self
    }

    pub fn build(self) -> Vec<GraphItem> {
        self.items
    }

    fn node(mut self, type_iri: &str, id: &str, label: &str, prerequisites: &[&str]) -> Self {
        let mut item = GraphItem::new(self.iri(id))
            .with_type(type_iri)
            .with_literal(LABEL_IRI, label);
        for prerequisite in prerequisites {
            item = item.with_reference(PREREQUISITE_IRI, self.iri(prerequisite));
        }
        self.items.push(item);
        self
    }

    fn iri(&self, id: &str) -> String {
        format!("{}{}", self.base, id)
    }
}

/// Chain of concepts where each entry requires the one before it.
pub fn linear_path(base: &str, concepts: &[(&str, &str)]) -> Vec<GraphItem> {
    let mut builder = LearningPathBuilder::new(base);
    let mut previous: Option<&str> = None;
    for &(id, label) in concepts {
        let prerequisites: Vec<&str> = previous.into_iter().collect();
        builder = builder.concept(id, label, &prerequisites);
        previous = Some(id);
    }
    builder.build()
}
