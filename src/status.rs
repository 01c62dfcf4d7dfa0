//! Learning-readiness classification of concepts and goals.
//!
//! A concept is `known` when the learner has mastered it, `ready` when every
//! prerequisite is known, `locked` otherwise. The known set is expected to be
//! transitively closed already; only one level of prerequisites is checked.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::graph::{normalize, LocalId, MetadataMap, NodeMetadata};

/// Status of one concept for the current learner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConceptStatus {
    /// Already mastered
    Known,
    /// Not mastered, every prerequisite mastered
    Ready,
    /// At least one prerequisite not mastered
    Locked,
}

impl std::fmt::Display for ConceptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConceptStatus::Known => write!(f, "known"),
            ConceptStatus::Ready => write!(f, "ready"),
            ConceptStatus::Locked => write!(f, "locked"),
        }
    }
}

/// Status per concept/goal local id, in metadata order.
pub type StatusMap = IndexMap<LocalId, ConceptStatus>;

/// A concept together with its status, as listed to the evaluation flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptWithStatus {
    /// Identifier as written in the document
    pub id: String,
    pub label: String,
    pub status: ConceptStatus,
    pub prerequisites: Vec<LocalId>,
}

fn status_of(node: &NodeMetadata, known: &HashSet<LocalId>) -> ConceptStatus {
    if known.contains(&node.id) {
        ConceptStatus::Known
    } else if node.prerequisites.iter().all(|p| known.contains(p)) {
        ConceptStatus::Ready
    } else {
        ConceptStatus::Locked
    }
}

/// Classify every concept and goal. Other node types are left out.
pub fn classify(metadata: &MetadataMap, known: &HashSet<LocalId>) -> StatusMap {
    metadata
        .values()
        .filter(|node| node.is_concept_or_goal())
        .map(|node| (node.id.clone(), status_of(node, known)))
        .collect()
}

/// Concepts and goals with their status, in document order.
pub fn concepts_with_status(metadata: &MetadataMap, known: &HashSet<LocalId>) -> Vec<ConceptWithStatus> {
    metadata
        .values()
        .filter(|node| node.is_concept_or_goal())
        .map(|node| ConceptWithStatus {
            id: node.iri.clone(),
            label: node.label.clone(),
            status: status_of(node, known),
            prerequisites: node.prerequisites.clone(),
        })
        .collect()
}

/// Concepts the learner can study next.
pub fn ready_concepts(metadata: &MetadataMap, known: &HashSet<LocalId>) -> Vec<ConceptWithStatus> {
    concepts_with_status(metadata, known)
        .into_iter()
        .filter(|concept| concept.status == ConceptStatus::Ready)
        .collect()
}

/// Status of a single concept, looked up by full identifier or local id.
pub fn concept_status(
    concept_id: &str,
    metadata: &MetadataMap,
    known: &HashSet<LocalId>,
) -> Option<ConceptStatus> {
    let node = metadata
        .values()
        .find(|node| node.iri == concept_id)
        .or_else(|| metadata.get(concept_id))
        .or_else(|| metadata.get(normalize(concept_id).as_str()))?;

    node.is_concept_or_goal().then(|| status_of(node, known))
}
