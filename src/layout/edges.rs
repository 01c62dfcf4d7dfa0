//! Prerequisite edge materialization.

use std::collections::HashSet;

use serde::Serialize;

use crate::graph::{LocalId, MetadataMap};

/// Directed prerequisite → dependent edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// `source-target`
    pub id: String,
    pub source: LocalId,
    pub target: LocalId,
}

impl Edge {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            id: format!("{}-{}", source, target),
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

/// One edge per distinct `source-target` id, both ends in `metadata`.
///
/// Edges follow node order, then prerequisite order. Dangling prerequisites
/// and repeated declarations are dropped. Edge ids are unique: when two
/// pairs spell the same id (local ids may contain `-`), the first one wins.
pub fn build_edges(metadata: &MetadataMap) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (target, node) in metadata {
        for source in &node.prerequisites {
            if !metadata.contains_key(source) {
                log::debug!("Dropping edge {} -> {}: source not in graph", source, target);
                continue;
            }
            let edge = Edge::new(source, target);
            if seen.insert(edge.id.clone()) {
                edges.push(edge);
            } else {
                log::debug!("Skipping edge {} -> {}: id {:?} already emitted", source, target, edge.id);
            }
        }
    }

    edges
}
