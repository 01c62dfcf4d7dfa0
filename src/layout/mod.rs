//! Renderable layered layout: positioned nodes and de-duplicated edges.

mod edges;
mod positions;

pub use edges::{build_edges, Edge};
pub use positions::{assign_positions, Position, PositionMap};

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::graph::{assign_levels, LocalId, MetadataMap, NodeType};
use crate::status::{ConceptStatus, StatusMap};

/// A node ready for a node-link renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedNode {
    pub id: LocalId,
    pub x: f64,
    pub y: f64,
    pub label: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<NodeType>,
    pub level: usize,
    /// Learner readiness, filled in by [`Layout::annotate`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ConceptStatus>,
}

/// Full layout handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<Edge>,
}

impl Layout {
    /// Join statuses onto nodes by local id. Nodes absent from `statuses` are cleared.
    pub fn annotate(&mut self, statuses: &StatusMap) {
        for node in &mut self.nodes {
            node.status = statuses.get(&node.id).copied();
        }
    }

    pub fn node(&self, id: &str) -> Option<&PositionedNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

/// Level, place and connect every node of `metadata`.
///
/// Nodes come out level by level, each level in metadata order.
pub fn build_layout(metadata: &MetadataMap, config: &LayoutConfig) -> Layout {
    let levels = assign_levels(metadata);
    let positions = assign_positions(&levels, metadata, config);

    let nodes = positions
        .iter()
        .filter_map(|(id, position)| {
            let node = metadata.get(id)?;
            Some(PositionedNode {
                id: id.clone(),
                x: position.x,
                y: position.y,
                label: node.label.clone(),
                node_type: node.node_type.clone(),
                level: levels.get(id).copied().unwrap_or(0),
                status: None,
            })
        })
        .collect();

    Layout {
        nodes,
        edges: build_edges(metadata),
    }
}
