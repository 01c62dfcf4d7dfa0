//! Prerequisite graph: identifier normalization, metadata collection and leveling.
//!
//! Walks the flat document, keys every node by its render-safe local id and
//! computes each node's longest-prerequisite-chain depth. Dangling
//! references and cycles are tolerated, never reported.

mod collect;
mod ident;
mod label;
mod levels;

pub use collect::{collect, collect_with};
pub use ident::normalize;
pub use label::resolve_label;
pub use levels::{assign_levels, group_by_level};

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Render-safe local identifier, see [`normalize`].
pub type LocalId = String;

/// Node metadata keyed by local id, in document order.
pub type MetadataMap = IndexMap<LocalId, NodeMetadata>;

/// Level of every node, in the same order as its [`MetadataMap`].
pub type LevelMap = IndexMap<LocalId, usize>;

/// Primary type tag of a node, after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Learnable unit
    Concept,
    /// Learning objective, always laid out in the last column
    Goal,
    /// Container node grouping the concepts of one path
    LearningPath,
    /// Any other tag, kept verbatim
    Other(String),
}

impl NodeType {
    /// Classify a normalized type tag. Matching is exact.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Concept" => NodeType::Concept,
            "Goal" => NodeType::Goal,
            "LearningPath" => NodeType::LearningPath,
            other => NodeType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Concept => "Concept",
            NodeType::Goal => "Goal",
            NodeType::LearningPath => "LearningPath",
            NodeType::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// What the engine keeps of one document item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeMetadata {
    pub id: LocalId,
    /// Identifier as written in the document
    pub iri: String,
    pub label: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<NodeType>,
    /// Local ids this node requires. May name nodes absent from the map.
    pub prerequisites: Vec<LocalId>,
}

impl NodeMetadata {
    pub fn is_goal(&self) -> bool {
        matches!(self.node_type, Some(NodeType::Goal))
    }

    /// Concepts and goals are the only nodes a learner can know.
    pub fn is_concept_or_goal(&self) -> bool {
        matches!(self.node_type, Some(NodeType::Concept | NodeType::Goal))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_from_tag() {
        assert_eq!(NodeType::from_tag("Concept"), NodeType::Concept);
        assert_eq!(NodeType::from_tag("Goal"), NodeType::Goal);
        assert_eq!(NodeType::from_tag("LearningPath"), NodeType::LearningPath);
        assert_eq!(NodeType::from_tag("concept"), NodeType::Other("concept".to_string()));
    }

    #[test]
    fn test_node_type_serializes_as_tag() {
        assert_eq!(serde_json::to_string(&NodeType::Goal).unwrap(), r#""Goal""#);
        assert_eq!(
            serde_json::to_string(&NodeType::Other("Resource".to_string())).unwrap(),
            r#""Resource""#
        );
    }
}
