pub mod config;
pub mod error;
pub mod document;
pub mod graph;
pub mod layout;
pub mod status;

pub use config::Config;
pub use error::{LearngraphError, Result};
pub use document::{parse_document, GraphItem};
pub use graph::{assign_levels, collect, collect_with, normalize, resolve_label, LocalId, MetadataMap, NodeMetadata, NodeType};
pub use layout::{assign_positions, build_edges, build_layout, Edge, Layout, PositionedNode};
pub use status::{classify, ConceptStatus, StatusMap};
