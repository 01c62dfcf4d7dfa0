//! JSON-LD document input: flat graph items, parsing and construction.
//!
//! Documents arrive already expanded (no nested node literals). The parser
//! accepts the three root shapes a learning path is stored in: a bare array
//! of node objects, an object carrying `@graph`, or a single node object.

mod builder;
mod item;

pub use builder::{linear_path, LearningPathBuilder};
pub use item::GraphItem;

use std::path::Path;

use serde_json::Value;

use crate::error::{LearngraphError, Result};

pub const ID_KEY: &str = "@id";
pub const TYPE_KEY: &str = "@type";
pub const VALUE_KEY: &str = "@value";
pub const GRAPH_KEY: &str = "@graph";

pub const PREREQUISITE_IRI: &str = "http://learnora.ai/ont#hasPrerequisite";
pub const CONCEPT_IRI: &str = "http://learnora.ai/ont#Concept";
pub const GOAL_IRI: &str = "http://learnora.ai/ont#Goal";
pub const LABEL_IRI: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const DESCRIPTION_IRI: &str = "http://schema.org/description";

/// Split a parsed document into its graph items.
///
/// Non-object entries inside the item list are dropped; they can never carry
/// an identifier. A root that is not an array or object is a caller error.
pub fn parse_document(document: &Value) -> Result<Vec<GraphItem>> {
    let entries = match document {
        Value::Array(entries) => entries.as_slice(),
        Value::Object(map) => match map.get(GRAPH_KEY) {
            Some(Value::Array(entries)) => entries.as_slice(),
            Some(other) => {
                return Err(LearngraphError::InvalidDocument(format!(
                    "{} must be an array, found {}",
                    GRAPH_KEY,
                    json_kind(other)
                )))
            }
            None => return Ok(vec![GraphItem::from_map(map.clone())]),
        },
        other => {
            return Err(LearngraphError::InvalidDocument(format!(
                "expected an array or object, found {}",
                json_kind(other)
            )))
        }
    };

    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match GraphItem::from_value(entry.clone()) {
            Some(item) => items.push(item),
            None => log::debug!("Skipping non-object entry #{} ({})", index, json_kind(entry)),
        }
    }
    Ok(items)
}

/// Parse document text
pub fn parse_document_str(content: &str) -> Result<Vec<GraphItem>> {
    let document: Value = serde_json::from_str(content)?;
    parse_document(&document)
}

/// Read and parse a document file
pub fn load_document(path: &Path) -> Result<Vec<GraphItem>> {
    let content = std::fs::read_to_string(path)?;
    parse_document_str(&content)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
