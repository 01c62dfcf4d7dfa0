use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{ID_KEY, TYPE_KEY};

/// One flat, already-expanded JSON-LD node object.
///
/// The engine never mutates an item; it reads the identifier, type tags and
/// whatever predicates it recognizes and ignores the rest. Property order is
/// the order of the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphItem(Map<String, Value>);

impl GraphItem {
    /// Create an item carrying only an identifier
    pub fn new(id: impl Into<String>) -> Self {
        let mut properties = Map::new();
        properties.insert(ID_KEY.to_string(), Value::String(id.into()));
        Self(properties)
    }

    /// Wrap an already-parsed JSON object
    pub fn from_map(properties: Map<String, Value>) -> Self {
        Self(properties)
    }

    /// Returns `None` for anything that is not a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(properties) => Some(Self(properties)),
            _ => None,
        }
    }

    /// Raw `@id`, if it is a string.
    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_KEY).and_then(Value::as_str)
    }

    /// Type tags in declaration order. A bare string `@type` counts as one tag.
    pub fn types(&self) -> Vec<&str> {
        match self.0.get(TYPE_KEY) {
            Some(Value::Array(tags)) => tags.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(tag)) => vec![tag.as_str()],
            _ => Vec::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// All properties in document order, keywords (`@id`, `@type`) included.
    pub fn properties(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Append a type tag
    pub fn with_type(mut self, tag: impl Into<String>) -> Self {
        self.push_value(TYPE_KEY, Value::String(tag.into()));
        self
    }

    /// Append a `{"@value": ..}` literal under `predicate`
    pub fn with_literal(mut self, predicate: &str, value: impl Into<String>) -> Self {
        self.push_value(predicate, json!({ "@value": value.into() }));
        self
    }

    /// Append a `{"@id": ..}` reference under `predicate`
    pub fn with_reference(mut self, predicate: &str, id: impl Into<String>) -> Self {
        self.push_value(predicate, json!({ "@id": id.into() }));
        self
    }

    /// Set a property verbatim, replacing any previous value
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    fn push_value(&mut self, key: &str, value: Value) {
        match self.0.get_mut(key) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let previous = existing.take();
                *existing = Value::Array(vec![previous, value]);
            }
            None => {
                self.0.insert(key.to_string(), Value::Array(vec![value]));
            }
        }
    }
}

impl From<GraphItem> for Value {
    fn from(item: GraphItem) -> Self {
        Value::Object(item.0)
    }
}
