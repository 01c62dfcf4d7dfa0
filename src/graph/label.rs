//! Display label resolution for graph items.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::ident::normalize;
use crate::document::{GraphItem, VALUE_KEY};

/// Matches `rdfs:label`, `skos:prefLabel`, `label`, `...#label` and friends.
fn label_predicate() -> &'static Regex {
    static LABEL_PREDICATE: OnceLock<Regex> = OnceLock::new();
    LABEL_PREDICATE.get_or_init(|| Regex::new(r"(?i)(label$|#label)").expect("Invalid regex pattern"))
}

/// Human-readable label of an item. Never fails.
///
/// Takes the first value of the first label-like property, unwrapping a
/// `{"@value": ..}` literal. Falls back to the normalized identifier, then
/// to the empty string.
pub fn resolve_label(item: &GraphItem) -> String {
    let fallback = || item.id().map(normalize).unwrap_or_default();

    let Some((_, value)) = item
        .properties()
        .find(|(key, _)| label_predicate().is_match(key))
    else {
        return fallback();
    };

    let first = match value {
        Value::Array(values) => values.first(),
        other => Some(other),
    };

    first.and_then(literal_text).unwrap_or_else(fallback)
}

fn literal_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Object(map) => match map.get(VALUE_KEY)? {
            Value::String(text) => Some(text.clone()),
            Value::Null => None,
            scalar @ (Value::Number(_) | Value::Bool(_)) => Some(scalar.to_string()),
            _ => None,
        },
        _ => None,
    }
}
