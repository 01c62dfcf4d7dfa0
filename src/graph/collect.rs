//! Node metadata collection from document items.

use serde_json::Value;

use super::ident::normalize;
use super::label::resolve_label;
use super::{LocalId, MetadataMap, NodeMetadata, NodeType};
use crate::config::VocabularyConfig;
use crate::document::{GraphItem, ID_KEY};

/// Collect metadata using the default prerequisite spellings.
pub fn collect(items: &[GraphItem]) -> MetadataMap {
    collect_with(items, &VocabularyConfig::default())
}

/// Build the local-id → metadata map.
///
/// Items without a usable identifier are skipped. A repeated identifier
/// replaces the earlier entry but keeps its original position.
pub fn collect_with(items: &[GraphItem], vocabulary: &VocabularyConfig) -> MetadataMap {
    let mut metadata = MetadataMap::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let Some(iri) = item.id() else {
            log::debug!("Skipping item #{}: no @id", index);
            continue;
        };
        let id = normalize(iri);
        if id.is_empty() {
            log::debug!("Skipping item #{}: @id {:?} has no local name", index, iri);
            continue;
        }

        let node = NodeMetadata {
            id: id.clone(),
            iri: iri.to_string(),
            label: resolve_label(item),
            node_type: item
                .types()
                .first()
                .map(|tag| NodeType::from_tag(&normalize(tag))),
            prerequisites: parse_prerequisites(item, vocabulary),
        };

        if metadata.insert(id, node).is_some() {
            log::debug!("Duplicate @id {:?}, keeping the later declaration", iri);
        }
    }

    metadata
}

/// Prerequisite local ids of one item, in declaration order.
///
/// Reads the first recognized predicate that yields at least one reference;
/// a `null` or empty value falls through to the next spelling. Entries are
/// `{"@id": ..}` references or bare identifier strings; anything else is
/// ignored.
fn parse_prerequisites(item: &GraphItem, vocabulary: &VocabularyConfig) -> Vec<LocalId> {
    vocabulary
        .prerequisite_predicates
        .iter()
        .filter_map(|predicate| item.get(predicate))
        .map(references)
        .find(|references| !references.is_empty())
        .unwrap_or_default()
}

fn references(value: &Value) -> Vec<LocalId> {
    let entries = match value {
        Value::Array(entries) => entries.as_slice(),
        single => std::slice::from_ref(single),
    };

    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(iri) => Some(iri.as_str()),
            Value::Object(map) => map.get(ID_KEY).and_then(Value::as_str),
            _ => None,
        })
        .map(normalize)
        .filter(|id| !id.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items(value: Value) -> Vec<GraphItem> {
        crate::document::parse_document(&value).unwrap()
    }

    #[test]
    fn test_collect_basic_metadata() {
        let metadata = collect(&items(json!([
            {
                "@id": "http://ex.org/kg#a",
                "@type": ["http://learnora.ai/ont#Concept"],
                "http://www.w3.org/2000/01/rdf-schema#label": [{"@value": "Alpha"}]
            },
            {
                "@id": "http://ex.org/kg#b",
                "@type": ["http://learnora.ai/ont#Goal", "http://learnora.ai/ont#Concept"],
                "http://learnora.ai/ont#hasPrerequisite": [{"@id": "http://ex.org/kg#a"}]
            }
        ])));

        assert_eq!(metadata.len(), 2);
        let a = &metadata["a"];
        assert_eq!(a.label, "Alpha");
        assert_eq!(a.iri, "http://ex.org/kg#a");
        assert_eq!(a.node_type, Some(NodeType::Concept));
        assert!(a.prerequisites.is_empty());

        let b = &metadata["b"];
        assert_eq!(b.label, "b");
        assert_eq!(b.node_type, Some(NodeType::Goal));
        assert_eq!(b.prerequisites, vec!["a"]);
    }

    #[test]
    fn test_collect_skips_items_without_id() {
        let metadata = collect(&items(json!([
            {"label": ["orphan"]},
            {"@id": 12},
            {"@id": "http://ex.org/kg#"},
            {"@id": "http://ex.org/kg#ok"}
        ])));
        assert_eq!(metadata.keys().collect::<Vec<_>>(), vec!["ok"]);
    }

    #[test]
    fn test_collect_last_write_wins() {
        let metadata = collect(&items(json!([
            {"@id": "urn:x#a", "label": ["first"]},
            {"@id": "urn:x#b"},
            {"@id": "urn:x#a", "label": ["second"]}
        ])));
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata["a"].label, "second");
        assert_eq!(metadata.get_index_of("a"), Some(0));
    }

    #[test]
    fn test_prerequisite_spellings() {
        for predicate in ["http://learnora.ai/ont#hasPrerequisite", "hasPrerequisite", "has_prerequisite"] {
            let metadata = collect(&items(json!([
                {"@id": "urn:x#b", predicate: [{"@id": "urn:x#a"}]}
            ])));
            assert_eq!(metadata["b"].prerequisites, vec!["a"], "predicate {}", predicate);
        }
    }

    #[test]
    fn test_first_recognized_spelling_wins() {
        let metadata = collect(&items(json!([
            {
                "@id": "urn:x#c",
                "has_prerequisite": [{"@id": "urn:x#b"}],
                "http://learnora.ai/ont#hasPrerequisite": [{"@id": "urn:x#a"}]
            }
        ])));
        assert_eq!(metadata["c"].prerequisites, vec!["a"]);
    }

    #[test]
    fn test_prerequisite_entry_shapes() {
        let metadata = collect(&items(json!([
            {
                "@id": "urn:x#d",
                "hasPrerequisite": [
                    {"@id": "urn:x#a"},
                    "urn:x#b",
                    {"@value": "not a reference"},
                    42,
                    {"@id": "urn:x#"}
                ]
            },
            {"@id": "urn:x#e", "hasPrerequisite": {"@id": "urn:x#d"}}
        ])));
        assert_eq!(metadata["d"].prerequisites, vec!["a", "b"]);
        assert_eq!(metadata["e"].prerequisites, vec!["d"]);
    }

    #[test]
    fn test_unusable_spelling_falls_through() {
        let metadata = collect(&items(json!([
            {
                "@id": "urn:x#c",
                "http://learnora.ai/ont#hasPrerequisite": null,
                "hasPrerequisite": [{"@id": "urn:x#a"}]
            },
            {
                "@id": "urn:x#d",
                "http://learnora.ai/ont#hasPrerequisite": [],
                "hasPrerequisite": [{"@value": "literal"}],
                "has_prerequisite": ["urn:x#b"]
            }
        ])));
        assert_eq!(metadata["c"].prerequisites, vec!["a"]);
        assert_eq!(metadata["d"].prerequisites, vec!["b"]);
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocabulary = VocabularyConfig {
            prerequisite_predicates: vec!["requires".to_string()],
        };
        let docs = items(json!([
            {"@id": "urn:x#b", "requires": ["urn:x#a"], "hasPrerequisite": ["urn:x#z"]}
        ]));
        assert_eq!(collect_with(&docs, &vocabulary)["b"].prerequisites, vec!["a"]);
        assert_eq!(collect(&docs)["b"].prerequisites, vec!["z"]);
    }

    #[test]
    fn test_collect_empty() {
        assert!(collect(&[]).is_empty());
    }
}
