//! Sanity checks over content scraped from legal code HTML.
//!
//! Scraped pages are reduced to nested lists and maps of text before they are
//! turned into translation messages. The validators walk that structure,
//! convert every text-like leaf to a plain `String`, and reject anything else.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ValidationError;

/// A value as it comes out of the scraper.
#[derive(Debug, Clone, PartialEq)]
pub enum Scraped {
    Text(String),
    /// A text node still attached to the parsed HTML document.
    Fragment(String),
    List(Vec<Scraped>),
    Map(Vec<(String, Scraped)>),
    /// Anything else the scraper produced (numbers, tags, nulls, ...).
    Other { kind: String, repr: String },
}

/// Validated scraped content: only text, lists, and maps remain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TextTree {
    Text(String),
    List(Vec<TextTree>),
    Map(BTreeMap<String, TextTree>),
}

impl From<serde_json::Value> for Scraped {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(s) => Scraped::Text(s),
            Value::Array(items) => Scraped::List(items.into_iter().map(Scraped::from).collect()),
            Value::Object(map) => {
                Scraped::Map(map.into_iter().map(|(k, v)| (k, Scraped::from(v))).collect())
            }
            other => {
                let kind = match other {
                    Value::Null => "null",
                    Value::Bool(_) => "bool",
                    _ => "number",
                };
                Scraped::Other {
                    kind: kind.to_string(),
                    repr: other.to_string(),
                }
            }
        }
    }
}

/// Validate a scraped value of any shape.
pub fn validate_is_all_text(value: &Scraped) -> Result<TextTree, ValidationError> {
    match value {
        Scraped::List(items) => validate_list_is_all_text(items).map(TextTree::List),
        Scraped::Map(entries) => validate_dictionary_is_all_text(entries).map(TextTree::Map),
        leaf => {
            let mut converted = validate_list_is_all_text(std::slice::from_ref(leaf))?;
            Ok(converted.remove(0))
        }
    }
}

/// Make sure every element of a list is text, a list, or a map, converting
/// text nodes to plain strings.
pub fn validate_list_is_all_text(items: &[Scraped]) -> Result<Vec<TextTree>, ValidationError> {
    items
        .iter()
        .map(|value| match value {
            Scraped::Text(s) | Scraped::Fragment(s) => Ok(TextTree::Text(s.clone())),
            Scraped::List(inner) => validate_list_is_all_text(inner).map(TextTree::List),
            Scraped::Map(inner) => validate_dictionary_is_all_text(inner).map(TextTree::Map),
            Scraped::Other { kind, repr } => Err(ValidationError::NotTextInList {
                kind: kind.clone(),
                value: repr.clone(),
            }),
        })
        .collect()
}

/// Make sure every value of a map is text, a list, or a map.
///
/// Keys are strings by construction. A repeated key keeps its last value.
pub fn validate_dictionary_is_all_text(
    entries: &[(String, Scraped)],
) -> Result<BTreeMap<String, TextTree>, ValidationError> {
    let mut validated = BTreeMap::new();
    for (key, value) in entries {
        let converted = match value {
            Scraped::Text(s) | Scraped::Fragment(s) => TextTree::Text(s.clone()),
            Scraped::Map(inner) => TextTree::Map(validate_dictionary_is_all_text(inner)?),
            Scraped::List(inner) => TextTree::List(validate_list_is_all_text(inner)?),
            Scraped::Other { kind, repr } => {
                return Err(ValidationError::NotTextInMap {
                    key: key.clone(),
                    kind: kind.clone(),
                    value: repr.clone(),
                })
            }
        };
        validated.insert(key.clone(), converted);
    }
    Ok(validated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(s: &str) -> TextTree {
        TextTree::Text(s.to_string())
    }

    #[test]
    fn test_fragments_become_text() {
        let items = vec![
            Scraped::Fragment("Section 1".to_string()),
            Scraped::List(vec![Scraped::Fragment("a".to_string())]),
        ];
        assert_eq!(
            validate_list_is_all_text(&items).unwrap(),
            vec![text("Section 1"), TextTree::List(vec![text("a")])]
        );
    }

    #[test]
    fn test_nested_structure_is_preserved() {
        let scraped = Scraped::from(json!({
            "title": "Attribution 4.0 International",
            "sections": [
                {"heading": "Definitions", "items": ["Adapted Material", "Licensor"]},
                "Scope"
            ]
        }));

        let mut section = BTreeMap::new();
        section.insert("heading".to_string(), text("Definitions"));
        section.insert(
            "items".to_string(),
            TextTree::List(vec![text("Adapted Material"), text("Licensor")]),
        );
        let mut expected = BTreeMap::new();
        expected.insert("title".to_string(), text("Attribution 4.0 International"));
        expected.insert(
            "sections".to_string(),
            TextTree::List(vec![TextTree::Map(section), text("Scope")]),
        );

        assert_eq!(validate_is_all_text(&scraped).unwrap(), TextTree::Map(expected));
    }

    #[test]
    fn test_disallowed_value_in_map_names_key() {
        let scraped = Scraped::from(json!({"title": "By", "count": 3}));
        let Scraped::Map(entries) = scraped else {
            panic!("expected a map");
        };
        let err = validate_dictionary_is_all_text(&entries).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotTextInMap {
                key: "count".to_string(),
                kind: "number".to_string(),
                value: "3".to_string(),
            }
        );
        assert!(err.to_string().contains("k=count"));
    }

    #[test]
    fn test_first_disallowed_key_in_document_order() {
        let scraped = Scraped::from(json!({"zeta": 1, "alpha": true}));
        let err = validate_is_all_text(&scraped).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotTextInMap {
                key: "zeta".to_string(),
                kind: "number".to_string(),
                value: "1".to_string(),
            }
        );
    }

    #[test]
    fn test_disallowed_value_in_list() {
        let scraped = Scraped::from(json!(["ok", null]));
        assert_eq!(
            validate_is_all_text(&scraped).unwrap_err(),
            ValidationError::NotTextInList {
                kind: "null".to_string(),
                value: "null".to_string(),
            }
        );
    }

    #[test]
    fn test_first_disallowed_leaf_is_reported() {
        let items = vec![
            Scraped::Text("fine".to_string()),
            Scraped::Other {
                kind: "Tag".to_string(),
                repr: "<b>bold</b>".to_string(),
            },
            Scraped::Other {
                kind: "Comment".to_string(),
                repr: "<!-- -->".to_string(),
            },
        ];
        let err = validate_list_is_all_text(&items).unwrap_err();
        assert_eq!(err.to_string(), "not a string, list, or map: Tag: <b>bold</b>");
    }

    #[test]
    fn test_root_text_and_serialization() {
        let tree = validate_is_all_text(&Scraped::Fragment("hello".to_string())).unwrap();
        assert_eq!(tree, text("hello"));

        let tree = validate_is_all_text(&Scraped::from(json!({"a": ["b"]}))).unwrap();
        assert_eq!(serde_json::to_value(&tree).unwrap(), json!({"a": ["b"]}));
    }
}
