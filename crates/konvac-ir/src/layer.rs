use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::animation::AnimationConfig;
use crate::de::nullable;
use crate::raw::RawExpr;

/// One layer of the stage. Objects are drawn in order, later ones on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Only used for readability of the generated program.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub objects: Vec<ObjectConfig>,
    #[serde(default, deserialize_with = "nullable")]
    pub animations: Vec<AnimationConfig>,
}

/// A drawable node.
///
/// `kind` is the runtime class name (`Rect`, `Circle`, `Text`, ...). It is
/// not checked against any list of known classes; the runtime reports
/// unknown ones when the program runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectConfig {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "nullable")]
    pub attrs: Map<String, Value>,
    /// Event name to handler expression, attached in insertion order.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "IndexMap::is_empty")]
    pub listeners: IndexMap<String, RawExpr>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<RawExpr>,
    #[serde(default, deserialize_with = "nullable")]
    pub cache: bool,
}

impl ObjectConfig {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attrs: Map::new(),
            listeners: IndexMap::new(),
            filters: Vec::new(),
            cache: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_minimal() {
        let obj: ObjectConfig = serde_json::from_str(r#"{"type": "Rect"}"#).unwrap();
        assert_eq!(obj.kind, "Rect");
        assert!(obj.attrs.is_empty());
        assert!(obj.listeners.is_empty());
        assert!(obj.filters.is_empty());
        assert!(!obj.cache);
    }

    #[test]
    fn test_object_requires_type() {
        let result = serde_json::from_str::<ObjectConfig>(r#"{"attrs": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_attrs_keep_insertion_order() {
        let obj: ObjectConfig = serde_json::from_str(
            r#"{"type": "Rect", "attrs": {"y": 1, "x": 2, "fill": "red", "a": null}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = obj.attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, ["y", "x", "fill", "a"]);
    }

    #[test]
    fn test_listeners_keep_insertion_order() {
        let obj: ObjectConfig = serde_json::from_str(
            r#"{"type": "Circle", "listeners": {"mouseover": "a", "click": "b", "dragend": "c"}}"#,
        )
        .unwrap();
        let events: Vec<&str> = obj.listeners.keys().map(String::as_str).collect();
        assert_eq!(events, ["mouseover", "click", "dragend"]);
        assert_eq!(obj.listeners["click"].as_str(), "b");
    }

    #[test]
    fn test_non_mapping_attrs_rejected() {
        let result = serde_json::from_str::<ObjectConfig>(r#"{"type": "Rect", "attrs": [1, 2]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_layer_null_lists_are_empty() {
        let layer: LayerConfig =
            serde_json::from_str(r#"{"name": "bg", "objects": null, "animations": null}"#).unwrap();
        assert_eq!(layer.name.as_deref(), Some("bg"));
        assert!(layer.objects.is_empty());
        assert!(layer.animations.is_empty());
    }
}
