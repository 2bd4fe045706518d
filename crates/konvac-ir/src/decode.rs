//! Decoding scene documents from text or from an already-decoded tree.
//!
//! Two failure kinds are kept apart: text that is not well-formed data at
//! all is a [`KonvacError::Decode`], a well-formed tree that does not have
//! the shape of a scene document is a [`KonvacError::Document`].

use serde_json::Value;

use konvac_core::{KonvacError, KonvacResult};

use crate::document::SceneDocument;

/// Decode YAML text. JSON is accepted too, being a subset of YAML.
pub fn from_yaml_str(source: &str) -> KonvacResult<SceneDocument> {
    from_value(yaml_to_value(source)?)
}

/// Decode JSON text.
pub fn from_json_str(source: &str) -> KonvacResult<SceneDocument> {
    let value: Value =
        serde_json::from_str(source).map_err(|e| KonvacError::Decode(e.to_string()))?;
    from_value(value)
}

/// Parse YAML text into a generic tree without interpreting it.
pub fn yaml_to_value(source: &str) -> KonvacResult<Value> {
    if source.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str::<Value>(source).map_err(|e| KonvacError::Decode(e.to_string()))
}

/// Interpret a generic tree as a scene document. An empty (`null`) tree is
/// the empty document.
pub fn from_value(value: Value) -> KonvacResult<SceneDocument> {
    match value {
        Value::Null => Ok(SceneDocument::default()),
        Value::Object(_) => {
            let doc: SceneDocument =
                serde_json::from_value(value).map_err(|e| KonvacError::Document(e.to_string()))?;
            tracing::debug!(
                layers = doc.layers.len(),
                objects = doc.object_count(),
                animations = doc.animation_count(),
                "decoded scene document"
            );
            Ok(doc)
        }
        other => Err(KonvacError::Document(format!(
            "expected a mapping at the document root, found {}",
            kind_name(&other)
        ))),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
