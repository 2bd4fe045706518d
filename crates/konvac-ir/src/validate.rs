use konvac_core::{KonvacError, KonvacResult};

use crate::document::SceneDocument;
use crate::layer::ObjectConfig;

/// Whether [`validate_document`] runs before compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Reject invalid documents with a single [`KonvacError::Validation`].
    #[default]
    Strict,
    /// Compile whatever decodes; the runtime reports what it cannot run.
    Lenient,
}

impl ValidationPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            ValidationPolicy::Strict
        } else {
            ValidationPolicy::Lenient
        }
    }

    pub fn apply(&self, doc: &SceneDocument) -> KonvacResult<()> {
        match self {
            ValidationPolicy::Strict => {
                validate_document(doc).map_err(KonvacError::from_validation)
            }
            ValidationPolicy::Lenient => Ok(()),
        }
    }
}

/// Reject documents the generated program could not express.
///
/// Runs before compilation and collects every violation. A missing
/// animation target or an unknown easing name is not a violation here; the
/// compiler handles those itself and keeps going.
pub fn validate_document(doc: &SceneDocument) -> Result<(), Vec<KonvacError>> {
    let mut errors = Vec::new();

    if doc.stage.width == 0 || doc.stage.height == 0 {
        errors.push(KonvacError::Validation(format!(
            "stage size must be non-zero, got {}x{}",
            doc.stage.width, doc.stage.height
        )));
    }

    for (i, layer) in doc.layers.iter().enumerate() {
        for (j, object) in layer.objects.iter().enumerate() {
            validate_object(i, j, object, &mut errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_object(layer: usize, index: usize, object: &ObjectConfig, errors: &mut Vec<KonvacError>) {
    let at = format!("layer {layer} object {index}");

    if object.kind.is_empty() {
        errors.push(KonvacError::Validation(format!("{at}: empty object type")));
    } else if !is_identifier(&object.kind) {
        errors.push(KonvacError::Validation(format!(
            "{at}: object type '{}' is not a valid class name",
            object.kind
        )));
    }

    for (event, handler) in &object.listeners {
        if event.trim().is_empty() {
            errors.push(KonvacError::Validation(format!("{at}: empty event name")));
        }
        if handler.is_blank() {
            errors.push(KonvacError::Validation(format!(
                "{at}: empty handler for event '{event}'"
            )));
        }
    }

    for (k, filter) in object.filters.iter().enumerate() {
        if filter.is_blank() {
            errors.push(KonvacError::Validation(format!("{at}: filter {k} is empty")));
        }
    }
}

/// `[A-Za-z_$][A-Za-z0-9_$]*`
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::LayerBuilder;
    use crate::document::StageConfig;
    use crate::raw::RawExpr;

    #[test]
    fn test_validate_empty_document() {
        assert!(validate_document(&SceneDocument::default()).is_ok());
    }

    #[test]
    fn test_validate_zero_stage() {
        let doc = SceneDocument::new(StageConfig::new(0, 600));
        let errors = validate_document(&doc).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("0x600"));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut bad = ObjectConfig::new("Rect; alert(1)");
        bad.filters.push(RawExpr::trusted(" "));
        bad.listeners.insert("click".into(), RawExpr::trusted(""));

        let mut doc = SceneDocument::default();
        doc.add_layer(
            LayerBuilder::new()
                .object(ObjectConfig::new("Rect"))
                .object(bad)
                .object(ObjectConfig::new(""))
                .build(),
        );

        let errors = validate_document(&doc).unwrap_err();
        assert_eq!(errors.len(), 4, "{errors:?}");
        assert!(errors[0].to_string().contains("layer 0 object 1"));
        assert!(errors[3].to_string().contains("layer 0 object 2: empty object type"));
    }

    #[test]
    fn test_policy_apply() {
        let doc = SceneDocument::new(StageConfig::new(0, 0));
        let err = ValidationPolicy::Strict.apply(&doc).unwrap_err();
        assert!(err.to_string().starts_with("validation error: stage size"));
        assert!(ValidationPolicy::Lenient.apply(&doc).is_ok());
        assert_eq!(ValidationPolicy::from_strict(false), ValidationPolicy::Lenient);
    }

    #[test]
    fn test_identifier_rules() {
        assert!(is_identifier("Rect"));
        assert!(is_identifier("_private$1"));
        assert!(!is_identifier("1Rect"));
        assert!(!is_identifier("Konva.Rect"));
        assert!(!is_identifier("Rect "));
        assert!(!is_identifier(""));
    }
}
