//! Tween construction for layer animations.

use serde_json::Value;

use konvac_ir::animation::{AnimationConfig, EasingPreset, EASING_KEY};

use crate::diagnostics::{Diagnostic, Severity};
use crate::emit::Emitter;
use crate::ident::Ident;
use crate::literal::{property_key, quote, to_literal};

/// Emit the tween for animation `index` of layer `layer`.
///
/// An animation without a target is replaced by a comment. The tween name is
/// derived from the position either way, so later tweens keep their names.
pub(crate) fn emit_tween(
    out: &mut Emitter,
    diagnostics: &mut Vec<Diagnostic>,
    layer: usize,
    index: usize,
    anim: &AnimationConfig,
) {
    let Some(target) = anim.target() else {
        out.comment(&format!(
            "Skipping animation {index} in layer {layer}: missing targetName"
        ));
        report(diagnostics, Diagnostic::missing_target(layer, index));
        return;
    };

    let tween = Ident::Tween(layer, index);
    let mut props = vec![format!(
        "node: {}.findOne({})",
        Ident::Layer(layer),
        quote(&format!(".{target}"))
    )];

    for (key, value) in &anim.tween {
        if key == EASING_KEY {
            if value.is_null() {
                continue;
            }
            match easing_preset(value) {
                Some(preset) => props.push(format!("easing: {}", preset.runtime_symbol())),
                None => {
                    let name = to_literal(value);
                    out.comment(&format!(
                        "Warning: unknown easing {name} dropped from {tween}"
                    ));
                    report(diagnostics, Diagnostic::unknown_easing(layer, index, name));
                }
            }
            continue;
        }
        let literal = match value {
            Value::String(s) => quote(s),
            other => to_literal(other),
        };
        props.push(format!("{}: {literal}", property_key(key)));
    }

    if anim.looping {
        props.push(format!(
            "onFinish: function () {{ {tween}.reset(); {tween}.play(); }}"
        ));
        if !anim.autoplay {
            report(diagnostics, Diagnostic::idle_loop(layer, index));
        }
    }

    out.statement(format!(
        "const {tween} = new Konva.Tween({{ {} }});",
        props.join(", ")
    ));
    if anim.autoplay {
        out.statement(format!("{tween}.play();"));
    }
}

fn easing_preset(value: &Value) -> Option<EasingPreset> {
    value.as_str().and_then(EasingPreset::from_name)
}

fn report(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    match diagnostic.severity {
        Severity::Warning => tracing::warn!("{}", diagnostic.message),
        Severity::Info => tracing::info!("{}", diagnostic.message),
    }
    diagnostics.push(diagnostic);
}
