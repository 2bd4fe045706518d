use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::de::{default_true, nullable, nullable_true};

/// Key inside a tween mapping that selects an easing preset instead of
/// naming an animated property.
pub const EASING_KEY: &str = "easing";

/// A tween over one node, found by name at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    /// Name of the node to animate. Resolved by the runtime, never by the compiler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    /// Property name to target value, plus the optional `easing` preset.
    #[serde(default, deserialize_with = "nullable")]
    pub tween: Map<String, Value>,
    #[serde(default = "default_true", deserialize_with = "nullable_true")]
    pub autoplay: bool,
    #[serde(rename = "loop", default, deserialize_with = "nullable")]
    pub looping: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            target_name: None,
            tween: Map::new(),
            autoplay: true,
            looping: false,
        }
    }
}

impl AnimationConfig {
    /// The target name, if present and non-empty.
    pub fn target(&self) -> Option<&str> {
        self.target_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// The easing presets a document may name, mapped to the runtime's easing
/// functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EasingPreset {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    StrongEaseIn,
    StrongEaseOut,
}

impl EasingPreset {
    pub const ALL: [EasingPreset; 6] = [
        EasingPreset::Linear,
        EasingPreset::EaseIn,
        EasingPreset::EaseOut,
        EasingPreset::EaseInOut,
        EasingPreset::StrongEaseIn,
        EasingPreset::StrongEaseOut,
    ];

    /// Look up a preset by its exact (case-sensitive) document name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            EasingPreset::Linear => "Linear",
            EasingPreset::EaseIn => "EaseIn",
            EasingPreset::EaseOut => "EaseOut",
            EasingPreset::EaseInOut => "EaseInOut",
            EasingPreset::StrongEaseIn => "StrongEaseIn",
            EasingPreset::StrongEaseOut => "StrongEaseOut",
        }
    }

    /// Global symbol of the easing function in the target runtime.
    pub fn runtime_symbol(&self) -> &'static str {
        match self {
            EasingPreset::Linear => "Konva.Easings.Linear",
            EasingPreset::EaseIn => "Konva.Easings.EaseIn",
            EasingPreset::EaseOut => "Konva.Easings.EaseOut",
            EasingPreset::EaseInOut => "Konva.Easings.EaseInOut",
            EasingPreset::StrongEaseIn => "Konva.Easings.StrongEaseIn",
            EasingPreset::StrongEaseOut => "Konva.Easings.StrongEaseOut",
        }
    }
}

impl std::fmt::Display for EasingPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_defaults() {
        let anim: AnimationConfig = serde_json::from_str("{}").unwrap();
        assert!(anim.autoplay);
        assert!(!anim.looping);
        assert!(anim.target().is_none());
        assert!(anim.tween.is_empty());
    }

    #[test]
    fn test_animation_null_autoplay_stays_on() {
        let anim: AnimationConfig =
            serde_json::from_str(r#"{"targetName": "hero", "autoplay": null, "loop": null}"#).unwrap();
        assert!(anim.autoplay);
        assert!(!anim.looping);
        assert_eq!(anim.target(), Some("hero"));
    }

    #[test]
    fn test_empty_target_is_no_target() {
        let anim: AnimationConfig = serde_json::from_str(r#"{"targetName": ""}"#).unwrap();
        assert!(anim.target().is_none());
    }

    #[test]
    fn test_loop_field_name() {
        let anim: AnimationConfig =
            serde_json::from_str(r#"{"targetName": "a", "loop": true, "autoplay": false}"#).unwrap();
        assert!(anim.looping);
        assert!(!anim.autoplay);
    }

    #[test]
    fn test_tween_keeps_insertion_order() {
        let anim: AnimationConfig = serde_json::from_str(
            r#"{"targetName": "hero", "tween": {"x": 100, "easing": "EaseIn", "duration": 1.5}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = anim.tween.keys().map(String::as_str).collect();
        assert_eq!(keys, ["x", "easing", "duration"]);
    }

    #[test]
    fn test_easing_lookup() {
        assert_eq!(EasingPreset::from_name("EaseInOut"), Some(EasingPreset::EaseInOut));
        assert_eq!(
            EasingPreset::from_name("StrongEaseOut").map(|e| e.runtime_symbol()),
            Some("Konva.Easings.StrongEaseOut")
        );
        assert_eq!(EasingPreset::from_name("easein"), None);
        assert_eq!(EasingPreset::from_name("Bogus"), None);
    }

    #[test]
    fn test_every_preset_round_trips_by_name() {
        for preset in EasingPreset::ALL {
            assert_eq!(EasingPreset::from_name(preset.name()), Some(preset));
            assert!(preset.runtime_symbol().ends_with(preset.name()));
        }
    }
}
