use serde_json::Value;

use crate::animation::{AnimationConfig, EASING_KEY};
use crate::document::{SceneDocument, StageConfig};
use crate::layer::{LayerConfig, ObjectConfig};
use crate::raw::RawExpr;

/// A builder for constructing a scene document programmatically.
/// Useful for SDKs, programmatic generation, and unit testing.
pub struct DocumentBuilder {
    document: SceneDocument,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            document: SceneDocument::default(),
        }
    }

    pub fn stage(mut self, width: u32, height: u32) -> Self {
        self.document.stage = StageConfig::new(width, height);
        self
    }

    /// Add a layer. First added is drawn first (back).
    pub fn layer(mut self, layer: LayerConfig) -> Self {
        self.document.layers.push(layer);
        self
    }

    pub fn build(self) -> SceneDocument {
        self.document
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A builder for constructing a layer.
#[derive(Default)]
pub struct LayerBuilder {
    layer: LayerConfig,
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.layer.name = Some(name.into());
        self
    }

    pub fn object(mut self, object: ObjectConfig) -> Self {
        self.layer.objects.push(object);
        self
    }

    pub fn animation(mut self, animation: AnimationConfig) -> Self {
        self.layer.animations.push(animation);
        self
    }

    pub fn build(self) -> LayerConfig {
        self.layer
    }
}

/// A builder for a drawable object.
pub struct ObjectBuilder {
    object: ObjectConfig,
}

impl ObjectBuilder {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            object: ObjectConfig::new(kind),
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.object.attrs.insert(key.into(), value.into());
        self
    }

    /// Attach a handler. The expression is emitted verbatim.
    pub fn listener(mut self, event: impl Into<String>, handler: impl Into<String>) -> Self {
        self.object
            .listeners
            .insert(event.into(), RawExpr::trusted(handler));
        self
    }

    pub fn filter(mut self, name: impl Into<String>) -> Self {
        self.object.filters.push(RawExpr::trusted(name));
        self
    }

    pub fn cache(mut self, cache: bool) -> Self {
        self.object.cache = cache;
        self
    }

    pub fn build(self) -> ObjectConfig {
        self.object
    }
}

/// Helper builder for tween entries.
#[derive(Default)]
pub struct AnimationBuilder {
    animation: AnimationConfig,
}

impl AnimationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(mut self, name: impl Into<String>) -> Self {
        self.animation.target_name = Some(name.into());
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.animation.tween.insert(key.into(), value.into());
        self
    }

    pub fn easing(mut self, easing: impl Into<String>) -> Self {
        self.animation
            .tween
            .insert(EASING_KEY.to_string(), Value::String(easing.into()));
        self
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.animation.looping = looping;
        self
    }

    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.animation.autoplay = autoplay;
        self
    }

    pub fn build(self) -> AnimationConfig {
        self.animation
    }
}
