use serde::{Deserialize, Deserializer, Serialize};

use crate::de::nullable;
use crate::layer::LayerConfig;

pub const DEFAULT_STAGE_WIDTH: u32 = 800;
pub const DEFAULT_STAGE_HEIGHT: u32 = 600;

/// Root of a scene description: one stage and its layers, bottom to top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    #[serde(default, deserialize_with = "nullable")]
    pub stage: StageConfig,
    #[serde(default, deserialize_with = "nullable")]
    pub layers: Vec<LayerConfig>,
}

impl SceneDocument {
    pub fn new(stage: StageConfig) -> Self {
        Self {
            stage,
            layers: Vec::new(),
        }
    }

    pub fn add_layer(&mut self, layer: LayerConfig) {
        self.layers.push(layer);
    }

    /// Total number of drawable objects across all layers.
    pub fn object_count(&self) -> usize {
        self.layers.iter().map(|l| l.objects.len()).sum()
    }

    /// Total number of animation entries across all layers, malformed ones included.
    pub fn animation_count(&self) -> usize {
        self.layers.iter().map(|l| l.animations.len()).sum()
    }
}

/// Stage dimensions in pixels.
///
/// The stage is always mounted on the host's fixed `container` binding, so
/// there is intentionally no container field here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    #[serde(default = "default_width", deserialize_with = "nullable_width")]
    pub width: u32,
    #[serde(default = "default_height", deserialize_with = "nullable_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    DEFAULT_STAGE_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_STAGE_HEIGHT
}

fn nullable_width<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(DEFAULT_STAGE_WIDTH))
}

fn nullable_height<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(DEFAULT_STAGE_HEIGHT))
}

impl StageConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for StageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STAGE_WIDTH, DEFAULT_STAGE_HEIGHT)
    }
}
