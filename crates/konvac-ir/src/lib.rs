//! # konvac-ir
//!
//! The scene document model: a data-only description of a stage, its
//! layers, the drawable objects on each layer and the tweens that animate
//! them. Every input format decodes into this model before compilation.

pub mod animation;
pub mod builder;
pub mod decode;
pub mod document;
pub mod layer;
pub mod raw;
pub mod validate;

mod de;

pub use animation::{AnimationConfig, EasingPreset};
pub use document::{SceneDocument, StageConfig};
pub use layer::{LayerConfig, ObjectConfig};
pub use raw::RawExpr;
