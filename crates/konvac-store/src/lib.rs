//! # konvac-store
//!
//! Compiled scenes are kept as records of the submitted document plus the
//! generated program. Storage is a capability ([`SceneStore`]) handed to the
//! [`SceneService`], so hosts pick their own backend and tests use
//! [`MemoryStore`].

pub mod record;
pub mod service;
pub mod store;

pub use record::{SceneId, SceneRecord};
pub use service::SceneService;
pub use store::{MemoryStore, SceneStore};
