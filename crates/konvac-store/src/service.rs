use konvac_core::{KonvacError, KonvacResult};
use konvac_ir::decode;
use konvac_ir::validate::ValidationPolicy;

use crate::record::{SceneId, SceneRecord};
use crate::store::SceneStore;

/// Create/read/update/delete of compiled scenes on top of a [`SceneStore`].
///
/// Sources are decoded and compiled before the store is touched, so a
/// malformed document never leaves a partial record behind.
pub struct SceneService<S: SceneStore> {
    store: S,
    policy: ValidationPolicy,
}

impl<S: SceneStore> SceneService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            policy: ValidationPolicy::Strict,
        }
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Compile `source` and store it under a fresh id.
    pub fn create(&self, source: &str) -> KonvacResult<SceneRecord> {
        let record = self.build(SceneId::generate(), source)?;
        self.store.put(record.clone());
        tracing::info!(id = %record.id, "created scene");
        Ok(record)
    }

    pub fn get(&self, id: &SceneId) -> KonvacResult<SceneRecord> {
        self.store
            .get(id)
            .ok_or_else(|| KonvacError::NotFound(id.to_string()))
    }

    /// Recompile an existing scene from new source. Unknown ids are reported
    /// before the source is looked at. A scene deleted while the source is
    /// being compiled stays deleted.
    pub fn update(&self, id: &SceneId, source: &str) -> KonvacResult<SceneRecord> {
        if !self.store.contains(id) {
            return Err(KonvacError::NotFound(id.to_string()));
        }
        let record = self.build(id.clone(), source)?;
        self.store
            .replace(record.clone())
            .ok_or_else(|| KonvacError::NotFound(id.to_string()))?;
        tracing::info!(id = %record.id, "updated scene");
        Ok(record)
    }

    /// Remove a scene, returning what was stored.
    pub fn delete(&self, id: &SceneId) -> KonvacResult<SceneRecord> {
        let record = self
            .store
            .delete(id)
            .ok_or_else(|| KonvacError::NotFound(id.to_string()))?;
        tracing::info!(id = %record.id, "deleted scene");
        Ok(record)
    }

    pub fn list(&self) -> Vec<SceneRecord> {
        self.store.list()
    }

    fn build(&self, id: SceneId, source: &str) -> KonvacResult<SceneRecord> {
        let data = decode::yaml_to_value(source)?;
        let doc = decode::from_value(data.clone())?;
        self.policy.apply(&doc)?;
        let compiled = konvac_codegen::compile(&doc);
        Ok(SceneRecord {
            id,
            data,
            program: compiled.program_text(),
        })
    }
}
