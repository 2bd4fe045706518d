use std::collections::HashMap;

use parking_lot::RwLock;

use crate::record::{SceneId, SceneRecord};

/// Keyed storage for scene records.
///
/// Implementations handle their own locking; the service never holds a
/// lock across calls.
pub trait SceneStore: Send + Sync {
    fn get(&self, id: &SceneId) -> Option<SceneRecord>;

    /// Insert or replace. Returns the previous record, if any.
    fn put(&self, record: SceneRecord) -> Option<SceneRecord>;

    /// Replace a record only if its id is already stored, as one step.
    /// Returns the previous record, or `None` if nothing was written.
    fn replace(&self, record: SceneRecord) -> Option<SceneRecord>;

    fn delete(&self, id: &SceneId) -> Option<SceneRecord>;

    /// All records, oldest first.
    fn list(&self) -> Vec<SceneRecord>;

    fn contains(&self, id: &SceneId) -> bool {
        self.get(id).is_some()
    }
}

#[derive(Default)]
struct Slots {
    records: HashMap<SceneId, SceneRecord>,
    order: Vec<SceneId>,
}

/// Process-local store. Nothing is persisted and nothing is evicted.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Slots>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SceneStore for MemoryStore {
    fn get(&self, id: &SceneId) -> Option<SceneRecord> {
        self.inner.read().records.get(id).cloned()
    }

    fn put(&self, record: SceneRecord) -> Option<SceneRecord> {
        let mut slots = self.inner.write();
        let id = record.id.clone();
        let previous = slots.records.insert(id.clone(), record);
        if previous.is_none() {
            slots.order.push(id);
        }
        previous
    }

    fn replace(&self, record: SceneRecord) -> Option<SceneRecord> {
        let mut slots = self.inner.write();
        let slot = slots.records.get_mut(&record.id)?;
        Some(std::mem::replace(slot, record))
    }

    fn delete(&self, id: &SceneId) -> Option<SceneRecord> {
        let mut slots = self.inner.write();
        let removed = slots.records.remove(id);
        if removed.is_some() {
            slots.order.retain(|existing| existing != id);
        }
        removed
    }

    fn list(&self) -> Vec<SceneRecord> {
        let slots = self.inner.read();
        let records = slots
            .order
            .iter()
            .filter_map(|id| slots.records.get(id).cloned())
            .collect();
        records
    }
}
