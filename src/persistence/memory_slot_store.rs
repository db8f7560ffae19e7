//! In-memory slot store.

use crate::error::{PersistenceError, PersistenceResult};
use crate::persistence::traits::SlotStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// Slot store kept entirely in process memory.
///
/// Nothing survives the process; useful for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySlotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots currently written.
    pub fn len(&self) -> usize {
        self.slots.read().map(|slots| slots.len()).unwrap_or(0)
    }

    /// Returns true if no slot has been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> PersistenceError {
    PersistenceError::Unavailable("memory slot lock poisoned".to_string())
}

impl SlotStore for MemorySlotStore {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        let slots = self.slots.read().map_err(|_| poisoned())?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PersistenceResult<()> {
        let mut slots = self.slots.write().map_err(|_| poisoned())?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
