//! The key-value medium contact slots are written to.

use crate::error::PersistenceResult;

/// A durable key-value medium holding whole serialized values per key.
///
/// Implementations decide where a slot lives (memory, a file per key, ...).
/// Values are opaque strings; the [`PersistenceAdapter`](super::PersistenceAdapter)
/// owns the encoding.
pub trait SlotStore: Send + Sync {
    /// Read a slot. `Ok(None)` means the slot has never been written.
    fn get(&self, key: &str) -> PersistenceResult<Option<String>>;

    /// Write a slot, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> PersistenceResult<()>;
}
