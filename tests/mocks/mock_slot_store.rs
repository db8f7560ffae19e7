use agenda::error::{PersistenceError, PersistenceResult};
use agenda::persistence::SlotStore;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock slot store for testing.
///
/// Keeps slots in memory, tracks method calls for verification, and can be
/// switched into a mode where every write is refused (e.g. quota exceeded).
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSlotStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_writes: Arc<AtomicBool>,
    fail_reads: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockSlotStore {
    /// Create a new empty MockSlotStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot with raw contents.
    pub fn seed(&self, key: &str, value: &str) {
        let mut slots = self.slots.lock().unwrap();
        slots.insert(key.to_string(), value.to_string());
    }

    /// Raw contents of a slot, bypassing call tracking.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().get(key).cloned()
    }

    /// Refuse (or accept again) every subsequent write.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent read fail.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl SlotStore for MockSlotStore {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        self.track_call("get");
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(PersistenceError::Unavailable("read refused".to_string()));
        }
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> PersistenceResult<()> {
        self.track_call("set");
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Unavailable("quota exceeded".to_string()));
        }
        self.seed(key, value);
        Ok(())
    }
}
