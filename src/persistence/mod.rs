//! Durable storage of the contact collection.
//!
//! [`SlotStore`] abstracts the key-value medium; [`PersistenceAdapter`]
//! encodes the collection into one versioned slot on top of it. Swapping the
//! medium (memory, files) never touches the contact store.

mod adapter;
mod file_slot_store;
mod memory_slot_store;
mod traits;

pub use adapter::{PersistenceAdapter, STORAGE_KEY};
pub use file_slot_store::FileSlotStore;
pub use memory_slot_store::MemorySlotStore;
pub use traits::SlotStore;
