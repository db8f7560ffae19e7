//! Test doubles shared by the integration tests.

mod mock_slot_store;

pub use mock_slot_store::MockSlotStore;
