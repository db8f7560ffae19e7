//! Contact collection ownership and CRUD.

mod contact_store;

pub use contact_store::{ClearOutcome, ContactStore};
