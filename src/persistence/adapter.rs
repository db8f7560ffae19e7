//! JSON encoding of the contact collection into one versioned slot.

use crate::error::PersistenceResult;
use crate::models::Contact;
use crate::persistence::traits::SlotStore;
use std::collections::HashSet;
use std::sync::Arc;

/// Versioned key of the slot holding the contact collection.
///
/// A schema change gets a new key rather than an in-place migration.
pub const STORAGE_KEY: &str = "agenda_contacts_v1";

/// Serializes the whole ordered contact collection into a single slot.
#[derive(Clone)]
pub struct PersistenceAdapter {
    slots: Arc<dyn SlotStore>,
}

impl PersistenceAdapter {
    /// Create an adapter reading and writing [`STORAGE_KEY`].
    pub fn new(slots: Arc<dyn SlotStore>) -> Self {
        Self { slots }
    }

    /// Write the full ordered collection as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns the medium's error if the write is refused. Callers must not
    /// treat the collection as saved in that case.
    pub fn save(&self, contacts: &[Contact]) -> PersistenceResult<()> {
        let json = serde_json::to_string(contacts)?;
        self.slots.set(STORAGE_KEY, &json).map_err(|e| {
            tracing::error!(key = STORAGE_KEY, error = %e, "Failed to save contacts");
            e
        })?;
        tracing::debug!(key = STORAGE_KEY, count = contacts.len(), "Contacts saved");
        Ok(())
    }

    /// Read the collection back.
    ///
    /// Never fails: an absent slot yields an empty collection, and an
    /// unreadable slot or one that is not a JSON array is logged and also
    /// yields an empty collection, so startup always has a valid state.
    /// Inside a readable array, each record is validated on its own: a record
    /// that fails validation, or repeats an earlier id, is logged and skipped
    /// while the rest load in order.
    pub fn load(&self) -> Vec<Contact> {
        let raw = match self.slots.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = STORAGE_KEY, "No stored contacts, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::error!(key = STORAGE_KEY, error = %e, "Error reading contact storage");
                return Vec::new();
            }
        };

        let records: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(key = STORAGE_KEY, error = %e, "Corrupt contact storage, starting empty");
                return Vec::new();
            }
        };

        let total = records.len();
        let mut seen = HashSet::with_capacity(total);
        let mut contacts = Vec::with_capacity(total);
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Contact>(record) {
                Ok(contact) => {
                    if seen.insert(contact.id().clone()) {
                        contacts.push(contact);
                    } else {
                        tracing::warn!(key = STORAGE_KEY, index, id = %contact.id(), "Skipping stored contact with duplicate id");
                    }
                }
                Err(e) => {
                    tracing::warn!(key = STORAGE_KEY, index, error = %e, "Skipping invalid stored contact");
                }
            }
        }

        if contacts.len() < total {
            tracing::error!(
                key = STORAGE_KEY,
                skipped = total - contacts.len(),
                "Some stored contacts could not be loaded"
            );
        }
        tracing::info!(key = STORAGE_KEY, count = contacts.len(), "Contacts loaded");
        contacts
    }
}
