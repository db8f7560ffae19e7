//! The authoritative in-memory contact collection.

use crate::domain::{ContactDraft, ContactId};
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use crate::persistence::PersistenceAdapter;

/// Result of [`ContactStore::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The collection held `removed` contacts and is now empty.
    Cleared { removed: usize },
    /// Nothing to clear; storage was not touched.
    AlreadyEmpty,
}

/// Ordered collection of contacts, persisted after every mutation.
///
/// Insertion order is preserved and never re-sorted. Each mutation builds the
/// next state, saves it, and only then commits it, so a refused write leaves
/// the collection untouched and memory never runs ahead of storage.
pub struct ContactStore {
    contacts: Vec<Contact>,
    persistence: PersistenceAdapter,
}

impl ContactStore {
    /// Load the collection from `persistence`. Never fails; see
    /// [`PersistenceAdapter::load`].
    pub fn load(persistence: PersistenceAdapter) -> Self {
        let contacts = persistence.load();
        Self {
            contacts,
            persistence,
        }
    }

    /// Append a new contact with a freshly generated id.
    pub fn add(&mut self, draft: ContactDraft) -> StoreResult<Contact> {
        let id = self.fresh_id();
        let contact = Contact::new(id, draft);

        let mut next = self.contacts.clone();
        next.push(contact.clone());
        self.commit(next)?;

        tracing::info!(id = %contact.id(), total = self.contacts.len(), "Contact added");
        Ok(contact)
    }

    /// Replace every field of the contact `id` except the id itself. The
    /// contact keeps its position.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no such contact exists; nothing is mutated or
    /// persisted in that case.
    pub fn update(&mut self, id: &ContactId, draft: ContactDraft) -> StoreResult<Contact> {
        let Some(index) = self.position(id) else {
            tracing::warn!(id = %id, "Update target not found");
            return Err(StoreError::NotFound(id.clone()));
        };

        let mut next = self.contacts.clone();
        next[index].replace_fields(draft);
        let updated = next[index].clone();
        self.commit(next)?;

        tracing::info!(id = %id, "Contact updated");
        Ok(updated)
    }

    /// Remove the contact `id`. Absent ids are a no-op and return `None`.
    pub fn delete(&mut self, id: &ContactId) -> StoreResult<Option<Contact>> {
        let mut next = self.contacts.clone();
        let removed = self.position(id).map(|index| next.remove(index));
        self.commit(next)?;

        match &removed {
            Some(_) => tracing::info!(id = %id, total = self.contacts.len(), "Contact deleted"),
            None => tracing::debug!(id = %id, "Delete target absent, nothing removed"),
        }
        Ok(removed)
    }

    /// Remove every contact.
    pub fn clear(&mut self) -> StoreResult<ClearOutcome> {
        if self.contacts.is_empty() {
            return Ok(ClearOutcome::AlreadyEmpty);
        }

        let removed = self.contacts.len();
        self.commit(Vec::new())?;

        tracing::info!(removed, "All contacts cleared");
        Ok(ClearOutcome::Cleared { removed })
    }

    /// Every contact, in insertion order.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    /// Look up a contact by id.
    pub fn find(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn position(&self, id: &ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| c.id() == id)
    }

    fn fresh_id(&self) -> ContactId {
        loop {
            let id = ContactId::generate();
            if self.find(&id).is_none() {
                return id;
            }
        }
    }

    fn commit(&mut self, next: Vec<Contact>) -> StoreResult<()> {
        self.persistence.save(&next)?;
        self.contacts = next;
        Ok(())
    }
}
