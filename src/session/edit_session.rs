//! Decides whether a form submission creates or modifies a contact.

use crate::domain::{ContactDraft, ContactId};
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use crate::store::ContactStore;

/// What a submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(Contact),
    Updated(Contact),
}

impl SubmitOutcome {
    /// The contact that was written.
    pub fn contact(&self) -> &Contact {
        match self {
            Self::Added(contact) | Self::Updated(contact) => contact,
        }
    }
}

/// Two-state edit tracker: `Idle`, or `Editing` a specific contact.
///
/// Starts idle. A submit while idle adds; a submit while editing updates the
/// target and returns to idle whether or not the target still exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(ContactId),
}

impl EditSession {
    pub fn new() -> Self {
        Self::Idle
    }

    /// Target the contact `id` for the next submit and return it so the form
    /// can be pre-filled.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if `id` does not resolve; the session keeps its
    /// previous state.
    pub fn begin_edit<'s>(&mut self, store: &'s ContactStore, id: &ContactId) -> StoreResult<&'s Contact> {
        let contact = store.find(id).ok_or_else(|| {
            tracing::warn!(id = %id, "Edit target not found");
            StoreError::NotFound(id.clone())
        })?;
        *self = Self::Editing(id.clone());
        tracing::debug!(id = %id, "Editing contact");
        Ok(contact)
    }

    /// Drop the edit target, if any.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Add (when idle) or update the edit target (when editing).
    pub fn submit(&mut self, store: &mut ContactStore, draft: ContactDraft) -> StoreResult<SubmitOutcome> {
        match std::mem::take(self) {
            Self::Idle => store.add(draft).map(SubmitOutcome::Added),
            Self::Editing(id) => match store.update(&id, draft) {
                Ok(contact) => Ok(SubmitOutcome::Updated(contact)),
                // A vanished target cannot be edited further.
                Err(e @ StoreError::NotFound(_)) => Err(e),
                Err(e) => {
                    *self = Self::Editing(id);
                    Err(e)
                }
            },
        }
    }

    /// The contact being edited, if any.
    pub fn editing_id(&self) -> Option<&ContactId> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate;
    use crate::models::ContactFields;
    use crate::persistence::{MemorySlotStore, PersistenceAdapter};
    use std::sync::Arc;

    fn store() -> ContactStore {
        ContactStore::load(PersistenceAdapter::new(Arc::new(MemorySlotStore::new())))
    }

    fn draft(phone: &str) -> ContactDraft {
        validate(&ContactFields::new("Ana", "Diaz", phone, "a@d.com", "Main 1")).unwrap()
    }

    #[test]
    fn test_starts_idle() {
        let session = EditSession::new();
        assert_eq!(session, EditSession::Idle);
        assert!(session.editing_id().is_none());
    }

    #[test]
    fn test_submit_while_idle_adds() {
        let mut store = store();
        let mut session = EditSession::new();
        let outcome = session.submit(&mut store, draft("555-1234")).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Added(_)));
        assert_eq!(store.len(), 1);
        assert!(!session.is_editing());
    }

    #[test]
    fn test_edit_then_submit_updates_and_returns_to_idle() {
        let mut store = store();
        let mut session = EditSession::new();
        let ana = session.submit(&mut store, draft("555-1234")).unwrap().contact().clone();

        let target = session.begin_edit(&store, ana.id()).unwrap();
        assert_eq!(target, &ana);
        assert_eq!(session.editing_id(), Some(ana.id()));

        let outcome = session.submit(&mut store, draft("555-9999")).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Updated(ref c) if c.id() == ana.id()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].phone().as_str(), "555-9999");
        assert_eq!(session, EditSession::Idle);
    }

    #[test]
    fn test_begin_edit_unknown_keeps_state() {
        let store = store();
        let mut session = EditSession::new();
        let missing = ContactId::new("missing").unwrap();
        assert!(matches!(
            session.begin_edit(&store, &missing),
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(session, EditSession::Idle);
    }

    #[test]
    fn test_vanished_target_reverts_to_idle() {
        let mut store = store();
        let mut session = EditSession::new();
        let ana = session.submit(&mut store, draft("555-1234")).unwrap().contact().clone();
        session.begin_edit(&store, ana.id()).unwrap();
        store.delete(ana.id()).unwrap();

        let err = session.submit(&mut store, draft("555-9999")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(session, EditSession::Idle);
        assert!(store.is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut store = store();
        let mut session = EditSession::new();
        let ana = session.submit(&mut store, draft("555-1234")).unwrap().contact().clone();
        session.begin_edit(&store, ana.id()).unwrap();
        session.cancel();
        assert_eq!(session, EditSession::Idle);
    }
}
