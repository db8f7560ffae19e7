//! Agenda service layer.
//!
//! The entry points an embedding UI calls: one method per user trigger, each
//! returning a classified status message.

use crate::domain::{validate, ContactId};
use crate::error::{AgendaError, AgendaResult};
use crate::models::{Contact, ContactFields};
use crate::search;
use crate::session::{EditSession, SubmitOutcome};
use crate::store::{ClearOutcome, ContactStore};
use serde::Serialize;

/// How a status message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    /// The requested change was made.
    Success,
    /// A destructive action completed.
    Warning,
    /// Validation or not-found failure.
    Danger,
    /// Nothing happened, for information only.
    Info,
}

/// User-facing outcome of a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub message: String,
}

impl StatusMessage {
    pub fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Danger, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, message)
    }
}

/// Owns the contact store, the edit session and the current search query.
pub struct AgendaService {
    store: ContactStore,
    session: EditSession,
    query: String,
}

impl AgendaService {
    pub fn new(store: ContactStore) -> Self {
        Self {
            store,
            session: EditSession::new(),
            query: String::new(),
        }
    }

    /// Validate `fields` and add or update depending on the edit session.
    ///
    /// Validation and not-found failures come back as a danger message. Only a
    /// refused write is an `Err`.
    pub fn submit(&mut self, fields: &ContactFields) -> AgendaResult<StatusMessage> {
        match self.try_submit(fields) {
            Ok(SubmitOutcome::Added(_)) => Ok(StatusMessage::success("Contact added")),
            Ok(SubmitOutcome::Updated(_)) => Ok(StatusMessage::success("Contact updated")),
            Err(e) => Self::recoverable(e),
        }
    }

    /// Like [`submit`](Self::submit), but returns the written contact and
    /// every failure as an error.
    pub fn try_submit(&mut self, fields: &ContactFields) -> AgendaResult<SubmitOutcome> {
        let draft = validate(fields).map_err(|e| {
            tracing::debug!(reason = e.reason(), "Submission rejected");
            e
        })?;
        Ok(self.session.submit(&mut self.store, draft)?)
    }

    /// Delete a contact. Absent ids still report the deletion.
    pub fn request_delete(&mut self, id: &ContactId) -> AgendaResult<StatusMessage> {
        self.store.delete(id)?;
        if self.session.editing_id() == Some(id) {
            self.session.cancel();
        }
        Ok(StatusMessage::warning("Contact deleted"))
    }

    /// Start editing a contact. Returns the contact to pre-fill the form with.
    pub fn request_edit(&mut self, id: &ContactId) -> (StatusMessage, Option<Contact>) {
        match self.session.begin_edit(&self.store, id) {
            Ok(contact) => (StatusMessage::info("Editing contact"), Some(contact.clone())),
            Err(_) => (StatusMessage::danger("contact not found"), None),
        }
    }

    /// Leave edit mode (the form reset).
    pub fn cancel_edit(&mut self) -> StatusMessage {
        self.session.cancel();
        StatusMessage::info("Edit cancelled")
    }

    /// Remember `query` and return the matching contacts.
    pub fn set_search_query(&mut self, query: impl Into<String>) -> Vec<&Contact> {
        self.query = query.into();
        self.visible()
    }

    /// Delete every contact.
    pub fn request_clear_all(&mut self) -> AgendaResult<StatusMessage> {
        match self.store.clear()? {
            ClearOutcome::AlreadyEmpty => Ok(StatusMessage::info("No contacts to delete")),
            ClearOutcome::Cleared { .. } => {
                self.session.cancel();
                Ok(StatusMessage::warning("All contacts deleted"))
            }
        }
    }

    /// Contacts matching the current query, in collection order.
    pub fn visible(&self) -> Vec<&Contact> {
        search::filter(self.store.list(), &self.query)
    }

    /// Size of the whole collection, regardless of the query.
    pub fn total_count(&self) -> usize {
        self.store.len()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    fn recoverable(err: AgendaError) -> AgendaResult<StatusMessage> {
        match err {
            AgendaError::Validation(e) => Ok(StatusMessage::danger(e.reason())),
            AgendaError::NotFound(_) => Ok(StatusMessage::danger("contact not found")),
            AgendaError::Persistence(_) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemorySlotStore, PersistenceAdapter};
    use std::sync::Arc;

    fn service() -> AgendaService {
        let slots = Arc::new(MemorySlotStore::new());
        AgendaService::new(ContactStore::load(PersistenceAdapter::new(slots)))
    }

    fn ana() -> ContactFields {
        ContactFields::new("Ana", "Diaz", "555-1234", "a@d.com", "Main 1")
    }

    #[test]
    fn test_submit_add() {
        let mut service = service();
        let status = service.submit(&ana()).unwrap();
        assert_eq!(status, StatusMessage::success("Contact added"));
        assert_eq!(service.total_count(), 1);
    }

    #[test]
    fn test_submit_invalid_is_danger() {
        let mut service = service();
        let mut fields = ana();
        fields.phone = "abc".to_string();
        let status = service.submit(&fields).unwrap();
        assert_eq!(status, StatusMessage::danger("invalid phone"));
        assert_eq!(service.total_count(), 0);
    }

    #[test]
    fn test_edit_unknown_is_danger() {
        let mut service = service();
        let (status, contact) = service.request_edit(&ContactId::new("nope").unwrap());
        assert_eq!(status.level, StatusLevel::Danger);
        assert!(contact.is_none());
    }

    #[test]
    fn test_delete_of_edit_target_leaves_edit_mode() {
        let mut service = service();
        let SubmitOutcome::Added(ana) = service.try_submit(&ana()).unwrap() else {
            panic!("expected an add");
        };
        service.request_edit(ana.id());
        assert!(service.session().is_editing());

        let status = service.request_delete(ana.id()).unwrap();
        assert_eq!(status.level, StatusLevel::Warning);
        assert!(!service.session().is_editing());
    }

    #[test]
    fn test_clear_all_levels() {
        let mut service = service();
        assert_eq!(service.request_clear_all().unwrap().level, StatusLevel::Info);
        service.submit(&ana()).unwrap();
        assert_eq!(service.request_clear_all().unwrap().level, StatusLevel::Warning);
        assert_eq!(service.total_count(), 0);
    }

    #[test]
    fn test_query_is_kept_for_visible() {
        let mut service = service();
        service.submit(&ana()).unwrap();
        service
            .submit(&ContactFields::new("Luis", "Ramos", "555-5678", "l@r.com", "Side 2"))
            .unwrap();

        assert_eq!(service.set_search_query("luis").len(), 1);
        assert_eq!(service.query(), "luis");
        assert_eq!(service.visible().len(), 1);
        assert_eq!(service.total_count(), 2);
    }

    #[test]
    fn test_status_level_serializes_lowercase() {
        let json = serde_json::to_value(StatusMessage::warning("x")).unwrap();
        assert_eq!(json["level"], "warning");
    }
}
