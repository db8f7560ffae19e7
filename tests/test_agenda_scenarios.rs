//! End-to-end user scenarios through AgendaService.
//!
//! Each test drives the same triggers an embedding UI would (submit, edit,
//! delete, search, clear) and checks both the status message and the
//! persisted slot.

mod mocks;

use agenda::models::{Contact, ContactFields};
use agenda::persistence::{PersistenceAdapter, STORAGE_KEY};
use agenda::services::{AgendaService, StatusLevel, SubmitOutcome};
use agenda::session::EditSession;
use agenda::store::ContactStore;
use agenda::AgendaError;
use mocks::MockSlotStore;
use std::sync::Arc;

fn setup() -> (MockSlotStore, AgendaService) {
    let slots = MockSlotStore::new();
    let store = ContactStore::load(PersistenceAdapter::new(Arc::new(slots.clone())));
    (slots, AgendaService::new(store))
}

fn ana() -> ContactFields {
    ContactFields::new("Ana", "Diaz", "555-1234", "a@d.com", "Main 1")
}

fn luis() -> ContactFields {
    ContactFields::new("Luis", "Ramos", "555-5678", "luis@ramos.com", "Side 2")
}

fn names(contacts: &[&Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.full_name()).collect()
}

#[test]
fn test_add_single_contact() {
    let (_, mut agenda) = setup();

    let status = agenda.submit(&ana()).unwrap();

    assert_eq!(status.level, StatusLevel::Success);
    assert_eq!(status.message, "Contact added");
    assert_eq!(agenda.total_count(), 1);
}

#[test]
fn test_invalid_phone_is_rejected() {
    let (slots, mut agenda) = setup();
    agenda.submit(&ana()).unwrap();
    slots.reset_call_counts();

    let mut fields = luis();
    fields.phone = "abc".to_string();
    let status = agenda.submit(&fields).unwrap();

    assert_eq!(status.level, StatusLevel::Danger);
    assert_eq!(status.message, "invalid phone");
    assert_eq!(agenda.total_count(), 1);
    assert_eq!(slots.get_call_count("set"), 0);
}

#[test]
fn test_search_by_name() {
    let (_, mut agenda) = setup();
    agenda.submit(&ana()).unwrap();
    agenda.submit(&luis()).unwrap();

    assert_eq!(names(&agenda.set_search_query("ana")), vec!["Ana Diaz"]);
    assert_eq!(names(&agenda.set_search_query("ramos")), vec!["Luis Ramos"]);
    assert!(agenda.set_search_query("xyz").is_empty());
    assert_eq!(names(&agenda.set_search_query("  ")), vec!["Ana Diaz", "Luis Ramos"]);
    assert_eq!(agenda.total_count(), 2);
}

#[test]
fn test_edit_phone_through_session() {
    let (slots, mut agenda) = setup();
    let SubmitOutcome::Added(ana_contact) = agenda.try_submit(&ana()).unwrap() else {
        panic!("first submit must add");
    };
    agenda.submit(&luis()).unwrap();

    let (status, form) = agenda.request_edit(ana_contact.id());
    assert_eq!(status.level, StatusLevel::Info);
    assert_eq!(agenda.session(), &EditSession::Editing(ana_contact.id().clone()));

    let mut fields = form.unwrap().to_fields();
    fields.phone = "555-9999".to_string();
    let status = agenda.submit(&fields).unwrap();

    assert_eq!(status.message, "Contact updated");
    assert_eq!(agenda.total_count(), 2);
    let stored = agenda.store().find(ana_contact.id()).unwrap();
    assert_eq!(stored.phone().as_str(), "555-9999");
    assert_eq!(agenda.store().list()[0].id(), ana_contact.id());
    assert_eq!(agenda.session(), &EditSession::Idle);

    let persisted: Vec<Contact> = serde_json::from_str(&slots.raw(STORAGE_KEY).unwrap()).unwrap();
    assert_eq!(persisted[0].phone().as_str(), "555-9999");
}

#[test]
fn test_invalid_edit_stays_in_edit_mode() {
    let (_, mut agenda) = setup();
    let SubmitOutcome::Added(ana_contact) = agenda.try_submit(&ana()).unwrap() else {
        panic!("first submit must add");
    };
    agenda.request_edit(ana_contact.id());

    let mut fields = ana();
    fields.email = "broken".to_string();
    let status = agenda.submit(&fields).unwrap();

    assert_eq!(status.message, "invalid email");
    assert!(agenda.session().is_editing());
}

#[test]
fn test_edit_target_deleted_elsewhere() {
    let (_, mut agenda) = setup();
    let SubmitOutcome::Added(ana_contact) = agenda.try_submit(&ana()).unwrap() else {
        panic!("first submit must add");
    };
    agenda.request_edit(ana_contact.id());
    agenda.request_delete(ana_contact.id()).unwrap();

    // Deleting the edit target leaves edit mode, so this submit adds.
    let status = agenda.submit(&ana()).unwrap();
    assert_eq!(status.message, "Contact added");
    assert_eq!(agenda.total_count(), 1);
}

#[test]
fn test_clear_all() {
    let (slots, mut agenda) = setup();
    agenda.submit(&ana()).unwrap();
    agenda.submit(&luis()).unwrap();

    let status = agenda.request_clear_all().unwrap();

    assert_eq!(status.level, StatusLevel::Warning);
    assert_eq!(agenda.total_count(), 0);
    assert_eq!(slots.raw(STORAGE_KEY).as_deref(), Some("[]"));

    let status = agenda.request_clear_all().unwrap();
    assert_eq!(status.level, StatusLevel::Info);
    assert_eq!(status.message, "No contacts to delete");
}

#[test]
fn test_refused_write_surfaces_as_error() {
    let (slots, mut agenda) = setup();
    slots.set_fail_writes(true);

    let result = agenda.submit(&ana());

    assert!(matches!(result, Err(AgendaError::Persistence(_))));
    assert_eq!(agenda.total_count(), 0);
}

#[test]
fn test_contacts_survive_restart() {
    let (slots, mut agenda) = setup();
    agenda.submit(&ana()).unwrap();
    agenda.submit(&luis()).unwrap();

    let restarted = AgendaService::new(ContactStore::load(PersistenceAdapter::new(Arc::new(slots))));
    assert_eq!(restarted.store().list(), agenda.store().list());
}
