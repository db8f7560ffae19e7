//! Contact model: the single entity of the contact book.

use crate::domain::{validate, ContactDraft, ContactId, EmailAddress, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};

/// A stored contact.
///
/// Serialized with camelCase keys (`id`, `firstName`, `lastName`, `phone`,
/// `email`, `address`), which is the layout of the durable slot. Fields are
/// read-only from outside the crate: a contact only changes by being replaced
/// through the store.
///
/// Deserialization runs every field through [`validate`], so a record read
/// back from storage is trimmed and checked exactly like form input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "StoredContact")]
pub struct Contact {
    id: ContactId,
    first_name: String,
    last_name: String,
    phone: PhoneNumber,
    email: EmailAddress,
    address: String,
}

impl Contact {
    /// Build a contact from an id and a validated draft.
    pub fn new(id: ContactId, draft: ContactDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
        }
    }

    /// Replace every field except the id.
    pub(crate) fn replace_fields(&mut self, draft: ContactDraft) {
        self.first_name = draft.first_name;
        self.last_name = draft.last_name;
        self.phone = draft.phone;
        self.email = draft.email;
        self.address = draft.address;
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// "First Last", for display.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Raw field values of this contact, e.g. to pre-fill an edit form.
    pub fn to_fields(&self) -> ContactFields {
        ContactFields::new(
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
            self.address.as_str(),
        )
    }
}

/// A contact record as found in storage, before validation.
#[derive(Deserialize)]
struct StoredContact {
    id: String,
    #[serde(flatten)]
    fields: ContactFields,
}

impl TryFrom<StoredContact> for Contact {
    type Error = ValidationError;

    fn try_from(stored: StoredContact) -> Result<Self, Self::Error> {
        let id = ContactId::new(stored.id)?;
        Ok(Contact::new(id, validate(&stored.fields)?))
    }
}

/// Raw, untrusted form input. Nothing here has been trimmed or checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactFields {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
        }
    }
}
