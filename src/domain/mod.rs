//! Domain value objects and validation.
//!
//! This module contains type-safe wrappers for contact IDs, email addresses,
//! and phone numbers, plus the form validator. Value objects validate at
//! construction (and at deserialization), so invalid data cannot be
//! represented in a stored contact.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod phone;
pub mod validator;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use validator::{validate, ContactDraft};
