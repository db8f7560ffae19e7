//! Contact form validation.
//!
//! Turns raw, untrusted [`ContactFields`] into a [`ContactDraft`]: the only
//! input the contact store accepts for creating or replacing a record.

use super::{EmailAddress, PhoneNumber, ValidationError};
use crate::models::ContactFields;

/// A validated, trimmed set of contact fields.
///
/// Only [`validate`] builds one, so holding a draft proves every field passed
/// the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) phone: PhoneNumber,
    pub(crate) email: EmailAddress,
    pub(crate) address: String,
}

impl ContactDraft {
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
}

/// Validate raw form input.
///
/// Rules are checked in a fixed order and the first failure wins, so the same
/// input always yields the same message:
///
/// 1. first name present
/// 2. last name present
/// 3. phone matches the allowed pattern
/// 4. email has `local@domain.tld` shape
/// 5. address present
///
/// # Example
///
/// ```
/// use agenda::domain::{validate, ValidationError};
/// use agenda::models::ContactFields;
///
/// let fields = ContactFields::new("Ana", "Diaz", "abc", "a@d.com", "Main 1");
/// assert!(matches!(validate(&fields), Err(ValidationError::InvalidPhone(_))));
/// ```
pub fn validate(fields: &ContactFields) -> Result<ContactDraft, ValidationError> {
    let first_name = required(&fields.first_name, ValidationError::FirstNameRequired)?;
    let last_name = required(&fields.last_name, ValidationError::LastNameRequired)?;
    let phone = PhoneNumber::new(fields.phone.as_str())?;
    let email = EmailAddress::new(fields.email.as_str())?;
    let address = required(&fields.address, ValidationError::AddressRequired)?;

    Ok(ContactDraft {
        first_name,
        last_name,
        phone,
        email,
        address,
    })
}

fn required(value: &str, missing: ValidationError) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(missing);
    }
    Ok(trimmed.to_string())
}
