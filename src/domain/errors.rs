//! Domain validation errors.

use std::fmt;

/// Reasons a set of contact fields (or a single value object) is rejected.
///
/// The field variants are ordered the way the validator checks them, and
/// their `Display` text is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// First name is blank after trimming.
    FirstNameRequired,

    /// Last name is blank after trimming.
    LastNameRequired,

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// Address is blank after trimming.
    AddressRequired,
}

impl ValidationError {
    /// Short user-facing reason, without the offending value.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::EmptyId => "id required",
            Self::FirstNameRequired => "first name required",
            Self::LastNameRequired => "last name required",
            Self::InvalidPhone(_) => "invalid phone",
            Self::InvalidEmail(_) => "invalid email",
            Self::AddressRequired => "address required",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason())
    }
}

impl std::error::Error for ValidationError {}
