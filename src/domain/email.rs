//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// This ensures that email addresses are validated at construction time.
/// The validation is deliberately shallow: `local@domain.tld` shape with no
/// whitespace and exactly one '@'.
///
/// # Example
///
/// ```
/// use agenda::domain::EmailAddress;
///
/// let email = EmailAddress::new(" ana@diaz.com ").unwrap();
/// assert_eq!(email.as_str(), "ana@diaz.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress from (possibly padded) input.
    ///
    /// # Validation Rules
    ///
    /// - Leading and trailing whitespace is trimmed first
    /// - Must contain exactly one '@' and no whitespace
    /// - The part after '@' must contain a '.' with text on both sides
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        let trimmed = email.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Check an email address against the accepted shape.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
