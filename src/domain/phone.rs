//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Digits, whitespace, parentheses, plus and hyphen; 6 to 20 characters.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s()+-]{6,20}$").expect("phone pattern is valid"));

/// A type-safe wrapper for phone numbers.
///
/// The number is trimmed and must consist of 6-20 characters drawn from
/// digits, whitespace, `(`, `)`, `+` and `-`.
///
/// # Example
///
/// ```
/// use agenda::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new(" +1 (555) 123-4567 ").unwrap();
/// assert_eq!(phone.as_str(), "+1 (555) 123-4567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from (possibly padded) input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the trimmed value does not
    /// match the allowed character class and length.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        let trimmed = phone.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Check a phone number against the allowed pattern.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_PATTERN.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
