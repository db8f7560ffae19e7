//! Free-text contact filter.

use crate::models::Contact;

/// Contact fields a query is matched against. Address is not searchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchableField {
    FirstName,
    LastName,
    Phone,
    Email,
}

impl SearchableField {
    /// All searchable fields, in display order.
    pub const ALL: [SearchableField; 4] = [
        SearchableField::FirstName,
        SearchableField::LastName,
        SearchableField::Phone,
        SearchableField::Email,
    ];

    /// Get display name for the field type.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    /// The value of this field on `contact`.
    pub fn value<'a>(&self, contact: &'a Contact) -> &'a str {
        match self {
            Self::FirstName => contact.first_name(),
            Self::LastName => contact.last_name(),
            Self::Phone => contact.phone().as_str(),
            Self::Email => contact.email().as_str(),
        }
    }
}

/// Normalized query: trimmed and lowercased. `None` when blank.
fn normalize(query: &str) -> Option<String> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

fn field_matches(field: SearchableField, contact: &Contact, needle: &str) -> bool {
    field.value(contact).to_lowercase().contains(needle)
}

/// Returns true if `contact` matches `query` on any searchable field.
/// A blank query matches everything.
pub fn matches(contact: &Contact, query: &str) -> bool {
    match normalize(query) {
        Some(needle) => SearchableField::ALL
            .iter()
            .any(|&field| field_matches(field, contact, &needle)),
        None => true,
    }
}

/// Filter `contacts` by a case-insensitive substring `query`.
///
/// The result keeps the source order. A blank query returns every contact;
/// a query nothing contains returns an empty vector.
///
/// # Example
///
/// ```
/// use agenda::search::filter;
///
/// assert!(filter(&[], "ana").is_empty());
/// ```
pub fn filter<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let Some(needle) = normalize(query) else {
        return contacts.iter().collect();
    };

    let results: Vec<&Contact> = contacts
        .iter()
        .filter(|contact| {
            SearchableField::ALL
                .iter()
                .any(|&field| field_matches(field, contact, &needle))
        })
        .collect();

    tracing::debug!(query = %needle, results = results.len(), "Contacts filtered");
    results
}

/// Which searchable fields of `contact` contain `query`. Empty for a blank query.
pub fn matched_fields(contact: &Contact, query: &str) -> Vec<SearchableField> {
    let Some(needle) = normalize(query) else {
        return Vec::new();
    };
    SearchableField::ALL
        .into_iter()
        .filter(|&field| field_matches(field, contact, &needle))
        .collect()
}
