//! Search over the contact collection.
//!
//! Filtering is a read-only, order-preserving projection: it never mutates
//! or re-sorts the collection.

pub mod filter;

pub use filter::{filter, matched_fields, matches, SearchableField};
