//! Agenda - a local contact book.
//!
//! Keeps an ordered collection of personal contacts, persists it to a
//! key-value slot after every change, and supports add, edit, delete, clear
//! and substring search. The core is synchronous and UI-agnostic; an MCP
//! server over stdio is provided as one embedding.
//!
//! # Architecture
//!
//! - **domain**: Value objects (`ContactId`, `PhoneNumber`, `EmailAddress`) and the form validator
//! - **models**: The `Contact` record and raw `ContactFields` input
//! - **persistence**: Slot stores (memory, file) and the versioned collection encoding
//! - **store**: `ContactStore`, the authoritative collection
//! - **search**: Order-preserving substring filter
//! - **session**: `EditSession`, deciding add vs update on submit
//! - **services**: `AgendaService`, the trigger-level facade with status messages
//! - **server**: MCP protocol server
//! - **config** / **logging** / **error**: ambient setup and error types

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;
pub mod persistence;
pub mod search;
pub mod server;
pub mod services;
pub mod session;
pub mod store;

pub use config::{Config, StorageBackend};
pub use domain::{validate, ContactDraft, ContactId, EmailAddress, PhoneNumber, ValidationError};
pub use error::{AgendaError, ConfigError, PersistenceError, StoreError};
pub use models::{Contact, ContactFields};
pub use persistence::{FileSlotStore, MemorySlotStore, PersistenceAdapter, SlotStore, STORAGE_KEY};
pub use search::{filter, SearchableField};
pub use server::AgendaMcpServer;
pub use services::{AgendaService, StatusLevel, StatusMessage};
pub use session::{EditSession, SubmitOutcome};
pub use store::{ClearOutcome, ContactStore};
