//! Application service layer.
//!
//! Services sit between an embedding UI (such as the MCP server) and the
//! contact store, translating user triggers into store operations and status
//! messages.

mod agenda_service;

pub use agenda_service::{AgendaService, StatusLevel, StatusMessage};

// Re-export common types used by services
pub use crate::models::{Contact, ContactFields};
pub use crate::session::SubmitOutcome;
