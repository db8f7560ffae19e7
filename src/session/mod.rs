//! Add-versus-update mediation for the single form submit entry point.

mod edit_session;

pub use edit_session::{EditSession, SubmitOutcome};
