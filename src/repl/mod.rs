//! Interactive REPL for evaluating expressions on a remote peer.
//!
//! [`ReplController`] holds the session state and runs the submission
//! cycle; [`ReplSession`] drives it from a terminal prompt.

/// Slash command parsing and autocomplete.
pub mod command;
mod controller;
mod history;
/// Text rendering of history entries.
pub mod render;
mod session;
mod ui;

pub use controller::{Evaluated, Key, KeyOutcome, Rejection, ReplController, SubmitOutcome};
pub use history::{FALLBACK_ERROR, HistoryEntry};
pub use session::{ReplSession, SessionConfig};
