//! Terminal colors for REPL output.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Color roles used across the REPL and its subcommands.
pub struct Style;

impl Style {
    /// Section titles and the banner name.
    pub fn header<T: Display>(text: T) -> String {
        format!("{}", text.bold())
    }

    /// Peer names, modes and other values the user chose.
    pub fn value<T: Display>(text: T) -> String {
        format!("{}", text.cyan())
    }

    /// Field labels, endpoints and the version string.
    pub fn secondary<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    pub fn success<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    /// Evaluation errors and CLI failures.
    pub fn error<T: Display>(text: T) -> String {
        format!("{}", text.red().bold())
    }

    /// The `>` prompt and slash command names.
    pub fn prompt<T: Display>(text: T) -> String {
        format!("{}", text.blue().bold())
    }

    pub fn hint<T: Display>(text: T) -> String {
        format!("{}", text.dimmed().italic())
    }

    /// Marks the default peer in listings.
    pub fn default_marker() -> String {
        format!("{}", "(default)".dimmed())
    }
}
