//! XDG-style path utilities for the configuration directory.
//!
//! XDG Base Directory conventions are preferred over OS-specific
//! locations on every platform.

use std::path::PathBuf;

const APP_DIR: &str = "convex-repl";

/// Returns the configuration directory for convex-repl.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/convex-repl` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/convex-repl` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| home_dir().join(".config").join(APP_DIR),
        |xdg| PathBuf::from(xdg).join(APP_DIR),
    )
}

/// Returns the user's home directory.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Failed to determine home directory")
}
