//! Subcommand implementations.

use anyhow::Result;

use crate::cli::ConnectionArgs;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Configure command handler.
pub mod configure;

/// One-shot evaluation command handler.
pub mod eval;

/// Peer listing command handler.
pub mod peers;

/// Interactive REPL command handler.
pub mod repl;

/// Merges connection flags with the config file.
pub fn load_resolved_config(connection: &ConnectionArgs) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new();
    let file_config = manager.load_or_default()?;

    let options = ResolveOptions {
        endpoint: connection.endpoint.clone(),
        peer: connection.peer.clone(),
        mode: connection.mode,
        timeout_ms: connection.timeout_ms,
    };

    resolve_config(&options, &file_config)
}
