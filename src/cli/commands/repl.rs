use anyhow::Result;

use super::load_resolved_config;
use crate::cli::ConnectionArgs;
use crate::repl::{ReplSession, SessionConfig};

pub async fn run_repl(connection: &ConnectionArgs) -> Result<()> {
    let resolved = load_resolved_config(connection)?;

    let config = SessionConfig {
        peer_name: resolved.peer_name,
        endpoint: resolved.endpoint,
        mode: resolved.mode,
        timeout: resolved.timeout,
    };

    let session = ReplSession::new(config)?;
    session.run().await
}
