//! Peer listing command handler.

use anyhow::Result;

use crate::config::{ConfigFile, ConfigManager};
use crate::query::DEFAULT_ENDPOINT;
use crate::ui::Style;

/// Prints configured peers to stdout.
///
/// If `specific_peer` is provided, shows detailed information for that peer.
pub fn print_peers(specific_peer: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default()?;

    for line in peer_lines(&config, specific_peer)? {
        println!("{line}");
    }
    Ok(())
}

fn peer_lines(config: &ConfigFile, specific_peer: Option<&str>) -> Result<Vec<String>> {
    let default_peer = config.repl.peer.as_deref();
    let marker = |name: &str| {
        if default_peer == Some(name) {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        }
    };

    if let Some(name) = specific_peer {
        let Some(peer) = config.peers.get(name) else {
            anyhow::bail!("Peer '{name}' not found");
        };
        let mut lines = vec![
            format!("Peer: {}{}", Style::value(name), marker(name)),
            format!("  endpoint = {}", peer.endpoint),
        ];
        if let Some(description) = &peer.description {
            lines.push(format!("  about    = {description}"));
        }
        return Ok(lines);
    }

    if config.peers.is_empty() {
        return Ok(vec![
            "No peers configured.".to_string(),
            format!("Using the public test peer: {DEFAULT_ENDPOINT}"),
            "Add peers to ~/.config/convex-repl/config.toml".to_string(),
        ]);
    }

    let mut lines = vec![Style::header("Configured peers:"), String::new()];
    for (name, peer) in &config.peers {
        lines.push(format!("  {}{}", Style::value(name), marker(name)));
        lines.push(format!("    endpoint: {}", Style::secondary(&peer.endpoint)));
        if let Some(description) = &peer.description {
            lines.push(format!("    {}", Style::hint(description)));
        }
    }
    Ok(lines)
}
