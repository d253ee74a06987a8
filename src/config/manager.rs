use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths;
use crate::query::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, EvalMode};

/// Default settings in the `[repl]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplDefaults {
    /// Default peer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer: Option<String>,
    /// Default evaluation mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<EvalMode>,
    /// Client-side query timeout in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

/// A named peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerConfig {
    /// The peer's query endpoint URL.
    pub endpoint: String,
    /// Free-form note shown by `convex-repl peers`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/convex-repl/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub repl: ReplDefaults,
    /// Peer configurations keyed by name.
    #[serde(default)]
    pub peers: BTreeMap<String, PeerConfig>,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Peer the endpoint was taken from, if any.
    pub peer_name: Option<String>,
    pub endpoint: String,
    pub mode: EvalMode,
    pub timeout: Duration,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub peer: Option<String>,
    pub mode: Option<EvalMode>,
    pub timeout_ms: Option<u64>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Endpoint priority: `--endpoint`, then the selected peer (`--peer`,
/// then `repl.peer`), then the public test peer. Mode and timeout: CLI,
/// then file, then built-in default.
///
/// # Errors
///
/// Returns an error if the selected peer is not configured or the timeout is zero.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let peer_name = options
        .peer
        .as_ref()
        .or(config_file.repl.peer.as_ref())
        .cloned();

    let (peer_name, endpoint) = match (&options.endpoint, peer_name) {
        (Some(endpoint), _) => (None, endpoint.clone()),
        (None, Some(name)) => {
            let peer = find_peer(config_file, &name)?;
            let endpoint = peer.endpoint.clone();
            (Some(name), endpoint)
        }
        (None, None) => (None, DEFAULT_ENDPOINT.to_string()),
    };

    let mode = options
        .mode
        .or(config_file.repl.mode)
        .unwrap_or_default();

    let timeout = match options.timeout_ms.or(config_file.repl.timeout_ms) {
        Some(0) => bail!(
            "Invalid timeout: 0 ms\n\n\
             The query timeout must be greater than zero."
        ),
        Some(ms) => Duration::from_millis(ms),
        None => DEFAULT_TIMEOUT,
    };

    Ok(ResolvedConfig {
        peer_name,
        endpoint,
        mode,
        timeout,
    })
}

fn find_peer<'a>(config_file: &'a ConfigFile, name: &str) -> Result<&'a PeerConfig> {
    config_file.peers.get(name).ok_or_else(|| {
        if config_file.peers.is_empty() {
            anyhow::anyhow!(
                "Peer '{name}' not found\n\n\
                 No peers configured. Add peers to ~/.config/convex-repl/config.toml"
            )
        } else {
            anyhow::anyhow!(
                "Peer '{name}' not found\n\n\
                 Available peers:\n  \
                 - {}\n\n\
                 Add peers to ~/.config/convex-repl/config.toml",
                config_file
                    .peers
                    .keys()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join("\n  - ")
            )
        }
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/convex-repl/config.toml`
    /// or `~/.config/convex-repl/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, treating a missing file as empty. A file that
    /// exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
