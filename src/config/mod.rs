mod manager;

pub use manager::{
    ConfigFile, ConfigManager, PeerConfig, ReplDefaults, ResolveOptions, ResolvedConfig,
    resolve_config,
};
