//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{CustomType, Select};

use crate::config::{ConfigFile, ConfigManager, ReplDefaults};
use crate::query::{DEFAULT_TIMEOUT, EvalMode};
use crate::ui::{Style, cancellable};

const NO_PEER: &str = "(public test peer)";

/// Runs the configure command.
///
/// With `show`, prints the current defaults. Otherwise asks for the default
/// peer, mode and timeout and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new();
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config);
    if show {
        return Ok(());
    }

    let Some(defaults) = cancellable(|| prompt_defaults(&config))? else {
        return Ok(());
    };
    config.repl = defaults;

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn prompt_defaults(config: &ConfigFile) -> Result<ReplDefaults> {
    let peer = select_peer(config)?;
    let mode = select_mode(config.repl.mode)?;
    let timeout_ms = prompt_timeout(config.repl.timeout_ms)?;

    Ok(ReplDefaults {
        peer,
        mode: Some(mode),
        timeout_ms: Some(timeout_ms),
    })
}

fn print_current_defaults(config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}     {}",
        Style::secondary("peer"),
        config
            .repl
            .peer
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!(
        "  {}     {}",
        Style::secondary("mode"),
        config.repl.mode.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::secondary("timeout"),
        config
            .repl
            .timeout_ms
            .map_or_else(not_set, |ms| Style::value(format!("{ms} ms")))
    );
    println!();
}

fn select_peer(config: &ConfigFile) -> Result<Option<String>> {
    let mut options = vec![NO_PEER.to_string()];
    options.extend(config.peers.keys().cloned());

    let default_index = config
        .repl
        .peer
        .as_ref()
        .and_then(|d| options.iter().position(|p| p == d))
        .unwrap_or(0);

    let selection = Select::new("Default peer:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok((selection != NO_PEER).then_some(selection))
}

fn select_mode(default: Option<EvalMode>) -> Result<EvalMode> {
    let default_index = default
        .and_then(|d| EvalMode::ALL.iter().position(|m| *m == d))
        .unwrap_or(0);

    let selection = Select::new("Default mode:", EvalMode::ALL.to_vec())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn prompt_timeout(default: Option<u64>) -> Result<u64> {
    let default_ms = default.unwrap_or(DEFAULT_TIMEOUT.as_millis() as u64);

    let timeout = CustomType::<u64>::new("Query timeout (ms):")
        .with_default(default_ms)
        .with_error_message("Please enter a whole number of milliseconds")
        .prompt()?;

    if timeout == 0 {
        bail!("Timeout must be greater than zero");
    }

    Ok(timeout)
}
