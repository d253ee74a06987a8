//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with evaluation results on stdout.
//! `RUST_LOG` takes precedence over the `-v` flags.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Setting this variable switches log output to JSON lines.
pub const JSON_ENV: &str = "CONVEX_REPL_LOG_JSON";

/// Maps the number of `-v` flags to a level name.
pub const fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn fallback_filter(verbose: u8) -> String {
    format!("convex_repl={}", level_for_verbosity(verbose))
}

/// Installs the global tracing subscriber. Later calls are ignored.
pub fn init(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter(verbose)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    let registry = tracing_subscriber::registry().with(filter);
    let result = if std::env::var_os(JSON_ENV).is_some() {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer).try_init()
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "trace");
    }

    #[test]
    fn test_fallback_filter_targets_crate() {
        assert_eq!(fallback_filter(2), "convex_repl=debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0);
        init(2);
    }
}
