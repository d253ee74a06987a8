//! # convex-repl - Convex Lisp REPL
//!
//! `convex-repl` evaluates Convex Lisp expressions on a remote peer through
//! its HTTP query API and prints the result or error inline. Nothing is
//! parsed or evaluated locally.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive session against the public test peer
//! convex-repl
//!
//! # One expression, result on stdout
//! convex-repl eval '(+ 2 3)'
//!
//! # Against a local peer
//! convex-repl --endpoint http://localhost:18888/api/v1/query
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/convex-repl/config.toml`:
//!
//! ```toml
//! [repl]
//! peer = "local"
//! mode = "query"
//! timeout_ms = 10000
//!
//! [peers.local]
//! endpoint = "http://localhost:18888/api/v1/query"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and peer settings.
pub mod config;

/// Expression input from arguments, files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Peer query API client.
pub mod query;

/// REPL session controller and interactive front end.
pub mod repl;

/// Terminal UI components (spinner, colors).
pub mod ui;
