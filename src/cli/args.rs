use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::query::EvalMode;

#[derive(Parser, Debug)]
#[command(name = "convex-repl")]
#[command(about = "Interactive REPL for Convex Lisp on a remote peer")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options selecting the peer and how to talk to it.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Query endpoint URL (overrides --peer)
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Configured peer name
    #[arg(short = 'p', long, global = true)]
    pub peer: Option<String>,

    /// Evaluation mode
    #[arg(short = 'm', long, value_enum, global = true)]
    pub mode: Option<EvalMode>,

    /// Query timeout in milliseconds
    #[arg(short = 't', long = "timeout", value_name = "MS", global = true)]
    pub timeout_ms: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a single expression and print the result
    Eval {
        /// Expression to evaluate (reads --file or stdin if omitted)
        expression: Option<String>,

        /// Read the expression from a file
        #[arg(short = 'f', long, conflicts_with = "expression")]
        file: Option<PathBuf>,

        /// Print the history entry as JSON
        #[arg(long)]
        json: bool,
    },
    /// List configured peers
    Peers {
        /// Show details for a specific peer
        peer: Option<String>,
    },
    /// Configure default peer, mode and timeout
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
