//! One-shot evaluation: submit a single expression and exit.
//!
//! The result goes to stdout and the error to stderr, so the command can
//! sit in a shell pipeline. The exit status tells apart service errors,
//! transport errors and empty input.

use anyhow::Result;
use std::path::PathBuf;

use super::load_resolved_config;
use crate::cli::ConnectionArgs;
use crate::input::ExpressionSource;
use crate::query::{Completion, HttpTransport, QueryTransport};
use crate::repl::render::{LOADING_MESSAGE, output_text};
use crate::repl::{HistoryEntry, ReplController};
use crate::ui::{Spinner, Style};

pub struct EvalOptions {
    pub expression: Option<String>,
    pub file: Option<PathBuf>,
    pub json: bool,
}

/// Runs the command and returns the process exit code.
pub async fn run_eval(connection: &ConnectionArgs, options: EvalOptions) -> Result<i32> {
    let resolved = load_resolved_config(connection)?;
    let source = ExpressionSource::from_args(options.expression, options.file).read()?;

    let transport = HttpTransport::new(resolved.timeout)?;
    let controller = ReplController::new(transport, resolved.endpoint, resolved.mode);

    let Some((entry, completion)) = evaluate_once(&controller, &source).await else {
        eprintln!("{} Expression is empty", Style::error("Error:"));
        return Ok(exitcode::USAGE);
    };

    print_entry(&entry, options.json)?;
    Ok(exit_code_for(completion))
}

/// Submits `source` and returns the recorded entry with how it ended, or
/// `None` if the submission was rejected.
pub async fn evaluate_once<T: QueryTransport>(
    controller: &ReplController<T>,
    source: &str,
) -> Option<(HistoryEntry, Completion)> {
    let spinner = Spinner::new(LOADING_MESSAGE);
    let result = controller.submit_evaluated(source).await;
    spinner.stop();

    let evaluated = result.ok()?;
    let entry = controller.history().get(evaluated.index).cloned()?;
    Some((entry, evaluated.completion))
}

fn print_entry(entry: &HistoryEntry, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entry)?);
        return Ok(());
    }

    if let Some(output) = output_text(entry) {
        println!("{output}");
    }
    if let Some(error) = &entry.error {
        eprintln!("{} {error}", Style::error("Error:"));
    }
    Ok(())
}

/// Peer-reported failures are data errors; a peer that never answered is unavailable.
pub const fn exit_code_for(completion: Completion) -> i32 {
    match completion {
        Completion::Success => exitcode::OK,
        Completion::ServiceFailure => exitcode::DATAERR,
        Completion::TransportFailure => exitcode::UNAVAILABLE,
    }
}
