//! REPL mode UI components.

use crate::query::EvalMode;
use crate::ui::Style;

use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &SessionConfig) {
    println!(
        "{} {} - Convex Lisp REPL",
        Style::header("convex-repl"),
        Style::secondary(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::hint(format!(
            "Connected to {} in {} mode",
            config.endpoint, config.mode
        ))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &SessionConfig, mode: EvalMode) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}       {}",
        Style::secondary("peer"),
        Style::value(config.peer_name.as_deref().unwrap_or("(none)"))
    );
    println!(
        "  {}   {}",
        Style::secondary("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!("  {}       {}", Style::secondary("mode"), Style::value(mode));
    println!(
        "  {}    {}",
        Style::secondary("timeout"),
        Style::value(format!("{} ms", config.timeout.as_millis()))
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}    {}",
        Style::prompt("/config"),
        Style::secondary("Show current connection settings")
    );
    println!(
        "  {}      {}",
        Style::prompt("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}   {}",
        Style::prompt("/history"),
        Style::secondary("Show all evaluated expressions")
    );
    println!(
        "  {}      {}",
        Style::prompt("/mode"),
        Style::secondary("Show or set the mode (query, transact)")
    );
    println!(
        "  {}      {}",
        Style::prompt("/quit"),
        Style::secondary("Exit the REPL")
    );
    println!();
    println!(
        "{}",
        Style::hint("End a line with \\ to continue the expression on the next line.")
    );
    println!();
}

pub fn print_mode(mode: EvalMode) {
    println!("Mode: {}", Style::value(mode));
    println!();
}

pub fn print_mode_set(mode: EvalMode) {
    println!("{} Mode set to {}", Style::success("✓"), Style::value(mode));
    println!();
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
