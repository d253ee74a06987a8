use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current connection settings"),
    ("/help", "Show available commands"),
    ("/history", "Show all evaluated expressions"),
    ("/mode", "Show or set the evaluation mode"),
    ("/quit", "Exit the REPL"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Help,
    History,
    /// `/mode` with an optional argument.
    Mode(Option<String>),
    Quit,
    Unknown(String),
}

/// A line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    /// Expression text. `continued` is set when the line ended with `\`.
    Expression { text: String, continued: bool },
    Command(SlashCommand),
}

/// Classifies a prompt line. Slash commands are only recognized at the
/// start of a fresh expression, never inside a continued one.
pub fn parse_line(line: &str, in_continuation: bool) -> Line {
    if !in_continuation
        && let Some(cmd) = line.trim().strip_prefix('/')
    {
        return Line::Command(parse_slash_command(cmd));
    }

    let trimmed_end = line.trim_end();
    match trimmed_end.strip_suffix('\\') {
        Some(text) => Line::Expression {
            text: text.to_string(),
            continued: true,
        },
        None => Line::Expression {
            text: line.to_string(),
            continued: false,
        },
    }
}

fn parse_slash_command(cmd: &str) -> SlashCommand {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.first().copied() {
        Some("config") => SlashCommand::Config,
        Some("help") => SlashCommand::Help,
        Some("history") => SlashCommand::History,
        Some("mode") => SlashCommand::Mode(parts.get(1).map(|s| (*s).to_string())),
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        _ => SlashCommand::Unknown(parts.join(" ")),
    }
}
