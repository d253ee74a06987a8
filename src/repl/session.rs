use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::time::Duration;

use super::command::{Line, SlashCommand, SlashCommandCompleter, parse_line};
use super::controller::{Key, KeyOutcome, ReplController, SubmitOutcome};
use super::render::{self, CONTINUATION_PROMPT, LOADING_MESSAGE, PROMPT};
use super::ui;
use crate::query::{EvalMode, HttpTransport, QueryTransport};
use crate::ui::Spinner;

/// Configuration for a REPL session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Name of the configured peer, if the endpoint came from one.
    pub peer_name: Option<String>,
    /// The peer's query endpoint URL.
    pub endpoint: String,
    /// Mode for the first submission.
    pub mode: EvalMode,
    /// Client-side bound on each query.
    pub timeout: Duration,
}

/// An interactive REPL session against one peer.
pub struct ReplSession<T = HttpTransport> {
    config: SessionConfig,
    controller: ReplController<T>,
}

impl ReplSession<HttpTransport> {
    pub fn new(config: SessionConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: QueryTransport> ReplSession<T> {
    pub fn with_transport(config: SessionConfig, transport: T) -> Self {
        let controller = ReplController::new(transport, config.endpoint.clone(), config.mode);
        Self { config, controller }
    }

    pub const fn controller(&self) -> &ReplController<T> {
        &self.controller
    }

    pub async fn run(&self) -> Result<()> {
        ui::print_header(&self.config);
        tracing::info!(
            endpoint = %self.config.endpoint,
            mode = %self.config.mode,
            "REPL session started"
        );

        let prompt_style = Styled::new(PROMPT)
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let continuation_style = Styled::new(CONTINUATION_PROMPT).with_fg(Color::Grey);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        let continuation_config = render_config
            .with_prompt_prefix(continuation_style)
            .with_answered_prompt_prefix(continuation_style);

        loop {
            let in_continuation = !self.controller.input().is_empty();
            let prompt = if in_continuation {
                Text::new("").with_render_config(continuation_config)
            } else {
                Text::new("")
                    .with_render_config(render_config)
                    .with_autocomplete(SlashCommandCompleter)
                    .with_help_message(
                        "Type a Convex Lisp expression, /help for commands, Ctrl+C to quit",
                    )
            };

            match prompt.prompt() {
                Ok(line) => {
                    if !self.handle_line(&line, in_continuation).await {
                        break;
                    }
                }
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Feeds one prompt line to the controller. Returns `false` to end the session.
    pub async fn handle_line(&self, line: &str, in_continuation: bool) -> bool {
        match parse_line(line, in_continuation) {
            Line::Command(cmd) => self.handle_command(cmd),
            Line::Expression { text, continued } => {
                for c in text.chars() {
                    self.controller.handle_key(Key::Char(c)).await;
                }
                if continued {
                    self.controller.handle_key(Key::Enter { shift: true }).await;
                } else {
                    self.submit().await;
                }
                true
            }
        }
    }

    async fn submit(&self) {
        let spinner = (!self.controller.input().trim().is_empty())
            .then(|| Spinner::new(LOADING_MESSAGE));

        let outcome = self.controller.handle_key(Key::Enter { shift: false }).await;
        drop(spinner);

        match outcome {
            KeyOutcome::Submitted(SubmitOutcome::Recorded(index)) => {
                if let Some(entry) = self.controller.history().get(index) {
                    ui::print_lines(&render::result_lines(entry));
                    println!();
                }
            }
            // A rejected line must not leave the prompt in continuation mode.
            KeyOutcome::Submitted(SubmitOutcome::Rejected(_)) => self.controller.set_input(""),
            KeyOutcome::Edited => {}
        }
    }

    fn handle_command(&self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config, self.controller.mode());
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::History => {
                ui::print_lines(&render::history_lines(&self.controller.history()));
                println!();
                true
            }
            SlashCommand::Mode(None) => {
                ui::print_mode(self.controller.mode());
                true
            }
            SlashCommand::Mode(Some(value)) => {
                match value.parse::<EvalMode>() {
                    Ok(mode) => {
                        self.controller.set_mode(mode);
                        ui::print_mode_set(mode);
                    }
                    Err(e) => ui::print_error(&e.to_string()),
                }
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }
}
