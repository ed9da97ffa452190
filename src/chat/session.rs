use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::conversation::Conversation;
use super::ui;
use crate::completion::CompletionClient;
use crate::ui::Spinner;

/// Configuration for an interactive conversation session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The API credential sent as a bearer token.
    pub api_key: String,
    /// The chat-completions endpoint URL.
    pub chat_url: String,
    /// Number of trailing turns sent with each request.
    pub max_history: usize,
}

/// An interactive multilingual chat session.
///
/// Provides a REPL-style interface around a [`Conversation`].
pub struct ChatSession {
    config: SessionConfig,
    conversation: Conversation,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        let client = CompletionClient::new(config.chat_url.clone(), config.api_key.clone());
        let conversation = Conversation::new(client, config.max_history);
        Self {
            config,
            conversation,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Chat in English or an Indian language, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(&cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.respond_and_print(&text).await;
                    }
                },
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

    fn handle_command(&self, cmd: &SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config);
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    /// Answers a single message and prints the reply, without entering the
    /// interactive loop.
    pub async fn run_once(&mut self, message: &str) {
        self.respond_and_print(message).await;
    }

    async fn respond_and_print(&mut self, text: &str) {
        let spinner = Spinner::new("Thinking...");
        let reply = self.conversation.respond(text).await;
        spinner.stop();

        ui::print_reply(&reply);
    }
}
