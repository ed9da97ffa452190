use crate::completion::{CompletionClient, Turn};
use crate::language::{self, Language, fallback_message};

/// One reply from the assistant, tagged with the detected language of the
/// user input that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub language: Language,
}

/// A single conversation with the remote model.
///
/// Owns the full turn history; each `respond` call sends only the trailing
/// `max_history` turns, so request size stays bounded however long the
/// session runs. Exclusive ownership (`&mut self`) serializes the two-step
/// history mutation: one conversation belongs to one caller.
pub struct Conversation {
    client: CompletionClient,
    history: Vec<Turn>,
    max_history: usize,
}

impl Conversation {
    /// Creates a conversation keeping a window of `max_history` turns.
    ///
    /// Values below 1 are clamped to 1; a window must hold at least the
    /// current user turn.
    pub fn new(client: CompletionClient, max_history: usize) -> Self {
        Self {
            client,
            history: Vec::new(),
            max_history: max_history.max(1),
        }
    }

    /// Produces a reply for `user_input`.
    ///
    /// Never fails: empty input and every kind of remote failure resolve to
    /// the canned fallback message in the appropriate language.
    pub async fn respond(&mut self, user_input: &str) -> ChatReply {
        if user_input.trim().is_empty() {
            return ChatReply {
                text: fallback_message(Language::English).to_string(),
                language: Language::English,
            };
        }

        let language = language::detect(user_input);

        // The user turn is kept even when the remote call fails, so the next
        // exchange still has it as context. Failed calls are not retried.
        self.history.push(Turn::user(user_input));

        let window_start = self.history.len().saturating_sub(self.max_history);
        let window = &self.history[window_start..];

        match self.client.complete(window).await {
            Ok(text) => {
                self.history.push(Turn::assistant(text.clone()));
                ChatReply { text, language }
            }
            Err(_) => ChatReply {
                text: fallback_message(language).to_string(),
                language,
            },
        }
    }

    /// Read-only view of the accumulated history.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub const fn max_history(&self) -> usize {
        self.max_history
    }
}
