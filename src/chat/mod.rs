//! Multilingual conversation: history-carrying core plus the interactive
//! REPL built on top of it.

/// Input classification and slash-command autocomplete.
pub mod command;
mod conversation;
mod session;
mod ui;

pub use conversation::{ChatReply, Conversation};
pub use session::{ChatSession, SessionConfig};
