//! Subcommand implementations.

/// Chat mode command handler (one-shot and interactive).
pub mod chat;

/// Environment setup check command handler.
pub mod doctor;

/// Translation command handler.
pub mod translate;
