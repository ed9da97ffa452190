//! # samvad - Multilingual Chat CLI
//!
//! `samvad` is a command-line chatbot for Indian languages built on the
//! Sarvam AI chat-completions and translation APIs. It detects the script of
//! each message, keeps a bounded conversation history, and degrades to
//! pre-authored localized messages whenever a remote call fails.
//!
//! ## Features
//!
//! - **Script-based language detection**: Hindi, Tamil, Telugu, Kannada and
//!   Malayalam recognized from Unicode code point ranges
//! - **Bounded history**: only the trailing window of turns is sent with
//!   each request
//! - **Graceful degradation**: remote failures resolve to localized
//!   fallback messages, never to raw errors
//! - **Interactive mode**: REPL-style sessions with slash commands
//!
//! ## Quick Start
//!
//! ```bash
//! # One-shot message
//! samvad --api-key $SARVAM_API_KEY "नमस्ते, आप कैसे हैं?"
//!
//! # Interactive session
//! samvad
//!
//! # Translate English text
//! echo "Good morning" | samvad translate --to hindi
//!
//! # Check your setup
//! samvad doctor
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/samvad/config.toml`:
//!
//! ```toml
//! [samvad]
//! max_history = 5
//! ```
//!
//! The API key is resolved from `--api-key`, the `SARVAM_API_KEY`
//! environment variable, or the config file, in that order.

/// Interactive chat mode and the conversation core.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Chat-completions client for the remote model endpoint.
pub mod completion;

/// Configuration file management and settings resolution.
pub mod config;

/// Input reading from files and stdin.
pub mod input;

/// Supported languages, detection and localized fallback messages.
pub mod language;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation gateway with localized fallback.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
