//! Chat mode UI components.

use crate::language::Language;
use crate::ui::Style;

use super::conversation::ChatReply;
use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Multilingual Chat",
        Style::header("samvad"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::secondary(
            "You can chat in English, Hindi, Tamil, Telugu, Kannada or Malayalam. \
             Type 'quit' to leave."
        )
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_reply(reply: &ChatReply) {
    println!(
        "{} {}",
        Style::label(format!("bot ({})", reply.language.name())),
        reply.text
    );
    println!();
}

pub fn print_config(config: &SessionConfig) {
    println!("{}", Style::header("Session settings"));
    println!(
        "  {}  {}",
        Style::label("max-history"),
        Style::value(config.max_history)
    );
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        Style::secondary(&config.chat_url)
    );
    println!(
        "  {}    {}",
        Style::label("languages"),
        Style::value(
            Language::ALL
                .iter()
                .map(|lang| lang.name())
                .collect::<Vec<_>>()
                .join(", ")
        )
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}  {}",
        Style::command("/config"),
        Style::secondary("Show current session settings")
    );
    println!(
        "  {}    {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}    {}",
        Style::command("/quit"),
        Style::secondary("Leave the conversation (or type 'quit', 'exit', 'bye')")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
