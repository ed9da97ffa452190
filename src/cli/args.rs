use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "samvad")]
#[command(about = "Multilingual AI chat CLI for Indian languages")]
#[command(version)]
pub struct Args {
    /// Message to send (starts an interactive session if not provided)
    pub message: Option<String>,

    /// Sarvam API key (falls back to SARVAM_API_KEY or the config file)
    #[arg(short = 'k', long = "api-key")]
    pub api_key: Option<String>,

    /// Number of recent turns sent with each completion request
    #[arg(long = "max-history")]
    pub max_history: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported languages
    Languages,
    /// Translate English text into a supported language
    Translate {
        /// Target language (name or ISO 639-1 code, e.g. hindi, ta)
        #[arg(short = 't', long = "to")]
        to: String,

        /// File to translate (reads from stdin if not provided)
        file: Option<String>,

        /// Sarvam API key (falls back to SARVAM_API_KEY or the config file)
        #[arg(short = 'k', long = "api-key")]
        api_key: Option<String>,
    },
    /// Check the environment for required configuration
    Doctor {
        /// Treat recommended checks as required
        #[arg(long)]
        strict: bool,
    },
}
