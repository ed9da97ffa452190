//! Supported languages, script-based detection and localized fallback text.

mod detect;
mod messages;

pub use detect::detect;
pub use messages::{fallback_message, is_fallback_message};

use anyhow::Result;

use crate::ui::Style;

/// A language the assistant can converse in.
///
/// The set is closed: every table keyed by `Language` is total, so there is
/// no "unknown language" state past the parsing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Hindi,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
}

impl Language {
    /// All supported languages, in detection priority order.
    pub const ALL: [Self; 6] = [
        Self::English,
        Self::Hindi,
        Self::Tamil,
        Self::Telugu,
        Self::Kannada,
        Self::Malayalam,
    ];

    /// Lowercase tag name (e.g. "hindi").
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
            Self::Tamil => "tamil",
            Self::Telugu => "telugu",
            Self::Kannada => "kannada",
            Self::Malayalam => "malayalam",
        }
    }

    /// ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Tamil => "ta",
            Self::Telugu => "te",
            Self::Kannada => "kn",
            Self::Malayalam => "ml",
        }
    }

    /// Name of the language in its own script.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "हिन्दी",
            Self::Tamil => "தமிழ்",
            Self::Telugu => "తెలుగు",
            Self::Kannada => "ಕನ್ನಡ",
            Self::Malayalam => "മലയാളം",
        }
    }

    /// Target code for the translation endpoint.
    ///
    /// The code is the first two letters of the tag name uppercased plus the
    /// `-IN` region suffix, which is what the service accepts. Note this is
    /// not ISO 639-1 for Kannada and Malayalam.
    pub const fn translation_target(self) -> &'static str {
        match self {
            Self::English => "EN-IN",
            Self::Hindi => "HI-IN",
            Self::Tamil => "TA-IN",
            Self::Telugu => "TE-IN",
            Self::Kannada => "KA-IN",
            Self::Malayalam => "MA-IN",
        }
    }

    /// Parses a tag name or ISO code, case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        let needle = input.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.name() == needle || lang.code() == needle)
    }
}

/// Prints all supported languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for lang in Language::ALL {
        println!(
            "  {:4} {:10} {}",
            Style::code(lang.code()),
            Style::value(lang.name()),
            Style::secondary(lang.native_name())
        );
    }
}

/// Validates that the given language name or code is supported.
///
/// # Errors
///
/// Returns an error if the language is not in the supported set.
pub fn validate_language(lang: &str) -> Result<Language> {
    Language::parse(lang).map_or_else(
        || {
            anyhow::bail!(
                "Invalid language: '{lang}'\n\n\
                 Valid values: english, hindi, tamil, telugu, kannada, malayalam \
                 (or their ISO codes: en, hi, ta, te, kn, ml)\n\
                 Run 'samvad languages' to see all supported languages."
            )
        },
        Ok,
    )
}
