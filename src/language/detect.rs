//! Heuristic language detection from Unicode script ranges.

use std::ops::Range;

use super::Language;

/// Script code point ranges, in detection priority order.
///
/// The upper bounds are exclusive. The ranges do not overlap, but the scan
/// order is still the tie-break contract if they ever did.
const SCRIPT_RANGES: &[(Language, Range<u32>)] = &[
    (Language::Hindi, 0x0900..0x097F),     // Devanagari
    (Language::Tamil, 0x0B80..0x0BFF),
    (Language::Telugu, 0x0C00..0x0C7F),
    (Language::Kannada, 0x0C80..0x0CFF),
    (Language::Malayalam, 0x0D00..0x0D7F),
];

/// Detects the language of `text` from the script of its characters.
///
/// The first character (scanning left to right) that falls in a known script
/// range decides the whole string; a single Devanagari character inside an
/// otherwise-English sentence tags the input as Hindi. Empty, whitespace-only
/// and pure-Latin input all map to English.
pub fn detect(text: &str) -> Language {
    if text.trim().is_empty() {
        return Language::English;
    }

    for ch in text.chars() {
        let code = ch as u32;
        for (language, range) in SCRIPT_RANGES {
            if range.contains(&code) {
                return *language;
            }
        }
    }

    Language::English
}
