//! Pre-authored fallback messages, one per supported language.
//!
//! These are returned in place of a remote reply whenever a service call
//! fails, so the user always sees an apology in their own language rather
//! than a raw error.

use super::Language;

/// Returns the canned fallback message for `language`.
///
/// Total over the enum; every language has an entry.
pub const fn fallback_message(language: Language) -> &'static str {
    match language {
        Language::English => {
            "I apologize, but I'm having trouble processing your request. Please try again."
        }
        Language::Hindi => {
            "मुझे खेद है, लेकिन मैं आपके अनुरोध को संसाधित करने में परेशानी का सामना कर रहा हूं। कृपया पुनः प्रयास करें।"
        }
        Language::Tamil => {
            "மன்னிக்கவும், உங்கள் கோரிக்கையை செயலாக்குவதில் சிக்கல் ஏற்பட்டுள்ளது. மீண்டும் முயற்சிக்கவும்."
        }
        Language::Telugu => {
            "క్షమించండి, మీ అభ్యర్థనను ప్రాసెస్ చేయడంలో ఇబ్బంది ఎదురవుతోంది. దయచేసి మళ్లీ ప్రయత్నించండి."
        }
        Language::Kannada => {
            "ಕ್ಷಮಿಸಿ, ನಿಮ್ಮ ವಿನಂತಿಯನ್ನು ಸಂಸ್ಕರಿಸುವಲ್ಲಿ ತೊಂದರೆ ಎದುರಾಗುತ್ತಿದೆ. ದಯವಿಟ್ಟು ಮತ್ತೆ ಪ್ರಯತ್ನಿಸಿ."
        }
        Language::Malayalam => {
            "ക്ഷമിക്കണം, നിങ്ങളുടെ അഭ്യർത്ഥന സംസ്കരിക്കുന്നതിൽ പ്രശ്നം നേരിടുന്നു. ദയവായി വീണ്ടും ശ്രമിക്കുക."
        }
    }
}

/// Returns `true` if `text` is exactly one of the canned fallback messages.
///
/// Used by the translation gateway to avoid sending already-localized text
/// through the remote service.
pub fn is_fallback_message(text: &str) -> bool {
    Language::ALL
        .into_iter()
        .any(|language| fallback_message(language) == text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_a_message() {
        for language in Language::ALL {
            assert!(!fallback_message(language).is_empty());
        }
    }

    #[test]
    fn test_messages_are_distinct() {
        for (i, a) in Language::ALL.iter().enumerate() {
            for b in &Language::ALL[i + 1..] {
                assert_ne!(fallback_message(*a), fallback_message(*b));
            }
        }
    }

    #[test]
    fn test_is_fallback_message_matches_table_entries() {
        for language in Language::ALL {
            assert!(is_fallback_message(fallback_message(language)));
        }
    }

    #[test]
    fn test_is_fallback_message_rejects_other_text() {
        assert!(!is_fallback_message("hello"));
        assert!(!is_fallback_message(""));
        // A substring of an entry is not an entry.
        assert!(!is_fallback_message("I apologize"));
    }
}
