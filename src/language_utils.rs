//! Language name utilities
//!
//! Book records carry the English name of their language ("English",
//! "Spanish"). These helpers look such names up in ISO 639.

use isolang::Language;

/// Check whether `name` is the English name of an ISO 639 language
pub fn is_known_language(name: &str) -> bool {
    Language::from_name(name.trim()).is_some()
}

/// ISO 639-1 code for an English language name, when one exists
pub fn language_code(name: &str) -> Option<&'static str> {
    Language::from_name(name.trim()).and_then(|lang| lang.to_639_1())
}
