//! Supported language reference data
//!
//! Finite, statically enumerated set mirroring what the front-end offers
//! in its language selector. Immutable; codes are ISO-639-1.

use crate::shared::types::Language;

pub const LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English", flag: "\u{1F1FA}\u{1F1F8}", popular: true },
    Language { code: "es", name: "Spanish", flag: "\u{1F1EA}\u{1F1F8}", popular: true },
    Language { code: "fr", name: "French", flag: "\u{1F1EB}\u{1F1F7}", popular: true },
    Language { code: "de", name: "German", flag: "\u{1F1E9}\u{1F1EA}", popular: true },
    Language { code: "it", name: "Italian", flag: "\u{1F1EE}\u{1F1F9}", popular: true },
    Language { code: "pt", name: "Portuguese", flag: "\u{1F1F5}\u{1F1F9}", popular: true },
    Language { code: "ru", name: "Russian", flag: "\u{1F1F7}\u{1F1FA}", popular: true },
    Language { code: "ja", name: "Japanese", flag: "\u{1F1EF}\u{1F1F5}", popular: true },
    Language { code: "ko", name: "Korean", flag: "\u{1F1F0}\u{1F1F7}", popular: false },
    Language { code: "zh", name: "Chinese", flag: "\u{1F1E8}\u{1F1F3}", popular: true },
    Language { code: "ar", name: "Arabic", flag: "\u{1F1F8}\u{1F1E6}", popular: false },
    Language { code: "hi", name: "Hindi", flag: "\u{1F1EE}\u{1F1F3}", popular: false },
    Language { code: "th", name: "Thai", flag: "\u{1F1F9}\u{1F1ED}", popular: false },
    Language { code: "vi", name: "Vietnamese", flag: "\u{1F1FB}\u{1F1F3}", popular: false },
    Language { code: "tr", name: "Turkish", flag: "\u{1F1F9}\u{1F1F7}", popular: false },
    Language { code: "pl", name: "Polish", flag: "\u{1F1F5}\u{1F1F1}", popular: false },
    Language { code: "nl", name: "Dutch", flag: "\u{1F1F3}\u{1F1F1}", popular: false },
    Language { code: "sv", name: "Swedish", flag: "\u{1F1F8}\u{1F1EA}", popular: false },
    Language { code: "da", name: "Danish", flag: "\u{1F1E9}\u{1F1F0}", popular: false },
    Language { code: "no", name: "Norwegian", flag: "\u{1F1F3}\u{1F1F4}", popular: false },
];

/// Look up a language by code.
pub fn find(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code == code)
}

pub fn is_known(code: &str) -> bool {
    find(code).is_some()
}

/// Display name for a code, falling back to the raw code when unknown.
pub fn display_name(code: &str) -> &str {
    match find(code) {
        Some(lang) => lang.name,
        None => code,
    }
}

/// Languages pinned to the top of the selector.
pub fn popular() -> impl Iterator<Item = &'static Language> {
    LANGUAGES.iter().filter(|l| l.popular)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_language() {
        let lang = find("fr").expect("french is in the table");
        assert_eq!(lang.name, "French");
        assert!(lang.popular);
    }

    #[test]
    fn display_name_falls_back_to_code() {
        assert_eq!(display_name("zh"), "Chinese");
        assert_eq!(display_name("xx"), "xx");
    }

    #[test]
    fn table_has_no_duplicate_codes() {
        let mut codes: Vec<_> = LANGUAGES.iter().map(|l| l.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), LANGUAGES.len());
    }

    #[test]
    fn popular_subset_is_nonempty() {
        assert!(popular().count() >= 8);
        assert!(popular().all(|l| l.popular));
    }
}
