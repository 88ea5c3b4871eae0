//! Language detection from text samples
//!
//! Simple heuristic: unambiguous script ranges first, then whole-word
//! stop-word matching for European languages. Total over all input,
//! defaulting to English.
//!
//! Known limitation: mixed-script text returns the first script matched
//! in test order, not the dominant script.

use regex::Regex;
use std::sync::OnceLock;

/// Script ranges with unambiguous code-point blocks, in test order.
const SCRIPT_RANGES: &[(&str, &[(char, char)])] = &[
    // CJK Unified Ideographs + Extension A
    ("zh", &[('\u{4E00}', '\u{9FFF}'), ('\u{3400}', '\u{4DBF}')]),
    // Hiragana + Katakana
    ("ja", &[('\u{3040}', '\u{309F}'), ('\u{30A0}', '\u{30FF}')]),
    // Hangul Syllables
    ("ko", &[('\u{AC00}', '\u{D7AF}')]),
    // Arabic + Arabic Supplement
    ("ar", &[('\u{0600}', '\u{06FF}'), ('\u{0750}', '\u{077F}')]),
    // Devanagari
    ("hi", &[('\u{0900}', '\u{097F}')]),
    // Thai
    ("th", &[('\u{0E00}', '\u{0E7F}')]),
    // Cyrillic
    ("ru", &[('\u{0400}', '\u{04FF}')]),
];

/// Stop-word sets per European language, in priority order.
const STOP_WORDS: &[(&str, &str)] = &[
    ("es", r"\b(el|la|los|las|y|de|en|un|una)\b"),
    ("fr", r"\b(le|la|les|et|de|dans|un|une)\b"),
    ("de", r"\b(der|die|das|und|in|zu|mit|auf)\b"),
    ("it", r"\b(il|la|lo|gli|le|e|di|in|per)\b"),
    ("pt", r"\b(o|a|os|as|e|de|em|para|com)\b"),
];

fn stop_word_regexes() -> &'static Vec<(&'static str, Regex)> {
    static REGEXES: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    REGEXES.get_or_init(|| {
        STOP_WORDS
            .iter()
            .map(|(code, pattern)| (*code, Regex::new(pattern).expect("valid stop-word regex")))
            .collect()
    })
}

/// Guess the language of a text sample.
///
/// Always returns a code from the known language set; empty or
/// signal-free input returns `"en"`. Callers gate invocation on a
/// minimum input length, but short input is still handled.
pub fn detect(text: &str) -> &'static str {
    for &(code, ranges) in SCRIPT_RANGES {
        let hit = text
            .chars()
            .any(|c| ranges.iter().any(|&(start, end)| (start..=end).contains(&c)));
        if hit {
            return code;
        }
    }

    let lower = text.to_lowercase();
    for (code, re) in stop_word_regexes() {
        if re.is_match(&lower) {
            return *code;
        }
    }

    "en"
}
