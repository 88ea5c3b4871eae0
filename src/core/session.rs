//! Translation session state
//!
//! Explicit state struct plus a pure reducer over session events. The
//! front-end renders this state; all mutation goes through [`apply`].
//!
//! [`apply`]: TranslatorSession::apply

use crate::core::detect;
use crate::shared::error::ERR_SERVICE_UNAVAILABLE;

/// Detection only runs above this many (trimmed) characters of input.
const DETECT_MIN_CHARS: usize = 10;

#[derive(Debug, Clone)]
pub struct TranslatorSession {
    pub input_text: String,
    pub translation: String,
    pub from_language: String,
    pub to_language: String,
    pub detected_language: Option<&'static str>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum SessionEvent {
    InputChanged(String),
    FromLanguageChanged(String),
    ToLanguageChanged(String),
    TranslationStarted,
    TranslationReceived(String),
    TranslationFailed,
    LanguagesSwapped,
}

impl Default for TranslatorSession {
    fn default() -> Self {
        Self::new("en", "es")
    }
}

impl TranslatorSession {
    pub fn new(from_language: impl Into<String>, to_language: impl Into<String>) -> Self {
        Self {
            input_text: String::new(),
            translation: String::new(),
            from_language: from_language.into(),
            to_language: to_language.into(),
            detected_language: None,
            is_loading: false,
            error: None,
        }
    }

    /// Pure transition function over session events.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::InputChanged(text) => {
                self.input_text = text;
                if self.input_text.trim().is_empty() {
                    self.translation.clear();
                    self.error = None;
                }
                self.refresh_detection();
            }
            SessionEvent::FromLanguageChanged(code) => {
                self.from_language = code;
            }
            SessionEvent::ToLanguageChanged(code) => {
                self.to_language = code;
            }
            SessionEvent::TranslationStarted => {
                self.is_loading = true;
                self.error = None;
            }
            SessionEvent::TranslationReceived(translated) => {
                self.translation = translated;
                self.is_loading = false;
            }
            SessionEvent::TranslationFailed => {
                self.error = Some(ERR_SERVICE_UNAVAILABLE.to_string());
                self.translation.clear();
                self.is_loading = false;
            }
            SessionEvent::LanguagesSwapped => {
                std::mem::swap(&mut self.from_language, &mut self.to_language);
                std::mem::swap(&mut self.input_text, &mut self.translation);
                self.refresh_detection();
            }
        }
    }

    fn refresh_detection(&mut self) {
        self.detected_language = if self.input_text.trim().chars().count() > DETECT_MIN_CHARS {
            Some(detect::detect(&self.input_text))
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_change_annotates_detected_language() {
        let mut session = TranslatorSession::default();
        session.apply(SessionEvent::InputChanged("el gato está en la casa".into()));
        assert_eq!(session.detected_language, Some("es"));
    }

    #[test]
    fn short_input_clears_detection() {
        let mut session = TranslatorSession::default();
        session.apply(SessionEvent::InputChanged("el gato está en la casa".into()));
        session.apply(SessionEvent::InputChanged("el gato".into()));
        assert_eq!(session.detected_language, None);
    }

    #[test]
    fn empty_input_clears_translation_and_error() {
        let mut session = TranslatorSession::default();
        session.apply(SessionEvent::TranslationReceived("Hola".into()));
        session.apply(SessionEvent::TranslationFailed);
        session.apply(SessionEvent::InputChanged("   ".into()));
        assert!(session.translation.is_empty());
        assert_eq!(session.error, None);
    }

    #[test]
    fn failure_sets_exactly_the_generic_message() {
        let mut session = TranslatorSession::default();
        session.apply(SessionEvent::TranslationStarted);
        session.apply(SessionEvent::TranslationFailed);
        assert_eq!(
            session.error.as_deref(),
            Some("Translation service temporarily unavailable")
        );
        assert!(!session.is_loading);
        assert!(session.translation.is_empty());
    }

    #[test]
    fn received_translation_clears_loading() {
        let mut session = TranslatorSession::default();
        session.apply(SessionEvent::TranslationStarted);
        assert!(session.is_loading);
        session.apply(SessionEvent::TranslationReceived("Hola".into()));
        assert!(!session.is_loading);
        assert_eq!(session.translation, "Hola");
    }

    #[test]
    fn start_clears_previous_error() {
        let mut session = TranslatorSession::default();
        session.apply(SessionEvent::TranslationFailed);
        session.apply(SessionEvent::TranslationStarted);
        assert_eq!(session.error, None);
    }

    #[test]
    fn swap_exchanges_languages_and_texts() {
        let mut session = TranslatorSession::new("en", "fr");
        session.apply(SessionEvent::InputChanged("Good morning".into()));
        session.apply(SessionEvent::TranslationReceived("Bonjour".into()));
        session.apply(SessionEvent::LanguagesSwapped);
        assert_eq!(session.from_language, "fr");
        assert_eq!(session.to_language, "en");
        assert_eq!(session.input_text, "Bonjour");
        assert_eq!(session.translation, "Good morning");
    }
}
