//! Fallback translator
//!
//! Offline/demo substitute for the remote translation service. Total:
//! a handful of canned phrases translate exactly, everything else gets a
//! synthesized placeholder. Latency is simulated to emulate a remote call.

use crate::core::language;
use crate::core::translator::Translator;
use crate::shared::error::AppResult;
use crate::shared::types::TranslateRequest;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Canned demo translations, exact-match and case-sensitive.
const PHRASE_TABLE: &[(&str, &[(&str, &str)])] = &[
    (
        "Hello, how are you?",
        &[
            ("es", "Hola, ¿cómo estás?"),
            ("fr", "Bonjour, comment allez-vous?"),
            ("de", "Hallo, wie geht es dir?"),
            ("it", "Ciao, come stai?"),
            ("pt", "Olá, como você está?"),
            ("ru", "Привет, как дела?"),
            ("ja", "こんにちは、元気ですか？"),
            ("ko", "안녕하세요, 어떻게 지내세요?"),
            ("zh", "你好，你好吗？"),
        ],
    ),
    (
        "Thank you very much",
        &[
            ("es", "Muchas gracias"),
            ("fr", "Merci beaucoup"),
            ("de", "Vielen Dank"),
            ("it", "Grazie mille"),
            ("pt", "Muito obrigado"),
            ("ru", "Большое спасибо"),
            ("ja", "どうもありがとうございます"),
            ("ko", "정말 고맙습니다"),
            ("zh", "非常感谢"),
        ],
    ),
    (
        "Good morning",
        &[
            ("es", "Buenos días"),
            ("fr", "Bonjour"),
            ("de", "Guten Morgen"),
            ("it", "Buongiorno"),
            ("pt", "Bom dia"),
            ("ru", "Доброе утро"),
            ("ja", "おはようございます"),
            ("ko", "좋은 아침입니다"),
            ("zh", "早上好"),
        ],
    ),
];

fn phrase_lookup(text: &str, to_language: &str) -> Option<&'static str> {
    PHRASE_TABLE
        .iter()
        .find(|(phrase, _)| *phrase == text)
        .and_then(|(_, targets)| {
            targets
                .iter()
                .find(|(code, _)| *code == to_language)
                .map(|(_, translated)| *translated)
        })
}

fn placeholder(request: &TranslateRequest) -> String {
    format!(
        "[Translation from {} to {}]: {}",
        language::display_name(&request.from_language),
        language::display_name(&request.to_language),
        request.text
    )
}

#[derive(Clone, Default)]
pub struct FallbackTranslator {
    /// Skips the simulated latency; used by tests.
    instant: bool,
}

impl FallbackTranslator {
    pub fn new() -> Self {
        Self { instant: false }
    }

    pub fn instant() -> Self {
        Self { instant: true }
    }
}

#[async_trait]
impl Translator for FallbackTranslator {
    async fn translate(&self, request: &TranslateRequest) -> AppResult<String> {
        if !self.instant {
            // Emulate remote round-trip: 800-1200ms
            let jitter = rand::thread_rng().gen_range(0..=400);
            tokio::time::sleep(Duration::from_millis(800 + jitter)).await;
        }

        if let Some(translated) = phrase_lookup(&request.text, &request.to_language) {
            return Ok(translated.to_string());
        }

        Ok(placeholder(request))
    }
}
