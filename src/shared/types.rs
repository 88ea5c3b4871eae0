use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Request body for the remote translation endpoint.
/// Field names are the wire names expected by `POST /api/ai/translate`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TranslateRequest {
    pub text: String,
    pub from_language: String,
    pub to_language: String,
}

impl TranslateRequest {
    pub fn new(
        text: impl Into<String>,
        from_language: impl Into<String>,
        to_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            from_language: from_language.into(),
            to_language: to_language.into(),
        }
    }
}

/// Expected response shape from the remote translation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TranslateResponse {
    pub translation: String,
}

/// A supported language: ISO-639-1-like code, display name, decorative
/// flag marker, and whether it is pinned in the "popular" group.
/// Reference data only, so serialization is one-way (core -> frontend).
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub popular: bool,
}
