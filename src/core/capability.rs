//! Capability ports for browser-provided services
//!
//! Speech recognition, speech synthesis, and the clipboard are external
//! capabilities owned by the host environment. The core only sees these
//! traits; environments lacking a capability inject the null
//! implementations.

use crate::shared::error::{AppError, AppResult, ERR_VOICE_UNSUPPORTED};
use async_trait::async_trait;

/// Voice capture (speech-to-text).
#[async_trait]
pub trait SpeechInput: Send + Sync {
    /// Capture one utterance in the given language and return its transcript.
    async fn capture(&self, language: &str) -> AppResult<String>;
}

/// Speech synthesis (text-to-speech).
pub trait SpeechOutput: Send + Sync {
    fn speak(&self, text: &str, language: &str) -> AppResult<()>;
}

/// Clipboard write access.
pub trait ClipboardAccess: Send + Sync {
    fn copy(&self, text: &str) -> AppResult<()>;
}

/// Speech input for environments without recognition support.
#[derive(Clone, Copy, Default)]
pub struct NullSpeechInput;

#[async_trait]
impl SpeechInput for NullSpeechInput {
    async fn capture(&self, _language: &str) -> AppResult<String> {
        Err(AppError::Capability(ERR_VOICE_UNSUPPORTED.to_string()))
    }
}

/// Speech output that silently does nothing.
#[derive(Clone, Copy, Default)]
pub struct NullSpeechOutput;

impl SpeechOutput for NullSpeechOutput {
    fn speak(&self, _text: &str, _language: &str) -> AppResult<()> {
        Ok(())
    }
}

/// Clipboard that silently does nothing.
#[derive(Clone, Copy, Default)]
pub struct NullClipboard;

impl ClipboardAccess for NullClipboard {
    fn copy(&self, _text: &str) -> AppResult<()> {
        Ok(())
    }
}
