//! Translation backends
//!
//! The remote gateway is the live path; the fallback translator implements
//! the same contract for offline/demo use.

pub mod fallback;
pub mod gateway;

use crate::shared::error::AppResult;
use crate::shared::types::TranslateRequest;
use async_trait::async_trait;

/// Common contract for translation backends.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, request: &TranslateRequest) -> AppResult<String>;
}
