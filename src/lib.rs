//! Langslate core
//!
//! Engine behind the Langslate translation front-end: language detection,
//! fallback translation, the remote AI gateway, and the session state
//! machine that drives the UI.

pub mod config;
pub mod core;
pub mod shared;

pub use crate::core::controller::TranslatorController;
pub use crate::core::session::{SessionEvent, TranslatorSession};
pub use crate::core::translator::Translator;
pub use crate::shared::error::{AppError, AppResult};
