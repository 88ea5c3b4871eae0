use serde::Serialize;
use thiserror::Error;

/// Application errors
///
/// All variants are serializable so they can cross the frontend boundary.
/// Remote-call failures must never carry raw transport detail past the
/// session layer; see [`ERR_SERVICE_UNAVAILABLE`].
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("I/O Error: {0}")]
    Io(String),

    /// Fetch rejected or non-2xx status from the translation service
    #[error("Network Error: {0}")]
    Network(String),

    /// Response body not parseable as the expected shape
    #[error("Response Format Error: {0}")]
    ResponseFormat(String),

    /// Voice input/output unavailable in the runtime environment
    #[error("Capability Error: {0}")]
    Capability(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Unknown Error: {0}")]
    Unknown(String),
}

// Implement conversion from standard errors
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ResponseFormat(format!("Serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Generic user-facing message for any remote translation failure.
/// Original error detail is logged, never shown.
pub const ERR_SERVICE_UNAVAILABLE: &str = "Translation service temporarily unavailable";

/// Message surfaced when voice capture is unavailable.
pub const ERR_VOICE_UNSUPPORTED: &str = "Voice input is not supported in this environment";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_map_to_io_variant() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing settings file");
        let err = AppError::from(source);
        match err {
            AppError::Io(msg) => assert!(msg.contains("missing settings file")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn json_errors_map_to_response_format() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = AppError::from(source);
        assert!(matches!(err, AppError::ResponseFormat(_)));
    }
}
