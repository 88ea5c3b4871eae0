//! Remote translation gateway
//!
//! The live translation path: POSTs the request to the AI translation
//! endpoint. Every failure mode reduces to one generic user-facing
//! message; the underlying detail is only logged.

use crate::config;
use crate::core::translator::Translator;
use crate::shared::error::{AppError, AppResult, ERR_SERVICE_UNAVAILABLE};
use crate::shared::types::{TranslateRequest, TranslateResponse};
use async_trait::async_trait;
use reqwest::Client;

pub struct RemoteGateway {
    http: Client,
    base_url: String,
}

impl RemoteGateway {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent("langslate/translator")
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Gateway pointed at the deployment-resolved API base URL.
    pub fn from_env() -> AppResult<Self> {
        Self::new(config::api_base_url())
    }

    fn endpoint(&self) -> String {
        format!("{}/api/ai/translate", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Translator for RemoteGateway {
    async fn translate(&self, request: &TranslateRequest) -> AppResult<String> {
        let response = match self.http.post(self.endpoint()).json(request).send().await {
            Ok(response) => response,
            Err(e) => {
                eprintln!("[Gateway] Translation request failed: {}", e);
                return Err(AppError::Network(ERR_SERVICE_UNAVAILABLE.to_string()));
            }
        };

        if !response.status().is_success() {
            eprintln!("[Gateway] Translation API returned error: {}", response.status());
            return Err(AppError::Network(ERR_SERVICE_UNAVAILABLE.to_string()));
        }

        match response.json::<TranslateResponse>().await {
            Ok(body) => Ok(body.translation),
            Err(e) => {
                eprintln!("[Gateway] Failed to parse translation response: {}", e);
                Err(AppError::ResponseFormat(ERR_SERVICE_UNAVAILABLE.to_string()))
            }
        }
    }
}
