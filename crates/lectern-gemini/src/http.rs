//! HTTP backend abstraction for the Gemini API.
//!
//! The client is generic over [`HttpBackend`] so request building and
//! response mapping can be tested without a network. The production
//! implementation uses reqwest and makes exactly one attempt per call.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::GeminiConfig;
use crate::error::{GeminiError, GeminiResult};
use crate::models::ErrorEnvelope;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can POST JSON and decode a JSON answer.
///
/// This is an implementation detail - external code should go through
/// [`SpeechSynthesizer`](lectern_core::SpeechSynthesizer).
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn post_json<B, T>(&self, url: &Url, api_key: &str, body: &B) -> GeminiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(config: &GeminiConfig) -> GeminiResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

/// Turn a non-success answer into [`GeminiError::Api`], using the error
/// envelope when the body carries one.
fn api_error(status: u16, body: &str) -> GeminiError {
    let message = serde_json::from_str::<ErrorEnvelope>(body).map_or_else(
        |_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "empty response body".to_string()
            } else {
                trimmed.to_string()
            }
        },
        |envelope| envelope.error.describe(),
    );
    GeminiError::Api { status, message }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json<B, T>(&self, url: &Url, api_key: &str, body: &B) -> GeminiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let response = self
            .client
            .post(url.as_str())
            .header(API_KEY_HEADER, api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &text));
        }

        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
