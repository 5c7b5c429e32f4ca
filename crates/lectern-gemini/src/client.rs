//! Gemini speech client.

use lectern_core::VoiceName;
use url::Url;

use crate::config::GeminiConfig;
use crate::error::{GeminiError, GeminiResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{GenerateContentRequest, GenerateContentResponse};

/// Default Gemini client using the reqwest HTTP backend.
pub type DefaultGeminiClient = GeminiClient<ReqwestBackend>;

/// Client for the Gemini `generateContent` endpoint.
///
/// Generic over an HTTP backend for testing. Use [`DefaultGeminiClient`]
/// in production code.
pub struct GeminiClient<B: HttpBackend> {
    backend: B,
    endpoint: Url,
    api_key: Option<String>,
}

impl DefaultGeminiClient {
    /// Create a new client with the given configuration.
    ///
    /// A missing API key is not an error here; it is reported on the first
    /// synthesis request.
    pub fn new(config: &GeminiConfig) -> GeminiResult<Self> {
        let backend = ReqwestBackend::new(config)?;
        Self::with_backend(config, backend)
    }
}

impl<B: HttpBackend> GeminiClient<B> {
    pub(crate) fn with_backend(config: &GeminiConfig, backend: B) -> GeminiResult<Self> {
        Ok(Self {
            backend,
            endpoint: endpoint_url(&config.base_url, &config.model)?,
            api_key: config.api_key.clone(),
        })
    }

    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Request speech for `text` and return the base64 audio payload.
    ///
    /// `Ok(None)` means the service answered without any audio.
    pub async fn generate_speech(
        &self,
        text: &str,
        voice: VoiceName,
    ) -> GeminiResult<Option<String>> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::MissingApiKey)?;

        let request = GenerateContentRequest::speech(text, voice.as_str());
        tracing::debug!(%voice, chars = text.len(), "Requesting speech from Gemini");

        let response: GenerateContentResponse = self
            .backend
            .post_json(&self.endpoint, api_key, &request)
            .await?;

        let Some(audio) = response.into_audio() else {
            tracing::warn!(%voice, "Gemini response carried no audio");
            return Ok(None);
        };

        tracing::debug!(
            mime_type = audio.mime_type.as_deref().unwrap_or("unknown"),
            bytes = audio.data.len(),
            "Received speech payload"
        );
        Ok(Some(audio.data))
    }
}

/// `{base}/models/{model}:generateContent`
fn endpoint_url(base_url: &str, model: &str) -> GeminiResult<Url> {
    let base = base_url.trim_end_matches('/');
    Ok(Url::parse(&format!("{base}/models/{model}:generateContent"))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    fn audio_response(data: &str) -> CannedResponse {
        CannedResponse::Json(json!({
            "candidates": [{
                "content": {"parts": [{"inlineData": {"mimeType": "audio/L16;codec=pcm;rate=24000", "data": data}}]}
            }]
        }))
    }

    fn client(config: &GeminiConfig, backend: FakeBackend) -> GeminiClient<FakeBackend> {
        GeminiClient::with_backend(config, backend).unwrap()
    }

    #[test]
    fn test_default_client_creation() {
        assert!(DefaultGeminiClient::new(&GeminiConfig::new()).is_ok());
    }

    #[test]
    fn test_endpoint_url() {
        let url = endpoint_url(
            "https://generativelanguage.googleapis.com/v1beta/",
            "gemini-2.5-flash-preview-tts",
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-tts:generateContent"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = GeminiConfig::new().with_base_url("not a url");
        let result = GeminiClient::with_backend(&config, FakeBackend::new(audio_response("")));
        assert!(matches!(result, Err(GeminiError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_generate_speech_sends_request() {
        let backend = FakeBackend::new(audio_response("UklGRg=="));
        let config = GeminiConfig::new().with_api_key("secret");
        let client = client(&config, backend.clone());

        let payload = client
            .generate_speech("Once upon a time", VoiceName::Charon)
            .await
            .unwrap();
        assert_eq!(payload.as_deref(), Some("UklGRg=="));

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert!(request.url.ends_with("/models/gemini-2.5-flash-preview-tts:generateContent"));
        assert_eq!(request.api_key, "secret");
        assert_eq!(request.body["contents"][0]["parts"][0]["text"], "Once upon a time");
        assert_eq!(
            request.body["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]
                ["voiceName"],
            "Charon"
        );
    }

    #[tokio::test]
    async fn test_missing_key_sends_nothing() {
        let backend = FakeBackend::new(audio_response("AAA="));
        let client = client(&GeminiConfig::new(), backend.clone());

        let result = client.generate_speech("text", VoiceName::Kore).await;

        assert!(matches!(result, Err(GeminiError::MissingApiKey)));
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_response_without_audio() {
        let backend = FakeBackend::new(CannedResponse::Json(json!({"candidates": []})));
        let client = client(&GeminiConfig::new().with_api_key("k"), backend);

        let payload = client.generate_speech("text", VoiceName::Kore).await.unwrap();
        assert!(payload.is_none());
    }

    #[tokio::test]
    async fn test_api_error_is_surfaced_once() {
        let backend = FakeBackend::new(CannedResponse::Status {
            status: 503,
            body: r#"{"error":{"code":503,"message":"The model is overloaded.","status":"UNAVAILABLE"}}"#
                .to_string(),
        });
        let client = client(&GeminiConfig::new().with_api_key("k"), backend.clone());

        let err = client
            .generate_speech("text", VoiceName::Kore)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("overloaded"));
        assert_eq!(backend.requests().len(), 1, "no retries");
    }
}
