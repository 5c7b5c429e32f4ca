//! `SpeechSynthesizer` implementation for `GeminiClient`.

use async_trait::async_trait;
use lectern_core::{SpeechSynthesizer, SynthesisError, VoiceName};

use crate::client::GeminiClient;
use crate::error::GeminiError;
use crate::http::HttpBackend;

/// Convert internal `GeminiError` to the core `SynthesisError`.
fn map_error(err: GeminiError) -> SynthesisError {
    match err {
        GeminiError::MissingApiKey => SynthesisError::MissingCredential,
        other => SynthesisError::Remote(other.to_string()),
    }
}

#[async_trait]
impl<B: HttpBackend> SpeechSynthesizer for GeminiClient<B> {
    async fn synthesize(
        &self,
        text: &str,
        voice: VoiceName,
    ) -> Result<Option<String>, SynthesisError> {
        self.generate_speech(text, voice).await.map_err(map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeminiConfig;
    use crate::http::testing::{CannedResponse, FakeBackend};

    #[test]
    fn test_missing_key_maps_to_credential_error() {
        assert_eq!(
            map_error(GeminiError::MissingApiKey),
            SynthesisError::MissingCredential
        );
    }

    #[test]
    fn test_api_error_maps_to_remote() {
        let err = map_error(GeminiError::Api {
            status: 400,
            message: "INVALID_ARGUMENT: API key not valid.".to_string(),
        });
        assert!(matches!(err, SynthesisError::Remote(ref m) if m.contains("API key not valid")));
    }

    #[tokio::test]
    async fn test_synthesize_through_port() {
        let backend = FakeBackend::new(CannedResponse::Status {
            status: 500,
            body: String::new(),
        });
        let client = GeminiClient::with_backend(&GeminiConfig::new().with_api_key("k"), backend)
            .unwrap();
        let synthesizer: &dyn SpeechSynthesizer = &client;

        let result = synthesizer.synthesize("text", VoiceName::Zephyr).await;
        assert!(matches!(result, Err(SynthesisError::Remote(_))));
    }
}
