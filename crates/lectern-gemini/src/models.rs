//! Wire types for the `generateContent` endpoint.

use serde::{Deserialize, Serialize};

/// Response modality requesting raw audio.
pub const AUDIO_MODALITY: &str = "AUDIO";

// ============================================================================
// Request
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// A single-turn request rendering `text` in a prebuilt voice.
    pub fn speech(text: &str, voice_name: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(text.to_string()),
                    inline_data: None,
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec![AUDIO_MODALITY.to_string()],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: voice_name.to_string(),
                        },
                    },
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
    pub speech_config: SpeechConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    pub voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    pub voice_name: String,
}

// ============================================================================
// Shared content
// ============================================================================

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: Option<String>,
    pub data: String,
}

// ============================================================================
// Response
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Audio of the first candidate: the first part carrying inline data.
    pub fn into_audio(self) -> Option<InlineData> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|part| part.inline_data)
    }
}

/// `{"error": {...}}` body returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl ApiErrorBody {
    /// `"RESOURCE_EXHAUSTED: Quota exceeded"`, falling back to the numeric
    /// code, then to the bare message.
    pub fn describe(&self) -> String {
        match (&self.status, self.code) {
            (Some(status), _) if !status.is_empty() => format!("{status}: {}", self.message),
            (_, Some(code)) => format!("{code}: {}", self.message),
            _ => self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_speech_request_shape() {
        let request = GenerateContentRequest::speech("Hello there", "Puck");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "contents": [{"parts": [{"text": "Hello there"}]}],
                "generationConfig": {
                    "responseModalities": ["AUDIO"],
                    "speechConfig": {
                        "voiceConfig": {
                            "prebuiltVoiceConfig": {"voiceName": "Puck"}
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_audio_payload_from_first_inline_part() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "ignored"},
                        {"inlineData": {"mimeType": "audio/L16;codec=pcm;rate=24000", "data": "AAA="}}
                    ]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 4}
        }))
        .unwrap();

        let audio = response.into_audio().unwrap();
        assert_eq!(audio.data, "AAA=");
        assert_eq!(
            audio.mime_type.as_deref(),
            Some("audio/L16;codec=pcm;rate=24000")
        );
    }

    #[test]
    fn test_missing_audio_is_none() {
        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.into_audio().is_none());

        let no_content: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert!(no_content.into_audio().is_none());

        let text_only: GenerateContentResponse = serde_json::from_value(
            json!({"candidates": [{"content": {"parts": [{"text": "sorry"}]}}]}),
        )
        .unwrap();
        assert!(text_only.into_audio().is_none());
    }

    #[test]
    fn test_error_envelope_description() {
        let envelope: ErrorEnvelope = serde_json::from_value(json!({
            "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
        }))
        .unwrap();
        assert_eq!(envelope.error.code, Some(400));
        assert_eq!(
            envelope.error.describe(),
            "INVALID_ARGUMENT: API key not valid."
        );

        let bare: ErrorEnvelope =
            serde_json::from_value(json!({"error": {"code": 503, "message": "Overloaded"}}))
                .unwrap();
        assert_eq!(bare.error.describe(), "503: Overloaded");
    }
}
