//! Speech generation port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::VoiceName;

/// Failure of a single synthesis request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SynthesisError {
    /// No API credential configured. Raised before any network attempt.
    #[error("No API key configured for the speech service")]
    MissingCredential,

    /// The remote call failed (network, quota, malformed response, ...).
    #[error("Speech service request failed: {0}")]
    Remote(String),
}

/// Remote text-to-speech service.
///
/// One call is one request: implementations must not retry, cache or rate
/// limit. Those concerns belong to the caller.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Render `text` in `voice`.
    ///
    /// Returns the transport-encoded (base64) audio payload, or `Ok(None)`
    /// when the service answered without any audio. Callers treat a missing
    /// or empty payload as a failure.
    async fn synthesize(&self, text: &str, voice: VoiceName)
    -> Result<Option<String>, SynthesisError>;
}
