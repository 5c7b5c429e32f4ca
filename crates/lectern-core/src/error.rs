//! Narration error types.

use crate::codec::DecodeError;
use crate::ports::{OutputError, SynthesisError};

/// Errors that can occur while narrating a chapter.
///
/// Every variant raised during playback collapses into
/// [`PlayerState::Error`](crate::PlayerState::Error); the kind is only
/// kept for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum NarrationError {
    /// Missing credential or other configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The speech service call failed.
    #[error("Speech service error: {0}")]
    Remote(String),

    /// The speech service answered without an audio payload.
    #[error("No audio data received from the speech service")]
    EmptyResult,

    /// The audio payload could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The output device could not be opened or could not play.
    #[error(transparent)]
    Output(#[from] OutputError),

    /// No chapter with the requested id.
    #[error("Unknown chapter '{0}'")]
    UnknownChapter(String),

    /// The voice cannot change while narration is loading or playing.
    #[error("Voice cannot be changed while narration is loading or playing")]
    VoiceLocked,
}

impl NarrationError {
    /// Stable label used as a structured logging field.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Remote(_) => "remote",
            Self::EmptyResult => "empty_result",
            Self::Decode(_) => "decode",
            Self::Output(_) => "output",
            Self::UnknownChapter(_) => "unknown_chapter",
            Self::VoiceLocked => "voice_locked",
        }
    }
}

impl From<SynthesisError> for NarrationError {
    fn from(err: SynthesisError) -> Self {
        match err {
            SynthesisError::MissingCredential => Self::Config(err.to_string()),
            SynthesisError::Remote(msg) => Self::Remote(msg),
        }
    }
}
