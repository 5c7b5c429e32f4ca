//! Events flowing out of and into the playback controller.

use std::time::Duration;

use crate::domain::{CacheKey, PlayableAudioBuffer, PlayerState, VoiceName};
use crate::error::NarrationError;

/// Events emitted by the controller to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Player state changed.
    StateChanged(PlayerState),

    /// A different chapter is now selected.
    ChapterChanged { chapter_id: String },

    /// A different narrator voice is now selected.
    VoiceChanged(VoiceName),

    /// Audio output started.
    PlaybackStarted {
        chapter_id: String,
        voice: VoiceName,
        duration: Duration,
    },

    /// The active playback reached its end.
    PlaybackFinished,

    /// Narration failed; the player shows an error until it resets.
    ///
    /// `kind` is the failure's [`NarrationError::kind`] label.
    Failed { kind: &'static str, message: String },
}

/// Identifies one playback session so late completions can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackId(pub u64);

/// Completions delivered back to the controller's control thread.
#[derive(Debug)]
pub enum ControllerEvent {
    /// A synthesis task finished, successfully or not.
    SynthesisFinished {
        key: CacheKey,
        outcome: Result<PlayableAudioBuffer, NarrationError>,
    },

    /// The output device drained playback `playback` on its own.
    PlaybackEnded { playback: PlaybackId },

    /// The error display delay for error number `epoch` elapsed.
    ErrorResetElapsed { epoch: u64 },
}
