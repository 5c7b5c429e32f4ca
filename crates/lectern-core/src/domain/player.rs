use serde::{Deserialize, Serialize};

use super::voice::VoiceName;

/// Observable state of the narration player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerState {
    /// Nothing playing; the play control is available.
    #[default]
    Idle,

    /// Waiting for speech synthesis of the current chapter.
    Loading,

    /// Audio is being rendered through the output device.
    Playing,

    /// Reserved. No transition produces it: playback only supports stop and restart.
    Paused,

    /// The last attempt failed; clears back to `Idle` after a fixed delay.
    Error,
}

impl PlayerState {
    /// Whether the play/stop toggle accepts input in this state.
    pub const fn can_toggle_playback(self) -> bool {
        !matches!(self, Self::Loading | Self::Error)
    }

    /// Whether the voice may be changed in this state.
    pub const fn can_select_voice(self) -> bool {
        !matches!(self, Self::Loading | Self::Playing)
    }
}

/// Read-only view of the player handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub state: PlayerState,
    pub chapter_id: String,
    pub chapter_title: String,
    pub voice: VoiceName,
    /// Audio for the current chapter and voice is already synthesized.
    pub cached: bool,
    pub can_toggle_playback: bool,
    pub can_select_voice: bool,
    /// The output device is still rendering the current playback.
    pub output_active: bool,
}
