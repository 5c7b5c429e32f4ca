//! Playback controller configuration.

use std::time::Duration;

use crate::codec::pcm::DEFAULT_SAMPLE_RATE;
use crate::domain::VoiceName;

/// How long the error indicator stays up before the player returns to idle.
pub const DEFAULT_ERROR_RESET_DELAY: Duration = Duration::from_millis(3_000);

/// Configuration for the [`PlaybackController`](crate::PlaybackController).
///
/// # Example
///
/// ```
/// use lectern_core::{PlaybackConfig, VoiceName};
/// use std::time::Duration;
///
/// let config = PlaybackConfig::new()
///     .with_default_voice(VoiceName::Fenrir)
///     .with_error_reset_delay(Duration::from_secs(1));
/// assert_eq!(config.sample_rate(), 24_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackConfig {
    sample_rate: u32,
    error_reset_delay: Duration,
    default_voice: VoiceName,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            error_reset_delay: DEFAULT_ERROR_RESET_DELAY,
            default_voice: VoiceName::default(),
        }
    }
}

impl PlaybackConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rate at which decoded PCM is interpreted.
    ///
    /// Defaults to 24 kHz, the speech service's fixed output rate.
    #[must_use]
    pub const fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Defaults to 3 seconds.
    #[must_use]
    pub const fn with_error_reset_delay(mut self, delay: Duration) -> Self {
        self.error_reset_delay = delay;
        self
    }

    #[must_use]
    pub const fn with_default_voice(mut self, voice: VoiceName) -> Self {
        self.default_voice = voice;
        self
    }

    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub const fn error_reset_delay(&self) -> Duration {
        self.error_reset_delay
    }

    pub const fn default_voice(&self) -> VoiceName {
        self.default_voice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlaybackConfig::new();
        assert_eq!(config.sample_rate(), 24_000);
        assert_eq!(config.error_reset_delay(), Duration::from_millis(3_000));
        assert_eq!(config.default_voice(), VoiceName::Kore);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PlaybackConfig::new()
            .with_sample_rate(16_000)
            .with_error_reset_delay(Duration::from_millis(10))
            .with_default_voice(VoiceName::Charon);

        assert_eq!(config.sample_rate(), 16_000);
        assert_eq!(config.error_reset_delay(), Duration::from_millis(10));
        assert_eq!(config.default_voice(), VoiceName::Charon);
    }
}
