use std::time::Duration;

/// Decoded, device-ready audio.
///
/// Samples are interleaved `f32` values in `[-1.0, 1.0]`. Buffers produced by
/// [`pcm::to_buffer`](crate::codec::pcm::to_buffer) are always mono.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayableAudioBuffer {
    sample_rate: u32,
    channels: u16,
    samples: Vec<f32>,
}

impl PlayableAudioBuffer {
    pub const fn new(sample_rate: u32, channels: u16, samples: Vec<f32>) -> Self {
        Self {
            sample_rate,
            channels,
            samples,
        }
    }

    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub const fn channels(&self) -> u16 {
        self.channels
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of frames (one sample per channel).
    pub fn frame_count(&self) -> usize {
        match self.channels {
            0 => 0,
            n => self.samples.len() / usize::from(n),
        }
    }

    /// Playback length at the buffer's own sample rate.
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        #[allow(clippy::cast_precision_loss)]
        let secs = self.frame_count() as f64 / f64::from(self.sample_rate);
        Duration::from_secs_f64(secs)
    }
}
