//! `rodio::Source` over a shared narration buffer.

use std::sync::Arc;
use std::time::Duration;

use lectern_core::PlayableAudioBuffer;
use rodio::Source;

/// Streams samples out of an `Arc<PlayableAudioBuffer>`.
///
/// Cloning the `Arc` is the only cost of starting a playback; the cached
/// samples are never copied.
pub struct BufferSource {
    buffer: Arc<PlayableAudioBuffer>,
    position: usize,
}

impl BufferSource {
    pub const fn new(buffer: Arc<PlayableAudioBuffer>) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    fn remaining(&self) -> usize {
        self.buffer.samples().len().saturating_sub(self.position)
    }
}

impl Iterator for BufferSource {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let sample = self.buffer.samples().get(self.position).copied()?;
        self.position += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl Source for BufferSource {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.remaining())
    }

    fn channels(&self) -> u16 {
        self.buffer.channels()
    }

    fn sample_rate(&self) -> u32 {
        self.buffer.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(self.buffer.duration())
    }
}
