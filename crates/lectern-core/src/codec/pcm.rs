//! Raw 16-bit PCM to playable float samples.

use crate::domain::PlayableAudioBuffer;

/// Fixed output rate of the speech service, in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 24_000;

/// The speech service only produces mono audio.
pub const CHANNELS: u16 = 1;

/// Full-scale divisor for signed 16-bit samples.
const I16_FULL_SCALE: f32 = 32_768.0;

/// Interpret `bytes` as signed 16-bit little-endian mono PCM at `sample_rate`.
///
/// Each pair of bytes becomes one sample `s / 32768.0`, so `-32768` maps to
/// exactly `-1.0` and `32767` to just under `1.0`. A trailing odd byte is
/// dropped. The input is assumed to be raw PCM; nothing is validated.
pub fn to_buffer(bytes: &[u8], sample_rate: u32) -> PlayableAudioBuffer {
    let chunks = bytes.chunks_exact(2);
    if !chunks.remainder().is_empty() {
        tracing::trace!(len = bytes.len(), "Dropping trailing odd PCM byte");
    }

    let samples = chunks
        .map(|pair| f32::from(i16::from_le_bytes([pair[0], pair[1]])) / I16_FULL_SCALE)
        .collect();

    PlayableAudioBuffer::new(sample_rate, CHANNELS, samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_maps_to_zero() {
        let buffer = to_buffer(&[0x00, 0x00], DEFAULT_SAMPLE_RATE);
        assert_eq!(buffer.samples(), &[0.0]);
    }

    #[test]
    fn minimum_maps_to_minus_one() {
        let buffer = to_buffer(&[0x00, 0x80], DEFAULT_SAMPLE_RATE);
        assert_eq!(buffer.samples(), &[-1.0]);
    }

    #[test]
    fn maximum_maps_just_below_one() {
        let buffer = to_buffer(&[0xff, 0x7f], DEFAULT_SAMPLE_RATE);
        let sample = buffer.samples()[0];
        assert!((sample - 0.999_969).abs() < 1e-6, "got {sample}");
        assert!(sample < 1.0);
    }

    #[test]
    fn samples_are_little_endian() {
        // 0x0100 = 256
        let buffer = to_buffer(&[0x00, 0x01], DEFAULT_SAMPLE_RATE);
        assert!((buffer.samples()[0] - 256.0 / 32_768.0).abs() < f32::EPSILON);
    }

    #[test]
    fn even_length_gives_half_as_many_samples() {
        for len in [0usize, 2, 4, 96, 4_800] {
            let bytes = vec![0x11; len];
            assert_eq!(to_buffer(&bytes, DEFAULT_SAMPLE_RATE).samples().len(), len / 2);
        }
    }

    #[test]
    fn odd_trailing_byte_is_dropped() {
        for len in [1usize, 3, 5, 97] {
            let bytes = vec![0x22; len];
            assert_eq!(to_buffer(&bytes, DEFAULT_SAMPLE_RATE).samples().len(), len / 2);
        }
    }

    #[test]
    fn buffer_is_mono_at_requested_rate() {
        let buffer = to_buffer(&[0, 0, 0, 0], 16_000);
        assert_eq!(buffer.channels(), 1);
        assert_eq!(buffer.sample_rate(), 16_000);
    }
}
