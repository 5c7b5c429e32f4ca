//! Services that orchestrate domain types through ports.

pub mod playback;

pub use playback::{PlaybackController, synthesize_buffer};
