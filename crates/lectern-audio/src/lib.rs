//! # lectern-audio
//!
//! Plays narration through the default output device using `rodio`.
//!
//! [`RodioOutputDevice`] implements
//! [`AudioOutputDevice`](lectern_core::AudioOutputDevice). The output stream
//! lives on a dedicated thread (see [`audio_thread`]); every playback gets
//! its own sink fed by a [`BufferSource`] that reads straight out of the
//! cached buffer.

#![deny(unused_crate_dependencies)]

pub mod audio_thread;
pub mod device;
pub mod source;

pub use device::{RodioOutputDevice, RodioPlayback};
pub use source::BufferSource;
