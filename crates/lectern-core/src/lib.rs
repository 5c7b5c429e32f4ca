//! # lectern-core
//!
//! Domain types, audio codecs and the narration playback controller.
//!
//! This crate has no knowledge of HTTP or of any audio backend. The remote
//! speech service and the hardware output are reached through the traits in
//! [`ports`]; adapters live in `lectern-gemini` and `lectern-audio`.
//!
//! ```text
//!   play ─► AudioCache ──hit──────────────────────────────► AudioOutputDevice
//!              │miss                                               ▲
//!              ▼                                                   │
//!        SpeechSynthesizer ─► transport::decode ─► pcm::to_buffer ─┘
//! ```

#![deny(unused_crate_dependencies)]

pub mod cache;
pub mod codec;
pub mod domain;
pub mod error;
pub mod events;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use cache::AudioCache;
pub use codec::{DecodeError, pcm, transport};
pub use domain::{
    Book, BookError, CacheKey, Chapter, PlayableAudioBuffer, PlayerSnapshot, PlayerState,
    VoiceName,
};
pub use error::NarrationError;
pub use events::{ControllerEvent, PlaybackId, PlayerEvent};
pub use ports::{
    AudioOutputDevice, DeviceStatus, OutputError, PlaybackDoneCallback, PlaybackHandle,
    SpeechSynthesizer, SynthesisError,
};
pub use services::PlaybackController;
pub use settings::PlaybackConfig;
