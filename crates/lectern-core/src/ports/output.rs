//! Audio output device port.
//!
//! Models a hardware output that is created lazily, may be suspended by the
//! host, and plays one buffer per [`PlaybackHandle`]:
//!
//! ```text
//!   Uninitialized ──resume──► Running ◄──resume── Suspended
//!                                │                    ▲
//!                                └──────suspend───────┘
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::PlayableAudioBuffer;

/// Lifecycle state of an output device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    /// Never opened.
    Uninitialized,
    /// Opened once, currently released.
    Suspended,
    /// Ready to play.
    Running,
}

/// Errors raised by an output device.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OutputError {
    /// No usable output device.
    #[error("Audio output unavailable: {0}")]
    Unavailable(String),

    /// The device was found but a stream or sink could not be created.
    #[error("Audio output stream failed: {0}")]
    Stream(String),

    /// `play` was called before `resume`.
    #[error("Audio output is not running")]
    NotRunning,
}

/// Callback invoked once when a playback drains on its own.
pub type PlaybackDoneCallback = Box<dyn FnOnce() + Send + 'static>;

/// Live binding between one buffer and the output device.
pub trait PlaybackHandle: Send {
    /// Halt output and disconnect from the device.
    ///
    /// Idempotent: stopping a finished or already stopped handle is a no-op.
    fn stop(&mut self);

    /// Whether audio from this handle is still being rendered.
    fn is_running(&self) -> bool;
}

#[async_trait]
pub trait AudioOutputDevice: Send {
    fn status(&self) -> DeviceStatus;

    /// Open (or re-open) the device so it reaches [`DeviceStatus::Running`].
    async fn resume(&mut self) -> Result<(), OutputError>;

    /// Release the device. Handles already started are stopped.
    fn suspend(&mut self) -> Result<(), OutputError>;

    /// Start rendering `buffer` from its beginning.
    ///
    /// `on_done` fires only if playback reaches the end of the buffer; it
    /// never fires after [`PlaybackHandle::stop`].
    fn play(
        &mut self,
        buffer: Arc<PlayableAudioBuffer>,
        on_done: PlaybackDoneCallback,
    ) -> Result<Box<dyn PlaybackHandle>, OutputError>;
}
