//! `AudioOutputDevice` backed by rodio.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use lectern_core::{
    AudioOutputDevice, DeviceStatus, OutputError, PlayableAudioBuffer, PlaybackDoneCallback,
    PlaybackHandle,
};
use rodio::Sink;

use crate::audio_thread::AudioThreadHandle;
use crate::source::BufferSource;

/// The default system output, opened lazily.
///
/// `resume` opens the output stream on the audio thread, `suspend` shuts
/// that thread down. Playbacks still running must be stopped before
/// suspending; the controller does so.
pub struct RodioOutputDevice {
    thread: Option<AudioThreadHandle>,
    status: DeviceStatus,
}

impl RodioOutputDevice {
    pub const fn new() -> Self {
        Self {
            thread: None,
            status: DeviceStatus::Uninitialized,
        }
    }
}

impl Default for RodioOutputDevice {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioOutputDevice for RodioOutputDevice {
    fn status(&self) -> DeviceStatus {
        self.status
    }

    async fn resume(&mut self) -> Result<(), OutputError> {
        if self.status == DeviceStatus::Running {
            return Ok(());
        }

        // Opening the stream blocks until the device answers.
        let thread = tokio::task::spawn_blocking(AudioThreadHandle::spawn)
            .await
            .map_err(|e| OutputError::Unavailable(format!("audio open task failed: {e}")))??;
        self.thread = Some(thread);
        tracing::debug!(from = ?self.status, "Audio output running");
        self.status = DeviceStatus::Running;
        Ok(())
    }

    fn suspend(&mut self) -> Result<(), OutputError> {
        if self.thread.take().is_some() {
            self.status = DeviceStatus::Suspended;
            tracing::debug!("Audio output released");
        }
        Ok(())
    }

    fn play(
        &mut self,
        buffer: Arc<PlayableAudioBuffer>,
        on_done: PlaybackDoneCallback,
    ) -> Result<Box<dyn PlaybackHandle>, OutputError> {
        let thread = match (&self.thread, self.status) {
            (Some(thread), DeviceStatus::Running) => thread,
            _ => return Err(OutputError::NotRunning),
        };

        let sink = thread.play(BufferSource::new(buffer))?;
        Ok(Box::new(RodioPlayback::start(sink, on_done)))
    }
}

/// One narration playing on its own sink.
pub struct RodioPlayback {
    sink: Arc<Sink>,
    active: Arc<AtomicBool>,
}

impl RodioPlayback {
    /// Take over a freshly started sink and watch for it to drain.
    fn start(sink: Arc<Sink>, on_done: PlaybackDoneCallback) -> Self {
        let active = Arc::new(AtomicBool::new(true));
        spawn_completion_watcher(Arc::clone(&sink), Arc::clone(&active), on_done);
        Self { sink, active }
    }
}

impl PlaybackHandle for RodioPlayback {
    fn stop(&mut self) {
        // Clear the flag first so the watcher, woken by the stop, stays quiet.
        if self.active.swap(false, Ordering::SeqCst) {
            self.sink.stop();
            tracing::debug!("Audio playback stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.active.load(Ordering::SeqCst) && !self.sink.empty()
    }
}

/// Block on a background thread until the sink drains or is stopped, then
/// fire `on_done` for natural completion only.
fn spawn_completion_watcher(sink: Arc<Sink>, active: Arc<AtomicBool>, on_done: PlaybackDoneCallback) {
    let spawned = std::thread::Builder::new()
        .name("lectern-playback".into())
        .spawn(move || {
            sink.sleep_until_end();

            if !active.swap(false, Ordering::SeqCst) {
                return;
            }

            tracing::debug!("Playback finished naturally");
            on_done();
        });

    if let Err(e) = spawned {
        tracing::warn!(error = %e, "Failed to spawn playback watcher; completion will not be reported");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_device_is_uninitialized() {
        let device = RodioOutputDevice::new();
        assert_eq!(device.status(), DeviceStatus::Uninitialized);
    }

    #[test]
    fn play_before_resume_is_rejected() {
        let mut device = RodioOutputDevice::default();
        let buffer = Arc::new(PlayableAudioBuffer::new(24_000, 1, vec![0.0; 240]));

        let result = device.play(buffer, Box::new(|| {}));

        assert!(matches!(result, Err(OutputError::NotRunning)));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn resume_runs_on_a_single_threaded_runtime() {
        // Succeeds with a sound card, reports Unavailable without one.
        let mut device = RodioOutputDevice::new();
        let result = tokio::time::timeout(Duration::from_secs(10), device.resume())
            .await
            .expect("resume must not stall the runtime");

        match result {
            Ok(()) => assert_eq!(device.status(), DeviceStatus::Running),
            Err(err) => {
                assert!(matches!(err, OutputError::Unavailable(_) | OutputError::Stream(_)));
                assert_eq!(device.status(), DeviceStatus::Uninitialized);
            }
        }
        device.suspend().unwrap();
    }

    #[test]
    fn suspend_without_stream_is_a_no_op() {
        let mut device = RodioOutputDevice::new();
        device.suspend().unwrap();
        assert_eq!(device.status(), DeviceStatus::Uninitialized);
    }
}
