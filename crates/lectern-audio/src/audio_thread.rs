//! Dedicated audio output thread, isolating the `!Send` output stream from
//! the async runtime.
//!
//! `rodio::OutputStream` is `!Send` on some platforms. Rather than using
//! `unsafe impl Send` on the device, the stream is opened on, owned by and
//! dropped on a single OS thread. [`AudioThreadHandle`] is the `Send` proxy
//! that routes sink creation through an [`AudioCommand`] channel.
//!
//! Dropping the handle shuts the thread down and releases the device.

use std::sync::{Arc, mpsc};
use std::thread;

use lectern_core::OutputError;
use rodio::{OutputStream, Sink};

use crate::source::BufferSource;

const THREAD_NAME: &str = "lectern-audio";

// ── Commands ───────────────────────────────────────────────────────

/// A command sent from the device to the audio thread.
enum AudioCommand {
    /// Create a sink playing `source` and hand it back.
    Play {
        source: BufferSource,
        reply: mpsc::Sender<Result<Arc<Sink>, OutputError>>,
    },

    /// Release the output stream and exit.
    Shutdown,
}

// ── Handle (Send proxy) ────────────────────────────────────────────

/// `Send` handle to the dedicated audio output thread.
///
/// Request–reply calls block the caller until the thread answers; that is
/// a local channel round trip plus sink creation.
pub struct AudioThreadHandle {
    cmd_tx: mpsc::Sender<AudioCommand>,
    thread: Option<thread::JoinHandle<()>>,
}

impl AudioThreadHandle {
    /// Spawn the audio thread and open the default output stream on it.
    ///
    /// Failure to open the stream is reported back through a one-shot init
    /// channel and the thread exits.
    pub fn spawn() -> Result<Self, OutputError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<AudioCommand>();
        let (init_tx, init_rx) = mpsc::channel::<Result<(), OutputError>>();

        let thread = thread::Builder::new()
            .name(THREAD_NAME.into())
            .spawn(move || Self::run(&cmd_rx, &init_tx))
            .map_err(|e| OutputError::Unavailable(format!("failed to spawn audio thread: {e}")))?;

        init_rx.recv().map_err(|_| thread_died())??;

        Ok(Self {
            cmd_tx,
            thread: Some(thread),
        })
    }

    /// Start a new sink playing `source`.
    pub fn play(&self, source: BufferSource) -> Result<Arc<Sink>, OutputError> {
        let (reply, rx) = mpsc::channel();
        self.cmd_tx
            .send(AudioCommand::Play { source, reply })
            .map_err(|_| thread_died())?;
        rx.recv().map_err(|_| thread_died())?
    }

    // ── Audio thread event loop ────────────────────────────────────

    /// Body of the audio thread. Owns the `OutputStream` for its entire
    /// lifetime.
    fn run(cmd_rx: &mpsc::Receiver<AudioCommand>, init_tx: &mpsc::Sender<Result<(), OutputError>>) {
        let (_stream, stream_handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(e) => {
                let _ = init_tx.send(Err(OutputError::Unavailable(e.to_string())));
                return;
            }
        };

        tracing::info!("Audio output opened on default device");
        if init_tx.send(Ok(())).is_err() {
            return;
        }

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                AudioCommand::Play { source, reply } => {
                    let result = Sink::try_new(&stream_handle)
                        .map(|sink| {
                            sink.append(source);
                            Arc::new(sink)
                        })
                        .map_err(|e| OutputError::Stream(e.to_string()));
                    let _ = reply.send(result);
                }
                AudioCommand::Shutdown => break,
            }
        }

        tracing::debug!("Audio thread shutting down");
    }
}

fn thread_died() -> OutputError {
    OutputError::Stream("audio thread exited unexpectedly".to_string())
}

impl Drop for AudioThreadHandle {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(AudioCommand::Shutdown);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}
