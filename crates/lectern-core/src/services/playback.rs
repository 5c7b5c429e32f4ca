//! Narration playback controller.
//!
//! The controller is a state machine that owns the player state, the audio
//! cache, the output device and at most one active playback handle:
//!
//! ```text
//!   Idle ──play (miss)──► Loading ──ok──► Playing ──end / play / stop──► Idle
//!    │                       │               ▲
//!    └──play (cache hit)─────┼───────────────┘
//!                            └──fail──► Error ──(reset delay)──► Idle
//! ```
//!
//! Selecting another chapter forces `Idle` from any state.
//!
//! All mutation happens on the caller's task. Synthesis runs in a spawned
//! task and reports back through [`ControllerEvent`]s, as do playback
//! completion and the error reset timer; feed them in with
//! [`PlaybackController::process_next`] or [`PlaybackController::handle_event`].

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::cache::AudioCache;
use crate::codec::{pcm, transport};
use crate::domain::{
    Book, CacheKey, Chapter, PlayableAudioBuffer, PlayerSnapshot, PlayerState, VoiceName,
};
use crate::error::NarrationError;
use crate::events::{ControllerEvent, PlaybackId, PlayerEvent};
use crate::ports::{
    AudioOutputDevice, DeviceStatus, PlaybackDoneCallback, PlaybackHandle, SpeechSynthesizer,
};
use crate::settings::PlaybackConfig;

/// The one live playback session.
struct ActivePlayback {
    id: PlaybackId,
    handle: Box<dyn PlaybackHandle>,
}

/// Drives narration of the selected chapter.
///
/// Emits [`PlayerEvent`]s via a channel for the presentation layer to consume.
pub struct PlaybackController {
    /// Current state.
    state: PlayerState,

    /// Chapter catalog.
    book: Book,

    /// Index of the selected chapter in `book`.
    chapter_index: usize,

    /// Selected narrator voice.
    voice: VoiceName,

    /// Synthesized audio for this session.
    cache: AudioCache,

    synthesizer: Arc<dyn SpeechSynthesizer>,

    device: Box<dyn AudioOutputDevice>,

    /// At most one playback handle exists at any time.
    active: Option<ActivePlayback>,

    /// The request the player is waiting on while `Loading`.
    pending: Option<CacheKey>,

    /// Keys with a synthesis call currently running.
    in_flight: HashSet<CacheKey>,

    playback_seq: u64,

    /// Bumped on every failure so stale reset timers can be ignored.
    error_epoch: u64,

    config: PlaybackConfig,

    /// Event sender channel.
    event_tx: mpsc::UnboundedSender<PlayerEvent>,

    inbox_tx: mpsc::UnboundedSender<ControllerEvent>,
    inbox_rx: mpsc::UnboundedReceiver<ControllerEvent>,
}

impl PlaybackController {
    /// Create a controller positioned on the book's first chapter.
    ///
    /// Returns the controller and a receiver for [`PlayerEvent`]s.
    pub fn new(
        book: Book,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        device: Box<dyn AudioOutputDevice>,
        config: PlaybackConfig,
    ) -> (Self, mpsc::UnboundedReceiver<PlayerEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let controller = Self {
            state: PlayerState::Idle,
            book,
            chapter_index: 0,
            voice: config.default_voice(),
            cache: AudioCache::new(),
            synthesizer,
            device,
            active: None,
            pending: None,
            in_flight: HashSet::new(),
            playback_seq: 0,
            error_epoch: 0,
            config,
            event_tx,
            inbox_tx,
            inbox_rx,
        };

        (controller, event_rx)
    }

    // ── Queries ────────────────────────────────────────────────────

    pub const fn state(&self) -> PlayerState {
        self.state
    }

    pub const fn book(&self) -> &Book {
        &self.book
    }

    pub fn current_chapter(&self) -> &Chapter {
        &self.book.chapters()[self.chapter_index]
    }

    pub const fn voice(&self) -> VoiceName {
        self.voice
    }

    pub const fn cache(&self) -> &AudioCache {
        &self.cache
    }

    pub fn device_status(&self) -> DeviceStatus {
        self.device.status()
    }

    /// Whether a playback handle is currently held.
    pub const fn has_active_playback(&self) -> bool {
        self.active.is_some()
    }

    /// Cache key for the selected chapter and voice.
    pub fn current_key(&self) -> CacheKey {
        CacheKey::new(self.current_chapter().id.clone(), self.voice)
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        let chapter = self.current_chapter();
        PlayerSnapshot {
            state: self.state,
            chapter_id: chapter.id.clone(),
            chapter_title: chapter.title.clone(),
            voice: self.voice,
            cached: self.cache.contains(&self.current_key()),
            can_toggle_playback: self.state.can_toggle_playback(),
            can_select_voice: self.state.can_select_voice(),
            output_active: self
                .active
                .as_ref()
                .is_some_and(|active| active.handle.is_running()),
        }
    }

    // ── Commands ───────────────────────────────────────────────────

    /// The play/stop toggle.
    ///
    /// Stops when playing. Otherwise plays cached audio for the current
    /// chapter and voice, or requests synthesis and enters `Loading`.
    /// Ignored while `Loading` or `Error`, where the control is unavailable.
    pub async fn play(&mut self) {
        match self.state {
            PlayerState::Playing => {
                self.stop();
                return;
            }
            PlayerState::Loading => {
                tracing::debug!("Play ignored while narration is loading");
                return;
            }
            PlayerState::Error => {
                tracing::debug!("Play ignored while the error is displayed");
                return;
            }
            PlayerState::Idle | PlayerState::Paused => {}
        }

        let key = self.current_key();
        if let Some(buffer) = self.cache.get(&key) {
            tracing::debug!(%key, "Narration cache hit");
            self.start_playback(&key, buffer).await;
            return;
        }

        tracing::info!(%key, "Requesting narration");
        self.pending = Some(key.clone());
        self.set_state(PlayerState::Loading);

        if self.in_flight.insert(key.clone()) {
            self.spawn_synthesis(key);
        } else {
            tracing::debug!(%key, "Waiting on synthesis already in flight");
        }
    }

    /// Halt output and return to `Idle`.
    ///
    /// Idempotent. A pending synthesis keeps running; its result is cached
    /// but not played.
    pub fn stop(&mut self) {
        self.release_active();
        if let Some(key) = self.pending.take() {
            tracing::debug!(%key, "Abandoned pending narration");
        }
        self.set_state(PlayerState::Idle);
    }

    /// Select another chapter, force-stopping any narration first.
    pub fn select_chapter(&mut self, chapter_id: &str) -> Result<(), NarrationError> {
        let index = self
            .book
            .position(chapter_id)
            .ok_or_else(|| NarrationError::UnknownChapter(chapter_id.to_string()))?;

        if index == self.chapter_index {
            return Ok(());
        }

        self.stop();
        self.chapter_index = index;

        tracing::info!(chapter = chapter_id, "Chapter selected");
        self.emit(PlayerEvent::ChapterChanged {
            chapter_id: chapter_id.to_string(),
        });
        Ok(())
    }

    /// Change the narrator voice. Refused while loading or playing.
    pub fn select_voice(&mut self, voice: VoiceName) -> Result<(), NarrationError> {
        if !self.state.can_select_voice() {
            return Err(NarrationError::VoiceLocked);
        }
        if voice == self.voice {
            return Ok(());
        }

        tracing::info!(old = %self.voice, new = %voice, "Voice selected");
        self.voice = voice;
        self.emit(PlayerEvent::VoiceChanged(voice));
        Ok(())
    }

    /// Stop narration and release the output device.
    pub fn suspend_output(&mut self) -> Result<(), NarrationError> {
        if self.state == PlayerState::Playing {
            self.stop();
        }
        self.device.suspend()?;
        tracing::debug!("Audio output suspended");
        Ok(())
    }

    // ── Event pump ─────────────────────────────────────────────────

    /// Wait for the next completion addressed to the controller.
    pub async fn next_event(&mut self) -> Option<ControllerEvent> {
        self.inbox_rx.recv().await
    }

    /// Wait for the next completion and apply it.
    pub async fn process_next(&mut self) -> bool {
        match self.next_event().await {
            Some(event) => {
                self.handle_event(event).await;
                true
            }
            None => false,
        }
    }

    pub async fn handle_event(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::SynthesisFinished { key, outcome } => {
                self.on_synthesis_finished(key, outcome).await;
            }
            ControllerEvent::PlaybackEnded { playback } => self.on_playback_ended(playback),
            ControllerEvent::ErrorResetElapsed { epoch } => self.on_error_reset(epoch),
        }
    }

    // ── Transitions ────────────────────────────────────────────────

    async fn on_synthesis_finished(
        &mut self,
        key: CacheKey,
        outcome: Result<PlayableAudioBuffer, NarrationError>,
    ) {
        self.in_flight.remove(&key);

        // Only the request the user is still waiting on may start audio.
        let still_wanted =
            self.state == PlayerState::Loading && self.pending.as_ref() == Some(&key);

        match outcome {
            Ok(buffer) => {
                let buffer = Arc::new(buffer);
                tracing::info!(%key, duration = ?buffer.duration(), "Narration synthesized");
                self.cache.put(key.clone(), Arc::clone(&buffer));

                if still_wanted {
                    self.pending = None;
                    self.start_playback(&key, buffer).await;
                } else {
                    tracing::debug!(%key, "Narration no longer requested; cached only");
                }
            }
            Err(err) => {
                if still_wanted {
                    self.pending = None;
                    self.fail(&err);
                } else {
                    tracing::warn!(
                        %key,
                        kind = err.kind(),
                        error = %err,
                        "Abandoned narration request failed"
                    );
                }
            }
        }
    }

    fn on_playback_ended(&mut self, playback: PlaybackId) {
        let is_active = self.active.as_ref().is_some_and(|a| a.id == playback);
        if !is_active {
            tracing::debug!(playback = playback.0, "Ignoring completion of stale playback");
            return;
        }

        self.active = None;
        tracing::debug!(playback = playback.0, "Playback finished");
        self.emit(PlayerEvent::PlaybackFinished);
        self.set_state(PlayerState::Idle);
    }

    fn on_error_reset(&mut self, epoch: u64) {
        if self.state == PlayerState::Error && epoch == self.error_epoch {
            self.set_state(PlayerState::Idle);
        }
    }

    async fn start_playback(&mut self, key: &CacheKey, buffer: Arc<PlayableAudioBuffer>) {
        if let Err(err) = self.try_start_playback(key, buffer).await {
            self.release_active();
            self.fail(&err);
        }
    }

    async fn try_start_playback(
        &mut self,
        key: &CacheKey,
        buffer: Arc<PlayableAudioBuffer>,
    ) -> Result<(), NarrationError> {
        let status = self.device.status();
        if status != DeviceStatus::Running {
            tracing::debug!(?status, "Resuming audio output");
            self.device.resume().await?;
        }

        self.release_active();

        self.playback_seq += 1;
        let id = PlaybackId(self.playback_seq);
        let inbox = self.inbox_tx.clone();
        let on_done: PlaybackDoneCallback = Box::new(move || {
            let _ = inbox.send(ControllerEvent::PlaybackEnded { playback: id });
        });

        let duration = buffer.duration();
        let handle = self.device.play(buffer, on_done)?;
        self.active = Some(ActivePlayback { id, handle });

        tracing::info!(%key, playback = id.0, ?duration, "Narration playing");
        self.set_state(PlayerState::Playing);
        self.emit(PlayerEvent::PlaybackStarted {
            chapter_id: key.chapter_id().to_string(),
            voice: key.voice(),
            duration,
        });
        Ok(())
    }

    fn spawn_synthesis(&self, key: CacheKey) {
        let text = self.current_chapter().content.clone();
        let synthesizer = Arc::clone(&self.synthesizer);
        let inbox = self.inbox_tx.clone();
        let sample_rate = self.config.sample_rate();

        tokio::spawn(async move {
            let outcome =
                synthesize_buffer(synthesizer.as_ref(), &text, key.voice(), sample_rate).await;
            let _ = inbox.send(ControllerEvent::SynthesisFinished { key, outcome });
        });
    }

    /// Enter `Error` and schedule the automatic return to `Idle`.
    fn fail(&mut self, err: &NarrationError) {
        tracing::error!(
            kind = err.kind(),
            error = %err,
            chapter = self.current_chapter().id.as_str(),
            "Narration failed"
        );
        self.emit(PlayerEvent::Failed {
            kind: err.kind(),
            message: err.to_string(),
        });
        self.set_state(PlayerState::Error);

        self.error_epoch += 1;
        let epoch = self.error_epoch;
        let delay = self.config.error_reset_delay();
        let inbox = self.inbox_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = inbox.send(ControllerEvent::ErrorResetElapsed { epoch });
        });
    }

    fn release_active(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.handle.stop();
            tracing::debug!(playback = active.id.0, "Playback handle released");
        }
    }

    // ── Internal helpers ───────────────────────────────────────────

    /// Transition to a new state and emit a state-change event.
    fn set_state(&mut self, new_state: PlayerState) {
        if self.state != new_state {
            tracing::debug!(old = ?self.state, new = ?new_state, "Player state transition");
            self.state = new_state;
            self.emit(PlayerEvent::StateChanged(new_state));
        }
    }

    /// Emit a player event. A dropped receiver is logged and ignored.
    fn emit(&self, event: PlayerEvent) {
        if self.event_tx.send(event).is_err() {
            tracing::warn!("Player event receiver dropped");
        }
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.release_active();
    }
}

/// Run one synthesis request through decoding and PCM conversion.
///
/// A missing or empty payload is reported as [`NarrationError::EmptyResult`].
/// Nothing is converted unless decoding fully succeeds.
pub async fn synthesize_buffer(
    synthesizer: &dyn SpeechSynthesizer,
    text: &str,
    voice: VoiceName,
    sample_rate: u32,
) -> Result<PlayableAudioBuffer, NarrationError> {
    let payload = synthesizer
        .synthesize(text, voice)
        .await?
        .filter(|payload| !payload.is_empty())
        .ok_or(NarrationError::EmptyResult)?;

    let bytes = transport::decode(&payload)?;
    Ok(pcm::to_buffer(&bytes, sample_rate))
}
