//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Book catalog (bundled or from `--book`)
//! - Speech synthesizer (via lectern-gemini)
//! - Audio output device (via lectern-audio)
//! - Playback controller (via lectern-core)

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use lectern_audio::RodioOutputDevice;
use lectern_core::{Book, PlaybackConfig, PlaybackController, PlayerEvent, VoiceName};
use lectern_gemini::{DefaultGeminiClient, GeminiConfig};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::error::CliError;
use crate::parser::Cli;

/// The sample book shipped inside the binary.
const BUNDLED_BOOK: &str = include_str!("../assets/book.json");

/// Secondary environment variable consulted for the API key.
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Book file; `None` uses the bundled sample.
    pub book_path: Option<PathBuf>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub voice: Option<VoiceName>,
}

impl CliConfig {
    /// Collect settings from parsed arguments and the environment.
    pub fn from_cli(cli: &Cli) -> Self {
        let api_key = cli
            .api_key
            .clone()
            .or_else(|| std::env::var(FALLBACK_API_KEY_ENV).ok());

        Self {
            book_path: cli.book.clone(),
            api_key,
            model: cli.model.clone(),
            voice: cli.voice,
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    pub book: Book,
    pub playback: PlaybackConfig,
    pub gemini: GeminiConfig,
}

impl CliContext {
    pub const fn book(&self) -> &Book {
        &self.book
    }

    /// Build a playback controller wired to Gemini and the default audio
    /// output.
    ///
    /// The output device is opened on first playback, not here.
    pub fn controller(&self) -> Result<(PlaybackController, UnboundedReceiver<PlayerEvent>)> {
        let synthesizer = DefaultGeminiClient::new(&self.gemini).map_err(CliError::from)?;
        tracing::debug!(endpoint = %synthesizer.endpoint(), "Speech client ready");

        Ok(PlaybackController::new(
            self.book.clone(),
            Arc::new(synthesizer),
            Box::new(RodioOutputDevice::new()),
            self.playback.clone(),
        ))
    }
}

/// Load the book at `path`, or the bundled sample.
pub fn load_book(path: Option<&Path>) -> Result<Book, CliError> {
    let book = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading book");
            Book::from_path(path)?
        }
        None => Book::from_json(BUNDLED_BOOK)?,
    };
    tracing::info!(title = book.title(), chapters = book.len(), "Book loaded");
    Ok(book)
}

/// Bootstrap the CLI context.
///
/// A missing API key is not fatal: it is warned about here and reported as
/// a configuration error on the first narration attempt.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let book = load_book(config.book_path.as_deref())?;

    let mut playback = PlaybackConfig::new();
    if let Some(voice) = config.voice {
        playback = playback.with_default_voice(voice);
    }

    let mut gemini = GeminiConfig::new().with_optional_api_key(config.api_key);
    if let Some(model) = config.model {
        gemini = gemini.with_model(model);
    }

    if !gemini.has_api_key() {
        tracing::warn!(
            "No API key configured; set API_KEY or {FALLBACK_API_KEY_ENV}, or pass --api-key"
        );
    }

    Ok(CliContext {
        book,
        playback,
        gemini,
    })
}
