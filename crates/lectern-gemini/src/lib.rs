//! # lectern-gemini
//!
//! Gemini text-to-speech adapter. Implements
//! [`SpeechSynthesizer`](lectern_core::SpeechSynthesizer) against the
//! `generateContent` endpoint with audio as the response modality.
//!
//! ```no_run
//! use lectern_gemini::{DefaultGeminiClient, GeminiConfig};
//!
//! let config = GeminiConfig::new().with_api_key("my-key");
//! let client = DefaultGeminiClient::new(&config)?;
//! # Ok::<(), lectern_gemini::GeminiError>(())
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultGeminiClient is meant to be used through the SpeechSynthesizer
// trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;

// ============================================================================
// Public API
// ============================================================================

pub use client::{DefaultGeminiClient, GeminiClient};
pub use config::GeminiConfig;
pub use error::{GeminiError, GeminiResult};
