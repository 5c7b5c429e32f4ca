//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use lectern_core::VoiceName;

use crate::commands::Commands;

/// Command-line interface for the lectern book reader.
///
/// Global options configure the book, the narrator and the speech service;
/// without a subcommand an interactive session starts.
#[derive(Parser)]
#[command(name = "lectern")]
#[command(about = "Read books in the terminal with on-demand narration")]
#[command(version)]
pub struct Cli {
    /// API key for the speech service (falls back to GEMINI_API_KEY)
    #[arg(long = "api-key", env = "API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Book to open, as a JSON file (defaults to the bundled sample)
    #[arg(long, global = true, value_name = "PATH")]
    pub book: Option<PathBuf>,

    /// Narrator voice (Kore, Puck, Fenrir, Charon, Zephyr)
    #[arg(long, global = true)]
    pub voice: Option<VoiceName>,

    /// Speech model to request
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
