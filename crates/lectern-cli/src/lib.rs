//! # lectern-cli
//!
//! Terminal front end for lectern: lists the book, narrates chapters and
//! runs an interactive reading session on top of
//! [`PlaybackController`](lectern_core::PlaybackController).

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tracing_subscriber as _;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
