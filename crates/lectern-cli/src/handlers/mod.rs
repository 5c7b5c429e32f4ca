//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`,
//!   `async` when the handler drives playback
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Drive the playback controller
//!   3. Format output for the terminal
//!
//! Playback rules live in `lectern_core`, never here.

pub mod chapters;
pub mod interactive;
pub mod read;
pub mod voices;
