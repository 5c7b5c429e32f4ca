//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: it renders chapters, player snapshots and
//! player events, and never drives the controller.

pub mod player;
pub mod tables;

// Re-export commonly used items
pub use player::{control_label, print_chapter, print_snapshot, render_event};
pub use tables::{print_separator, truncate_string};
