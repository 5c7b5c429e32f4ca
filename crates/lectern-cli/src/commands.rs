//! Subcommands of the lectern CLI.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List the chapters of the book
    Chapters,

    /// List the narrator voices
    Voices,

    /// Print a chapter and narrate it until it ends
    Read {
        /// Chapter id (see `lectern chapters`)
        chapter: String,
    },

    /// Start an interactive reading session (the default)
    Interactive,
}
