//! Voices command handler.

use anyhow::Result;
use lectern_core::VoiceName;
use strum::IntoEnumIterator;

use crate::bootstrap::CliContext;
use crate::presentation::print_separator;

/// List the narrator voices, marking the one narration starts with.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let default_voice = ctx.playback.default_voice();

    println!("{:<3}{:<10} Character", "", "Voice");
    print_separator(30);
    for voice in VoiceName::iter() {
        let marker = if voice == default_voice { "*" } else { "" };
        println!("{marker:<3}{:<10} {}", voice.as_str(), voice.description());
    }
    println!("\n* selected (change with --voice)");

    Ok(())
}
