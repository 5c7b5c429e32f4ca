//! Rendering of chapters, player state and player events.

use lectern_core::{Chapter, PlayerEvent, PlayerSnapshot, PlayerState};

use super::tables::print_separator;

/// What the single play/stop control shows in each state.
pub const fn control_label(state: PlayerState) -> &'static str {
    match state {
        PlayerState::Idle | PlayerState::Paused => "Play",
        PlayerState::Loading => "Generating...",
        PlayerState::Playing => "Stop",
        PlayerState::Error => "Error Loading Audio",
    }
}

/// Print a chapter's heading and full text.
pub fn print_chapter(chapter: &Chapter) {
    let (label, name) = chapter.heading();
    println!();
    if let Some(label) = label {
        println!("{}", label.to_uppercase());
    }
    println!("{name}");
    print_separator(name.chars().count().max(20));
    for paragraph in chapter.content.lines().filter(|l| !l.trim().is_empty()) {
        println!("{}", paragraph.trim());
        println!();
    }
}

pub fn print_snapshot(snapshot: &PlayerSnapshot) {
    println!("Now reading: {} ({})", snapshot.chapter_title, snapshot.chapter_id);
    println!(
        "Voice:       {}{}",
        snapshot.voice,
        if snapshot.can_select_voice { "" } else { " (locked)" }
    );
    println!(
        "Narration:   {}",
        if snapshot.cached { "ready" } else { "not generated yet" }
    );
    if snapshot.output_active {
        println!("Output:      playing");
    }
    println!(
        "Control:     [{}]{}",
        control_label(snapshot.state),
        if snapshot.can_toggle_playback { "" } else { " (unavailable)" }
    );
}

/// One line per event; `None` for events with nothing to show.
pub fn event_line(event: &PlayerEvent) -> Option<String> {
    match event {
        PlayerEvent::StateChanged(PlayerState::Loading) => {
            Some("Generating narration...".to_string())
        }
        PlayerEvent::StateChanged(PlayerState::Error) => {
            Some(format!("[{}]", control_label(PlayerState::Error)))
        }
        PlayerEvent::StateChanged(_) | PlayerEvent::ChapterChanged { .. } => None,
        PlayerEvent::VoiceChanged(voice) => {
            Some(format!("Voice: {voice} ({})", voice.description()))
        }
        PlayerEvent::PlaybackStarted {
            chapter_id,
            voice,
            duration,
        } => Some(format!(
            "Narrating {chapter_id} in {voice} ({:.1}s)",
            duration.as_secs_f64()
        )),
        PlayerEvent::PlaybackFinished => Some("Narration finished.".to_string()),
        PlayerEvent::Failed { message, .. } => Some(format!("Narration failed: {message}")),
    }
}

pub fn render_event(event: &PlayerEvent) {
    if let Some(line) = event_line(event) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_core::VoiceName;
    use std::time::Duration;

    #[test]
    fn test_control_labels() {
        assert_eq!(control_label(PlayerState::Idle), "Play");
        assert_eq!(control_label(PlayerState::Playing), "Stop");
        assert_eq!(control_label(PlayerState::Error), "Error Loading Audio");
    }

    #[test]
    fn test_event_lines() {
        let started = PlayerEvent::PlaybackStarted {
            chapter_id: "ch2".to_string(),
            voice: VoiceName::Puck,
            duration: Duration::from_millis(12_340),
        };
        let line = event_line(&started).unwrap();
        assert_eq!(line, "Narrating ch2 in Puck (12.3s)");

        assert!(event_line(&PlayerEvent::StateChanged(PlayerState::Idle)).is_none());
        assert_eq!(
            event_line(&PlayerEvent::Failed {
                kind: "remote",
                message: "quota".to_string()
            })
            .as_deref(),
            Some("Narration failed: quota")
        );
    }
}
