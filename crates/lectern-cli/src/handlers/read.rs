//! Read command handler.
//!
//! Prints one chapter, narrates it and exits when the narration ends.

use anyhow::Result;
use lectern_core::{PlaybackController, PlayerEvent};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{print_chapter, render_event};

/// How a narration run ended.
enum Outcome {
    Finished,
    Failed { kind: &'static str, message: String },
}

/// Execute the read command.
///
/// Ctrl-C stops the narration and exits cleanly. A failed narration exits
/// with an error instead of waiting for the player to reset.
pub async fn execute(ctx: &CliContext, chapter_id: &str) -> Result<()> {
    let (mut controller, mut events) = ctx.controller()?;
    controller
        .select_chapter(chapter_id)
        .map_err(CliError::from)?;
    drain(&mut events);

    print_chapter(controller.current_chapter());
    controller.play().await;

    let outcome = match drain(&mut events) {
        Some(outcome) => outcome,
        None => run_until_done(&mut controller, &mut events).await,
    };

    match outcome {
        Outcome::Finished => Ok(()),
        Outcome::Failed { kind, message } => Err(failure_error(kind, message).into()),
    }
}

async fn run_until_done(
    controller: &mut PlaybackController,
    events: &mut UnboundedReceiver<PlayerEvent>,
) -> Outcome {
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                controller.stop();
                println!("Stopped.");
                return Outcome::Finished;
            }
            alive = controller.process_next() => {
                if !alive {
                    return Outcome::Finished;
                }
            }
        }

        if let Some(outcome) = drain(events) {
            return outcome;
        }
    }
}

/// Render pending events, stopping at the first one that ends the run.
fn drain(events: &mut UnboundedReceiver<PlayerEvent>) -> Option<Outcome> {
    while let Ok(event) = events.try_recv() {
        render_event(&event);
        match event {
            PlayerEvent::PlaybackFinished => return Some(Outcome::Finished),
            PlayerEvent::Failed { kind, message } => {
                return Some(Outcome::Failed { kind, message });
            }
            _ => {}
        }
    }
    None
}

/// Pick the exit category for a failed narration by its kind.
fn failure_error(kind: &str, message: String) -> CliError {
    match kind {
        "config" => CliError::Config(message),
        _ => CliError::Narration(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_core::{NarrationError, SynthesisError};

    #[test]
    fn test_missing_api_key_exits_with_config_code() {
        let err = NarrationError::from(SynthesisError::MissingCredential);
        let cli_err = failure_error(err.kind(), err.to_string());
        assert!(matches!(cli_err, CliError::Config(ref m) if m.contains("API key")));
        assert_eq!(cli_err.exit_code(), 78);
    }

    #[test]
    fn test_other_failures_exit_as_unavailable() {
        let err = NarrationError::from(SynthesisError::Remote("503".to_string()));
        assert_eq!(failure_error(err.kind(), err.to_string()).exit_code(), 69);
        assert_eq!(failure_error("output", "no device".to_string()).exit_code(), 69);
    }

    #[test]
    fn test_drain_stops_at_failure() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        tx.send(PlayerEvent::Failed {
            kind: "config",
            message: "No API key".to_string(),
        })
        .unwrap();
        tx.send(PlayerEvent::PlaybackFinished).unwrap();

        match drain(&mut rx) {
            Some(Outcome::Failed { kind, .. }) => assert_eq!(kind, "config"),
            _ => panic!("expected a failure outcome"),
        }
    }
}
