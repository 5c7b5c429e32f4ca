//! Interactive reading session.
//!
//! Reads commands from stdin while applying controller completions and
//! rendering player events as they arrive.

use anyhow::Result;
use lectern_core::{PlaybackController, PlayerEvent, VoiceName};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::bootstrap::CliContext;
use crate::presentation::{print_chapter, print_snapshot, render_event};

/// One line typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// The play/stop toggle.
    Play,
    Stop,
    Chapter(String),
    Next,
    Prev,
    Voice(VoiceName),
    /// Print the current chapter again.
    Show,
    Status,
    /// Stop and release the audio device.
    Suspend,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();

        let command = match (word.to_ascii_lowercase().as_str(), arg) {
            ("play" | "p" | "toggle", None) => Self::Play,
            ("stop" | "s", None) => Self::Stop,
            ("chapter" | "ch" | "c", Some(id)) => Self::Chapter(id.to_string()),
            ("chapter" | "ch" | "c", None) => return Err("Usage: chapter <id>".to_string()),
            ("next" | "n", None) => Self::Next,
            ("prev" | "previous", None) => Self::Prev,
            ("voice" | "v", Some(name)) => Self::Voice(name.parse().map_err(|_| {
                format!("Unknown voice '{name}'. Type 'help' to list the voices.")
            })?),
            ("voice" | "v", None) => return Err("Usage: voice <name>".to_string()),
            ("show", None) => Self::Show,
            ("status", None) => Self::Status,
            ("suspend", None) => Self::Suspend,
            ("help" | "?", None) => Self::Help,
            ("quit" | "exit" | "q", None) => Self::Quit,
            _ => return Err(format!("Unknown command '{}'. Type 'help' for commands.", line.trim())),
        };
        Ok(Some(command))
    }
}

const HELP: &str = "\
Commands:
  play            start narration, or stop it while playing
  stop            stop narration
  chapter <id>    open a chapter
  next, prev      open the following / preceding chapter
  voice <name>    pick a narrator (Kore, Puck, Fenrir, Charon, Zephyr)
  show            print the current chapter
  status          show the player state
  suspend         stop and release the audio device
  help            show this list
  quit            leave";

/// Execute the interactive session.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let (mut controller, mut events) = ctx.controller()?;

    println!("{}", ctx.book().title());
    print_chapter(controller.current_chapter());
    println!("{HELP}\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match SessionCommand::parse(&line) {
                    Ok(Some(SessionCommand::Quit)) => break,
                    Ok(Some(command)) => apply(&mut controller, command).await,
                    Ok(None) => {}
                    Err(message) => println!("{message}"),
                }
            }
            alive = controller.process_next() => {
                if !alive {
                    break;
                }
            }
        }

        render_pending(&mut events);
    }

    controller.stop();
    Ok(())
}

async fn apply(controller: &mut PlaybackController, command: SessionCommand) {
    match command {
        SessionCommand::Play => controller.play().await,
        SessionCommand::Stop => controller.stop(),
        SessionCommand::Chapter(id) => open_chapter(controller, &id),
        SessionCommand::Next => step_chapter(controller, 1),
        SessionCommand::Prev => step_chapter(controller, -1),
        SessionCommand::Voice(voice) => {
            if let Err(err) = controller.select_voice(voice) {
                println!("{err}");
            }
        }
        SessionCommand::Show => print_chapter(controller.current_chapter()),
        SessionCommand::Status => print_snapshot(&controller.snapshot()),
        SessionCommand::Suspend => match controller.suspend_output() {
            Ok(()) => println!("Audio device released."),
            Err(err) => println!("{err}"),
        },
        SessionCommand::Help => println!("{HELP}"),
        SessionCommand::Quit => {}
    }
}

fn open_chapter(controller: &mut PlaybackController, id: &str) {
    let before = controller.current_chapter().id.clone();
    match controller.select_chapter(id) {
        Ok(()) if before != id => print_chapter(controller.current_chapter()),
        Ok(()) => {}
        Err(err) => println!("{err}"),
    }
}

fn step_chapter(controller: &mut PlaybackController, step: isize) {
    let book = controller.book();
    let target = book
        .position(&controller.current_chapter().id)
        .and_then(|index| index.checked_add_signed(step))
        .and_then(|index| book.chapter_at(index))
        .map(|chapter| chapter.id.clone());

    match target {
        Some(id) => open_chapter(controller, &id),
        None if step > 0 => println!("Already at the last chapter."),
        None => println!("Already at the first chapter."),
    }
}

fn render_pending(events: &mut UnboundedReceiver<PlayerEvent>) {
    while let Ok(event) = events.try_recv() {
        render_event(&event);
    }
}
