//! Domain types shared by every lectern crate.

mod audio;
mod book;
mod player;
mod voice;

pub use audio::PlayableAudioBuffer;
pub use book::{Book, BookError, Chapter};
pub use player::{PlayerSnapshot, PlayerState};
pub use voice::{CacheKey, VoiceName};
