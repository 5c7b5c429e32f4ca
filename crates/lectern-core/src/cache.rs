//! Session-lifetime cache of synthesized chapter audio.
//!
//! The cache owns every buffer it stores. Entries are never evicted or
//! expired and nothing is persisted, so a buffer lives until the process
//! exits. The controller is the only writer.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{CacheKey, PlayableAudioBuffer};

#[derive(Debug, Default)]
pub struct AudioCache {
    entries: HashMap<CacheKey, Arc<PlayableAudioBuffer>>,
}

impl AudioCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to a cached buffer, if present.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<PlayableAudioBuffer>> {
        self.entries.get(key).cloned()
    }

    /// Store `buffer` under `key`, replacing any previous entry.
    pub fn put(&mut self, key: CacheKey, buffer: Arc<PlayableAudioBuffer>) {
        if self.entries.insert(key.clone(), buffer).is_some() {
            tracing::debug!(%key, "Replaced cached narration");
        }
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combined playback length of everything cached.
    pub fn total_duration(&self) -> Duration {
        self.entries.values().map(|b| b.duration()).sum()
    }
}
