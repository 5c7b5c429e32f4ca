//! Narrator voices and the cache key derived from a (chapter, voice) pair.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Prebuilt narrator voice offered by the speech service.
///
/// The set is closed; the remote API rejects any other name. Parsing is
/// case-insensitive (`"kore"`, `"KORE"` and `"Kore"` are all accepted) and
/// [`Display`](fmt::Display) produces the canonical spelling sent on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum VoiceName {
    #[default]
    Kore,
    Puck,
    Fenrir,
    Charon,
    Zephyr,
}

impl VoiceName {
    /// Canonical name as expected by the speech service.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Short character description shown next to the voice in pickers.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Kore => "Soothing",
            Self::Puck => "Playful",
            Self::Fenrir => "Deep",
            Self::Charon => "Informative",
            Self::Zephyr => "Calm",
        }
    }
}

/// Identifies one synthesis result: a chapter rendered in one voice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    chapter_id: String,
    voice: VoiceName,
}

impl CacheKey {
    /// Separator placed between the chapter id and the voice in the textual form.
    pub const SEPARATOR: char = '-';

    pub fn new(chapter_id: impl Into<String>, voice: VoiceName) -> Self {
        Self {
            chapter_id: chapter_id.into(),
            voice,
        }
    }

    pub fn chapter_id(&self) -> &str {
        &self.chapter_id
    }

    pub const fn voice(&self) -> VoiceName {
        self.voice
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.chapter_id, Self::SEPARATOR, self.voice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn default_voice_is_kore() {
        assert_eq!(VoiceName::default(), VoiceName::Kore);
    }

    #[test]
    fn there_are_five_voices() {
        let names: Vec<&str> = VoiceName::iter().map(VoiceName::as_str).collect();
        assert_eq!(names, ["Kore", "Puck", "Fenrir", "Charon", "Zephyr"]);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(VoiceName::from_str("fenrir").unwrap(), VoiceName::Fenrir);
        assert_eq!(VoiceName::from_str("ZEPHYR").unwrap(), VoiceName::Zephyr);
        assert!(VoiceName::from_str("Aoede").is_err());
    }

    #[test]
    fn cache_key_text_form_joins_chapter_and_voice() {
        let key = CacheKey::new("ch1", VoiceName::Puck);
        assert_eq!(key.to_string(), "ch1-Puck");
        assert_eq!(key.chapter_id(), "ch1");
        assert_eq!(key.voice(), VoiceName::Puck);
    }

    #[test]
    fn cache_keys_differ_by_voice() {
        assert_ne!(
            CacheKey::new("ch1", VoiceName::Kore),
            CacheKey::new("ch1", VoiceName::Charon)
        );
    }
}
