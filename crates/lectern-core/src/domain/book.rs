//! Chapter catalog: the static, read-only content the reader displays.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One chapter of the book. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl Chapter {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Split a title such as `"Chapter 1: Dreams"` into its label and name.
    ///
    /// Titles without a colon have no label and the whole title is the name.
    pub fn heading(&self) -> (Option<&str>, &str) {
        match self.title.split_once(':') {
            Some((label, name)) => (Some(label.trim()), name.trim()),
            None => (None, self.title.trim()),
        }
    }
}

/// Errors raised while loading or validating a [`Book`].
#[derive(Debug, Error)]
pub enum BookError {
    #[error("Book has no chapters")]
    Empty,

    #[error("Chapter at position {index} has an empty id")]
    EmptyChapterId { index: usize },

    #[error("Duplicate chapter id '{0}'")]
    DuplicateChapter(String),

    #[error("Failed to read book file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid book JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct RawBook {
    title: String,
    chapters: Vec<Chapter>,
}

/// An ordered, validated list of chapters with a display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    title: String,
    chapters: Vec<Chapter>,
}

impl Book {
    /// Build a book, rejecting empty catalogs and blank or duplicate chapter ids.
    pub fn new(title: impl Into<String>, chapters: Vec<Chapter>) -> Result<Self, BookError> {
        if chapters.is_empty() {
            return Err(BookError::Empty);
        }

        let mut seen = HashSet::with_capacity(chapters.len());
        for (index, chapter) in chapters.iter().enumerate() {
            if chapter.id.trim().is_empty() {
                return Err(BookError::EmptyChapterId { index });
            }
            if !seen.insert(chapter.id.as_str()) {
                return Err(BookError::DuplicateChapter(chapter.id.clone()));
            }
        }

        Ok(Self {
            title: title.into(),
            chapters,
        })
    }

    /// Parse a book from JSON of the form `{"title": ..., "chapters": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, BookError> {
        let raw: RawBook = serde_json::from_str(json)?;
        Self::new(raw.title, raw.chapters)
    }

    /// Read and parse a book JSON file.
    pub fn from_path(path: &Path) -> Result<Self, BookError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Always `false`: construction rejects empty books.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn position(&self, chapter_id: &str) -> Option<usize> {
        self.chapters.iter().position(|c| c.id == chapter_id)
    }

    pub fn chapter(&self, chapter_id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == chapter_id)
    }

    pub fn chapter_at(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    pub fn first(&self) -> &Chapter {
        &self.chapters[0]
    }
}
