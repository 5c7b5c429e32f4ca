//! CLI-specific error types and mappings.
//!
//! Maps core and adapter errors to exit codes and user-facing messages.

use lectern_core::{BookError, NarrationError};
use lectern_gemini::GeminiError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error (unknown chapter, locked voice, ...).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The book file is not a valid book.
    #[error("Invalid book: {0}")]
    Book(String),

    /// Narration failed (speech service, decoding or audio output).
    #[error("Narration failed: {0}")]
    Narration(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,
            Self::Book(_) => 65,      // EX_DATAERR
            Self::Narration(_) => 69, // EX_UNAVAILABLE
            Self::Io(_) => 74,        // EX_IOERR
            Self::Config(_) => 78,    // EX_CONFIG
        }
    }
}

impl From<BookError> for CliError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::Io(e) => Self::Io(e.to_string()),
            other => Self::Book(other.to_string()),
        }
    }
}

impl From<NarrationError> for CliError {
    fn from(err: NarrationError) -> Self {
        match err {
            NarrationError::Config(msg) => Self::Config(msg),
            NarrationError::UnknownChapter(_) | NarrationError::VoiceLocked => {
                Self::Arguments(err.to_string())
            }
            other => Self::Narration(other.to_string()),
        }
    }
}

impl From<GeminiError> for CliError {
    fn from(err: GeminiError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Arguments(String::new()).exit_code(), 2);
        assert_eq!(CliError::Config(String::new()).exit_code(), 78);
        assert_eq!(CliError::Narration(String::new()).exit_code(), 69);
    }

    #[test]
    fn test_unknown_chapter_is_an_argument_error() {
        let err = CliError::from(NarrationError::UnknownChapter("ch9".to_string()));
        assert!(matches!(err, CliError::Arguments(ref m) if m.contains("ch9")));
    }

    #[test]
    fn test_missing_credential_is_a_config_error() {
        let err = CliError::from(NarrationError::Config("No API key".to_string()));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_book_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        assert!(matches!(CliError::from(BookError::Io(io)), CliError::Io(_)));
        assert!(matches!(CliError::from(BookError::Empty), CliError::Book(_)));
    }
}
