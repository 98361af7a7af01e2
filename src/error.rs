//! Error type shared by the card file helpers and the interactive console.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading input or touching card/log files.
#[derive(Debug, Error)]
pub enum FlashcardError {
    /// The requested card file does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The card file exists but is not a JSON array of cards.
    #[error("invalid card file: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard input was closed while a line was expected.
    #[error("end of input")]
    EndOfInput,
}

pub type Result<T> = std::result::Result<T, FlashcardError>;
