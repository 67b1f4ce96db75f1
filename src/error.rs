//! Engine error taxonomy
//!
//! Every variant is recoverable: a rejected guess leaves the puzzle untouched, storage
//! failures degrade the session to in-memory play, and malformed saved state is treated as
//! no saved state at all.

use crate::storage::StorageError;
use thiserror::Error;

/// Why a submitted guess was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error("not enough letters ({len} of 5)")]
    Incomplete { len: usize },
    #[error("'{word}' is not in the word list")]
    NotInWordList { word: String },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] GuessRejection),

    #[error("a submission is still settling")]
    SubmissionInFlight,

    #[error("the puzzle is already complete")]
    PuzzleComplete,

    #[error("history can only be restored before any input")]
    RestoreAfterEdit,

    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),

    #[error("malformed saved game: {0}")]
    MalformedPersistedState(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
