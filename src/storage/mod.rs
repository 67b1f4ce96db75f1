//! Persistence of the resumable puzzle subset
//!
//! Only the secret answer and the submitted guesses are stored. The in-progress guess,
//! key status and completion flag are always recomputed by replaying the guesses, so
//! stored derived data can never drift from the evaluation rules.

mod adapter;
mod kv;

pub use adapter::StorageAdapter;
pub use kv::{FileStore, KeyValueStore, MemoryStore};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key used when none is configured
pub const DEFAULT_KEY: &str = "wordle";

/// The persisted record: `{ "secretAnswer": ..., "submittedGuesses": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub secret_answer: String,
    pub submitted_guesses: Vec<String>,
}

/// Storage transport failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

/// Durable home for one puzzle's [`SavedGame`]
///
/// `save` may complete asynchronously; the engine never reads back what it just wrote
/// during a session, it only loads once at start-up.
pub trait Persistence {
    /// Store the record, replacing any previous one
    ///
    /// # Errors
    /// Returns `StorageError` if the record cannot be written.
    fn save(&mut self, record: &SavedGame) -> Result<(), StorageError>;

    /// Fetch the stored record
    ///
    /// Absent or unparsable records are `Ok(None)`.
    ///
    /// # Errors
    /// Returns `StorageError` only when the store itself cannot be read.
    fn load(&self) -> Result<Option<SavedGame>, StorageError>;

    /// Remove the stored record
    ///
    /// # Errors
    /// Returns `StorageError` if the store cannot be modified.
    fn clear(&mut self) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_uses_camel_case_fields() {
        let record = SavedGame {
            secret_answer: "crane".to_string(),
            submitted_guesses: vec!["slate".to_string(), "anger".to_string()],
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"secretAnswer":"crane","submittedGuesses":["slate","anger"]}"#
        );

        let back: SavedGame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn record_missing_field_fails_to_parse() {
        assert!(serde_json::from_str::<SavedGame>(r#"{"secretAnswer":"crane"}"#).is_err());
    }
}
