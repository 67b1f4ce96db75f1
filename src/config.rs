//! Runtime configuration
//!
//! Assembled by the binary from command-line flags and passed to every command.

use crate::dictionary::{Dictionary, DictionaryError};
use crate::game::Game;
use crate::storage::{DEFAULT_KEY, FileStore, Persistence, StorageAdapter};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Directory name under the platform data directory
pub const APP_DIR_NAME: &str = "wordle_engine";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Custom word list; `None` uses the embedded lists
    pub wordlist: Option<PathBuf>,
    /// Where saved games live; `None` when no data directory could be found
    pub storage_dir: Option<PathBuf>,
    /// Storage key of the puzzle
    pub key: String,
    /// Keep the session in memory only
    pub no_save: bool,
    /// Fixed RNG seed for secret selection
    pub seed: Option<u64>,
    /// Number of `-v` flags
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlist: None,
            storage_dir: default_storage_dir(),
            key: DEFAULT_KEY.to_string(),
            no_save: false,
            seed: None,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Embedded lists, or the custom list when one was given
    ///
    /// # Errors
    /// Returns an error if the custom list cannot be read or has no words.
    pub fn load_dictionary(&self) -> Result<Dictionary, DictionaryError> {
        match &self.wordlist {
            Some(path) => Dictionary::from_file(path),
            None => Dictionary::embedded(),
        }
    }

    /// Seeded when `--seed` was given, OS entropy otherwise
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// File-backed persistence for the configured key
    ///
    /// `None` for in-memory sessions and when there is no storage directory.
    #[must_use]
    pub fn persistence(&self) -> Option<Box<dyn Persistence>> {
        if self.no_save {
            return None;
        }
        let dir = self.storage_dir.as_ref()?;
        Some(Box::new(StorageAdapter::new(
            FileStore::new(dir),
            self.key.as_str(),
        )))
    }

    /// A new game wired to this configuration's RNG and storage
    #[must_use]
    pub fn new_game<'a>(&self, dictionary: &'a Dictionary) -> Game<'a> {
        Game::with_rng(dictionary, self.persistence(), self.rng())
    }
}

/// `<platform data dir>/wordle_engine`
#[must_use]
pub fn default_storage_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME))
}
