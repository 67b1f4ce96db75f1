//! Binds a key-value store and a key into a [`Persistence`] implementation

use super::{KeyValueStore, Persistence, SavedGame, StorageError};
use log::{debug, warn};

/// One puzzle's record under one key of a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct StorageAdapter<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StorageAdapter<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> Persistence for StorageAdapter<S> {
    fn save(&mut self, record: &SavedGame) -> Result<(), StorageError> {
        let json = serde_json::to_string(record)?;
        self.store.set(&self.key, &json)?;
        debug!(
            "saved '{}' with {} guesses",
            self.key,
            record.submitted_guesses.len()
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<SavedGame>, StorageError> {
        let Some(json) = self.store.get(&self.key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&json) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!("ignoring unparsable saved game under '{}': {e}", self.key);
                Ok(None)
            }
        }
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};

    fn record() -> SavedGame {
        SavedGame {
            secret_answer: "crane".to_string(),
            submitted_guesses: vec!["slate".to_string()],
        }
    }

    #[test]
    fn load_without_record_is_none() {
        let adapter = StorageAdapter::new(MemoryStore::new(), "wordle");
        assert_eq!(adapter.load().unwrap(), None);
    }

    #[test]
    fn save_then_load() {
        let mut adapter = StorageAdapter::new(MemoryStore::new(), "wordle");
        adapter.save(&record()).unwrap();
        assert_eq!(adapter.load().unwrap(), Some(record()));
    }

    #[test]
    fn keys_are_independent() {
        let store = MemoryStore::new();
        let mut first = StorageAdapter::new(store.clone(), "one");
        let second = StorageAdapter::new(store, "two");

        first.save(&record()).unwrap();
        assert_eq!(second.load().unwrap(), None);
    }

    #[test]
    fn unparsable_record_is_none() {
        let mut store = MemoryStore::new();
        store.set("wordle", "{not json").unwrap();
        let adapter = StorageAdapter::new(store, "wordle");
        assert_eq!(adapter.load().unwrap(), None);
    }

    #[test]
    fn clear_removes_record() {
        let mut adapter = StorageAdapter::new(MemoryStore::new(), "wordle");
        adapter.save(&record()).unwrap();
        adapter.clear().unwrap();
        assert_eq!(adapter.load().unwrap(), None);
    }

    #[test]
    fn file_backed_record_is_plain_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut adapter = StorageAdapter::new(FileStore::new(dir.path()), "wordle");
        adapter.save(&record()).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("wordle.json")).unwrap();
        assert!(raw.contains(r#""secretAnswer":"crane""#));
        assert_eq!(adapter.load().unwrap(), Some(record()));
    }
}
