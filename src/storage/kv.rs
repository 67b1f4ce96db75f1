//! Key-value stores backing the persistence adapter

use super::StorageError;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// String-keyed, string-valued store
pub trait KeyValueStore {
    /// # Errors
    /// Returns `StorageError` if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    /// Returns `StorageError` if the store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns `StorageError` if the store cannot be modified.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store
///
/// Clones share the same entries, so two games built from clones of one store see each
/// other's saves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<FxHashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Directory-backed store: one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        // Invalid UTF-8 is passed on lossily so it fails to parse like any other garbage
        match fs::read(self.path_for(key)?) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        // Write-then-rename so a crash never leaves a half-written record
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("wordle").unwrap(), None);

        store.set("wordle", "value").unwrap();
        assert_eq!(store.get("wordle").unwrap().as_deref(), Some("value"));

        store.remove("wordle").unwrap();
        assert_eq!(store.get("wordle").unwrap(), None);
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let mut store = MemoryStore::new();
        let other = store.clone();

        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn file_store_creates_directory_on_write() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("nested").join("state");
        let mut store = FileStore::new(&dir);

        assert_eq!(store.get("wordle").unwrap(), None);
        store.set("wordle", "{}").unwrap();

        assert!(dir.join("wordle.json").exists());
        assert_eq!(store.get("wordle").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn file_store_remove_missing_is_ok() {
        let root = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(root.path());
        store.remove("never-written").unwrap();
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let root = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(root.path());

        assert!(matches!(
            store.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(StorageError::InvalidKey(_))));
    }

    #[test]
    fn file_store_reads_invalid_utf8_lossily() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("wordle.json"), [0xff, 0xfe, 0x00, b'{']).unwrap();

        let store = FileStore::new(root.path());
        let content = store.get("wordle").unwrap().unwrap();
        assert!(content.ends_with('{'));
        assert!(content.contains(char::REPLACEMENT_CHARACTER));
    }

    #[test]
    fn file_store_read_failure_is_error() {
        let root = tempfile::tempdir().unwrap();
        // A directory where the record file should be cannot be read
        fs::create_dir_all(root.path().join("wordle.json")).unwrap();

        let store = FileStore::new(root.path());
        assert!(matches!(store.get("wordle"), Err(StorageError::Io(_))));
    }
}
