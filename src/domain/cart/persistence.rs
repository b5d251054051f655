use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

// ============================================================================
// Cart Snapshot Storage
// ============================================================================
//
// The storage backend for cart snapshots, analogous to a browser's
// localStorage: a single string value under a fixed key, replaced whole on
// every write. Last write wins; there is no cross-session locking.
//
// ============================================================================

/// Fixed key under which the cart snapshot lives.
pub const CART_STORAGE_KEY: &str = "fiorente-cart";

#[derive(Debug, thiserror::Error)]
pub enum CartStorageError {
    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),
}

/// A place to keep the serialized cart snapshot between sessions.
pub trait CartStorage {
    /// The previously stored snapshot, if any.
    fn load(&self) -> Result<Option<String>, CartStorageError>;

    /// Replace the stored snapshot atomically.
    fn save(&self, snapshot: &str) -> Result<(), CartStorageError>;
}

/// In-memory storage. Clones share the same backing cell, which makes
/// session round-trips easy to exercise.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStorage {
    cell: Arc<Mutex<Option<String>>>,
}

impl MemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with raw contents, e.g. a corrupted snapshot.
    pub fn with_contents(contents: &str) -> Self {
        Self {
            cell: Arc::new(Mutex::new(Some(contents.to_string()))),
        }
    }
}

impl CartStorage for MemoryCartStorage {
    fn load(&self) -> Result<Option<String>, CartStorageError> {
        let cell = self
            .cell
            .lock()
            .map_err(|e| CartStorageError::Read(e.to_string()))?;
        Ok(cell.clone())
    }

    fn save(&self, snapshot: &str) -> Result<(), CartStorageError> {
        let mut cell = self
            .cell
            .lock()
            .map_err(|e| CartStorageError::Write(e.to_string()))?;
        *cell = Some(snapshot.to_string());
        Ok(())
    }
}

/// File-backed storage: `<dir>/fiorente-cart.json`, replaced via a temp
/// file and rename so a crashed write never leaves a torn snapshot behind.
#[derive(Debug, Clone)]
pub struct FileCartStorage {
    dir: PathBuf,
}

impl FileCartStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(format!("{CART_STORAGE_KEY}.json"))
    }
}

impl CartStorage for FileCartStorage {
    fn load(&self) -> Result<Option<String>, CartStorageError> {
        match fs::read_to_string(self.path()) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CartStorageError::Read(e.to_string())),
        }
    }

    fn save(&self, snapshot: &str) -> Result<(), CartStorageError> {
        let path = self.path();
        let tmp = path.with_extension("json.tmp");

        let write = |tmp: &PathBuf| -> std::io::Result<()> {
            let mut file = fs::File::create(tmp)?;
            file.write_all(snapshot.as_bytes())?;
            file.sync_all()?;
            fs::rename(tmp, &path)
        };

        write(&tmp).map_err(|e| CartStorageError::Write(e.to_string()))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryCartStorage::new();
        assert!(storage.load().unwrap().is_none());

        storage.save("[1,2,3]").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_memory_storage_clones_share_contents() {
        let storage = MemoryCartStorage::new();
        let other = storage.clone();

        storage.save("snapshot").unwrap();
        assert_eq!(other.load().unwrap().as_deref(), Some("snapshot"));
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileCartStorage::new(dir.path());
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_storage_replaces_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileCartStorage::new(dir.path());

        storage.save("first").unwrap();
        storage.save("second").unwrap();

        assert_eq!(storage.load().unwrap().as_deref(), Some("second"));
        // No temp file is left behind after a successful write.
        assert!(!dir.path().join("fiorente-cart.json.tmp").exists());
    }
}
