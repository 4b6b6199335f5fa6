//! Progress persistence.
//!
//! A store holds at most one `ProgressRecord`. Writes replace the whole
//! record, so repeating a save is harmless and the last write wins.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::record::ProgressRecord;
use crate::core::StoreError;

/// Key the record is stored under.
pub const STORE_KEY: &str = "zoomy-vehicles-state";

/// Durable home for the progress record.
pub trait ProgressStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<ProgressRecord>, StoreError>;

    fn save(&mut self, record: &ProgressRecord) -> Result<(), StoreError>;
}

/// Keeps the record in memory. Useful for tests and for hosts that persist
/// elsewhere.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    record: Option<ProgressRecord>,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store.
    #[must_use]
    pub fn with_record(record: ProgressRecord) -> Self {
        Self {
            record: Some(record),
            saves: 0,
        }
    }

    #[must_use]
    pub fn record(&self) -> Option<&ProgressRecord> {
        self.record.as_ref()
    }

    /// Number of successful saves.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<Option<ProgressRecord>, StoreError> {
        Ok(self.record.clone())
    }

    fn save(&mut self, record: &ProgressRecord) -> Result<(), StoreError> {
        self.record = Some(record.clone());
        self.saves += 1;
        Ok(())
    }
}

/// On-disk encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreFormat {
    /// Human-readable, the layout documented on `ProgressRecord`.
    #[default]
    Json,
    /// Compact bincode.
    Binary,
}

impl StoreFormat {
    fn extension(self) -> &'static str {
        match self {
            StoreFormat::Json => "json",
            StoreFormat::Binary => "bin",
        }
    }

    fn encode(self, record: &ProgressRecord) -> Result<Vec<u8>, StoreError> {
        Ok(match self {
            StoreFormat::Json => serde_json::to_vec_pretty(record)?,
            StoreFormat::Binary => bincode::serialize(record)?,
        })
    }

    fn decode(self, bytes: &[u8]) -> Result<ProgressRecord, StoreError> {
        Ok(match self {
            StoreFormat::Json => serde_json::from_slice(bytes)?,
            StoreFormat::Binary => bincode::deserialize(bytes)?,
        })
    }
}

/// Stores the record in a single file.
///
/// Saves go to a uniquely named temp file in the same directory, synced and
/// then renamed over the target.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    format: StoreFormat,
}

impl FileStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>, format: StoreFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Store named after [`STORE_KEY`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>, format: StoreFormat) -> Self {
        let path = dir
            .as_ref()
            .join(format!("{STORE_KEY}.{}", format.extension()));
        Self::new(path, format)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn format(&self) -> StoreFormat {
        self.format
    }
}

impl ProgressStore for FileStore {
    fn load(&self) -> Result<Option<ProgressRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path)?;
        self.format.decode(&bytes).map(Some)
    }

    fn save(&mut self, record: &ProgressRecord) -> Result<(), StoreError> {
        let bytes = self.format.encode(record)?;
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        // Dropping the temp file on any error below removes it
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|err| StoreError::Io(err.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::{Difficulty, GameMode};

    fn sample() -> ProgressRecord {
        let mut record = ProgressRecord::default();
        record.mode = GameMode::Details;
        record.difficulty = Difficulty::Medium;
        record.stars.raise(GameMode::Colors, Difficulty::Hard, 3);
        record.voice_enabled = false;
        record
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        store.save(&sample()).unwrap();
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
        assert_eq!(store.saves(), 2);
    }

    #[test]
    fn test_file_store_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path(), StoreFormat::Json);
        assert!(store.path().ends_with("zoomy-vehicles-state.json"));
        assert!(store.load().unwrap().is_none());

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_file_store_binary() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path().join("nested"), StoreFormat::Binary);

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
    }

    #[test]
    fn test_file_store_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path(), StoreFormat::Json);

        store.save(&ProgressRecord::default()).unwrap();
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
    }

    #[test]
    fn test_failed_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path(), StoreFormat::Json);
        // A non-empty directory where the file should go cannot be replaced
        fs::create_dir(store.path()).unwrap();
        fs::write(store.path().join("keep"), b"x").unwrap();

        assert!(matches!(store.save(&sample()), Err(StoreError::Io(_))));

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("zoomy-vehicles-state.json")]);
    }

    #[test]
    fn test_formats_share_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut json = FileStore::in_dir(dir.path(), StoreFormat::Json);
        let mut binary = FileStore::in_dir(dir.path(), StoreFormat::Binary);

        json.save(&sample()).unwrap();
        binary.save(&ProgressRecord::default()).unwrap();
        json.save(&sample()).unwrap();

        assert_eq!(json.load().unwrap(), Some(sample()));
        assert_eq!(binary.load().unwrap(), Some(ProgressRecord::default()));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::in_dir(dir.path(), StoreFormat::Json);
        fs::write(store.path(), b"{not json").unwrap();

        assert!(matches!(store.load(), Err(StoreError::Json(_))));
    }
}
