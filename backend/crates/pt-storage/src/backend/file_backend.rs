use crate::backend::{check_key, check_quota};
use crate::{KeyValueBackend, StorageError, StorageResult};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const VALUE_EXTENSION: &str = "json";

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go through a temporary file and a rename so a crash never leaves a
/// half-written value behind.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
    max_value_bytes: Option<usize>,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            max_value_bytes: None,
        }
    }

    /// Reject values larger than `limit` bytes
    pub fn with_quota(mut self, limit: usize) -> Self {
        self.max_value_bytes = Some(limit);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{VALUE_EXTENSION}"))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        check_key(key)?;
        let path = self.value_path(key);

        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        check_key(key)?;
        check_quota(key, value, self.max_value_bytes)?;

        std::fs::create_dir_all(&self.dir).map_err(|e| StorageError::io(&self.dir, e))?;

        let path = self.value_path(key);
        let staging = self.dir.join(format!(".{key}.{VALUE_EXTENSION}.tmp"));
        std::fs::write(&staging, value).map_err(|e| StorageError::io(&staging, e))?;
        std::fs::rename(&staging, &path).map_err(|e| StorageError::io(&path, e))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        check_key(key)?;
        let path = self.value_path(key);

        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }

    fn clear(&self) -> StorageResult<()> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(StorageError::io(&self.dir, e)),
        };

        for entry in entries {
            let path = entry.map_err(|e| StorageError::io(&self.dir, e))?.path();
            let is_value = path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(VALUE_EXTENSION);

            if is_value {
                std::fs::remove_file(&path).map_err(|e| StorageError::io(&path, e))?;
            }
        }

        Ok(())
    }
}
