//! Directory-backed store
//!
//! One file per key. Writes go to a temporary file in the same directory and
//! are renamed into place, so a crash never leaves a half-written record.

use super::{KeyValueStore, StorageError, validate_key};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Records stored as files under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Use `root` as the record directory; it is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StorageError + '_ {
        move |source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let path = self.record_path(key);

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let path = self.record_path(key);

        fs::create_dir_all(&self.root).map_err(Self::io_error(&self.root))?;

        let mut temp = NamedTempFile::new_in(&self.root).map_err(Self::io_error(&self.root))?;
        temp.write_all(value.as_bytes())
            .map_err(Self::io_error(temp.path()))?;
        temp.persist(&path)
            .map_err(|e| StorageError::Io {
                path: path.clone(),
                source: e.error,
            })?;

        Ok(())
    }
}
