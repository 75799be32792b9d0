//! Word list sources
//!
//! A source returns the raw text of the list for one word length. Parsing and
//! caching are the cache's job.

use super::{DictionaryError, EMBEDDED_LISTS};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Provider of raw newline-delimited word lists, addressed by length
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Human-readable origin, used in log output
    fn describe(&self) -> String;

    /// Fetch the raw list for words of exactly `length` letters
    async fn fetch(&self, length: usize) -> Result<String, DictionaryError>;
}

/// Lists compiled into the binary from `data/dict/`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

#[async_trait]
impl WordSource for EmbeddedSource {
    fn describe(&self) -> String {
        "embedded".to_string()
    }

    async fn fetch(&self, length: usize) -> Result<String, DictionaryError> {
        EMBEDDED_LISTS
            .iter()
            .find(|&&(l, _)| l == length)
            .map(|&(_, text)| text.to_string())
            .ok_or(DictionaryError::Unavailable(length))
    }
}

/// Lists read from `<root>/<length>.txt`
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the list for `length`
    #[must_use]
    pub fn list_path(&self, length: usize) -> PathBuf {
        self.root.join(format!("{length}.txt"))
    }
}

#[async_trait]
impl WordSource for DirectorySource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn fetch(&self, length: usize) -> Result<String, DictionaryError> {
        let path = self.list_path(length);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(DictionaryError::Unavailable(length))
            }
            Err(source) => Err(DictionaryError::Io {
                path,
                source: Arc::new(source),
            }),
        }
    }
}
