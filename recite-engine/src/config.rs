//! Configuration types for word streams

use crate::error::{EngineError, Result};
use recite_codec::DEFAULT_CHUNK_BYTES;
use std::path::PathBuf;

/// Environment variable overriding the corpus path
pub const CORPUS_PATH_ENV: &str = "SHAKES_PATH";

/// Corpus path used when no override is given
pub const DEFAULT_CORPUS_PATH: &str = "/usr/share/dict/shakespeare";

/// Default size of each corpus file read (4KB)
pub const DEFAULT_READ_BYTES: usize = 4096;

/// Stream configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    /// Maximum bytes per chunk from the symbol decoder
    pub chunk_bytes: usize,
    /// Bytes requested per corpus file read
    pub read_bytes: usize,
    /// Plain-text corpus for lossless-full mode
    pub corpus_path: PathBuf,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            chunk_bytes: DEFAULT_CHUNK_BYTES,
            read_bytes: DEFAULT_READ_BYTES,
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
        }
    }
}

impl StreamConfig {
    /// Default configuration with the corpus path taken from `$SHAKES_PATH`
    /// when it is set and non-empty
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = std::env::var_os(CORPUS_PATH_ENV).filter(|p| !p.is_empty()) {
            config.corpus_path = PathBuf::from(path);
        }
        config
    }

    /// Set the corpus path
    pub fn with_corpus_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.corpus_path = path.into();
        self
    }

    /// Set the decoder chunk size
    pub fn with_chunk_bytes(mut self, chunk_bytes: usize) -> Self {
        self.chunk_bytes = chunk_bytes;
        self
    }

    /// Set the corpus read size
    pub fn with_read_bytes(mut self, read_bytes: usize) -> Self {
        self.read_bytes = read_bytes;
        self
    }

    /// Check that both sizes are positive
    pub fn validate(&self) -> Result<()> {
        if self.chunk_bytes == 0 {
            return Err(EngineError::Config(
                "chunk_bytes must be positive".to_string(),
            ));
        }
        if self.read_bytes == 0 {
            return Err(EngineError::Config("read_bytes must be positive".to_string()));
        }
        Ok(())
    }
}
