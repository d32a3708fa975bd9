//! Lossless-full mode: words streamed from a plain-text corpus file
//!
//! Every pass opens the file, reads it in fixed-size chunks and closes it
//! again. A file that cannot be opened, cannot be read or holds no words is
//! not an error: the pass emits [`MISSING_CORPUS_MESSAGE`] instead, and the
//! next pass tries the file again.

use crate::config::StreamConfig;
use crate::error::{EngineError, Result};
use crate::passes::{PassSource, Restarting};
use crate::tokenizer::Words;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Instructions emitted while the corpus file is unavailable
pub const MISSING_CORPUS_MESSAGE: &str =
    "Set $SHAKES_PATH to a local complete_works.txt for lossless-full mode.";

/// Sequential fixed-size reads from one file.
///
/// The handle is released as soon as the end of the file or a read error is
/// reached, or when the iterator is dropped.
#[derive(Debug)]
pub struct FileChunks {
    file: Option<File>,
    path: PathBuf,
    read_bytes: usize,
}

impl FileChunks {
    /// Open `path` for chunked reading
    pub fn open(path: &Path, read_bytes: usize) -> Result<Self> {
        if read_bytes == 0 {
            return Err(EngineError::Config("read_bytes must be positive".to_string()));
        }
        let file = File::open(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            file: Some(file),
            path: path.to_path_buf(),
            read_bytes,
        })
    }
}

impl Iterator for FileChunks {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let file = self.file.as_mut()?;
        let mut chunk = Vec::with_capacity(self.read_bytes);
        match file.take(self.read_bytes as u64).read_to_end(&mut chunk) {
            Ok(0) => {
                self.file = None;
                None
            }
            Ok(_) => Some(Ok(chunk)),
            Err(source) => {
                self.file = None;
                Some(Err(EngineError::Io {
                    path: self.path.clone(),
                    source,
                }))
            }
        }
    }
}

/// Words of one corpus pass
#[derive(Debug)]
pub enum CorpusPass {
    /// Reading the corpus file
    File(Words<FileChunks>),
    /// The file was unavailable or held no words; emitting the instructions
    Missing(std::vec::IntoIter<String>),
}

impl CorpusPass {
    /// Pass emitting the words of [`MISSING_CORPUS_MESSAGE`]
    pub fn instructions() -> Self {
        let words: Vec<String> = MISSING_CORPUS_MESSAGE
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        CorpusPass::Missing(words.into_iter())
    }
}

impl Iterator for CorpusPass {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self {
            CorpusPass::File(words) => words.next(),
            CorpusPass::Missing(words) => words.next(),
        }
    }
}

/// Pass source over a plain-text corpus file
#[derive(Debug, Clone)]
pub struct CorpusSource {
    path: PathBuf,
    read_bytes: usize,
    /// Whether the unavailable file has already been reported at warn level
    reported_missing: bool,
}

impl CorpusSource {
    /// Source over `config.corpus_path`
    pub fn new(config: &StreamConfig) -> Self {
        Self {
            path: config.corpus_path.clone(),
            read_bytes: config.read_bytes,
            reported_missing: false,
        }
    }

    /// The corpus path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn report_unavailable(&mut self, reason: &dyn std::fmt::Display) {
        if self.reported_missing {
            log::debug!("corpus {} still unavailable: {reason}", self.path.display());
        } else {
            log::warn!("corpus {} unavailable: {reason}", self.path.display());
            self.reported_missing = true;
        }
    }
}

impl PassSource for CorpusSource {
    type Pass = CorpusPass;

    fn open_pass(&mut self) -> Result<Self::Pass> {
        match FileChunks::open(&self.path, self.read_bytes) {
            Ok(chunks) => Ok(CorpusPass::File(Words::new(chunks))),
            Err(EngineError::Io { source, .. }) => {
                self.report_unavailable(&source);
                Ok(CorpusPass::instructions())
            }
            Err(err) => Err(err),
        }
    }

    fn pass_finished(&mut self, pass: &Self::Pass, emitted: u64) -> Option<Self::Pass> {
        let CorpusPass::File(words) = pass else {
            return None;
        };
        if emitted > 0 {
            self.reported_missing = false;
            return None;
        }
        match words.error() {
            Some(err) => self.report_unavailable(err),
            None => self.report_unavailable(&"no words in file"),
        }
        Some(CorpusPass::instructions())
    }

    fn name(&self) -> &'static str {
        "corpus"
    }
}

/// Endless word stream over a corpus file
pub type CorpusWords = Restarting<CorpusSource>;

impl CorpusWords {
    /// Stream the file at `config.corpus_path`
    pub fn from_config(config: &StreamConfig) -> Self {
        Restarting::new(CorpusSource::new(config))
    }
}
