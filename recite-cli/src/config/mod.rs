//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Playback configuration
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Word stream configuration
    #[serde(default)]
    pub stream: StreamSection,
}

/// Playback-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Word source mode
    pub mode: String,

    /// Words per minute
    pub wpm: u32,

    /// Text written after each word
    pub separator: String,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            mode: "demo".to_string(),
            wpm: 60,
            separator: " ".to_string(),
        }
    }
}

/// Word stream configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StreamSection {
    /// Maximum bytes per decoded payload chunk
    pub chunk_bytes: usize,

    /// Bytes per corpus file read
    pub read_bytes: usize,

    /// Corpus file for lossless-full mode
    pub corpus_path: Option<PathBuf>,
}

impl Default for StreamSection {
    fn default() -> Self {
        Self {
            chunk_bytes: 4096,
            read_bytes: 4096,
            corpus_path: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.playback.mode, "demo");
        assert_eq!(config.playback.wpm, 60);
        assert_eq!(config.playback.separator, " ");
        assert_eq!(config.stream.chunk_bytes, 4096);
        assert_eq!(config.stream.corpus_path, None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: CliConfig = toml::from_str("[playback]\nwpm = 200\n").unwrap();
        assert_eq!(config.playback.wpm, 200);
        assert_eq!(config.playback.mode, "demo");
        assert_eq!(config.stream, StreamSection::default());
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("recite.toml");
        fs::write(
            &path,
            r#"
[playback]
mode = "lossless-full"
wpm = 120
separator = "\n"

[stream]
chunk_bytes = 512
read_bytes = 1024
corpus_path = "/srv/texts/complete_works.txt"
"#,
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.playback.mode, "lossless-full");
        assert_eq!(config.playback.separator, "\n");
        assert_eq!(config.stream.read_bytes, 1024);
        assert_eq!(
            config.stream.corpus_path,
            Some(PathBuf::from("/srv/texts/complete_works.txt"))
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/recite.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[playback\nwpm = ").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
