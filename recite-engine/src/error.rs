//! Engine error types

use recite_codec::CodecError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while producing words
#[derive(Error, Debug)]
pub enum EngineError {
    /// Symbol codec error
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// The xz stream was corrupt, truncated or unsupported
    #[error("decompression failed: {0}")]
    Decompress(#[from] xz2::stream::Error),

    /// liblzma accepted no input and produced no output while decoding
    #[error("xz stream made no progress")]
    DecompressStalled,

    /// liblzma accepted no input and produced no output while encoding
    #[error("xz encoder made no progress")]
    CompressStalled,

    /// I/O failure on a corpus file
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// The file being read
        path: PathBuf,
        /// The underlying error
        source: std::io::Error,
    },

    /// Invalid stream configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_conversion() {
        let error: EngineError = CodecError::ZeroChunkSize.into();
        assert!(matches!(error, EngineError::Codec(_)));
        assert_eq!(
            error.to_string(),
            "codec error: chunk size must be at least one byte"
        );
    }

    #[test]
    fn test_io_error_display() {
        let error = EngineError::Io {
            path: PathBuf::from("/tmp/corpus.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.to_string(), "I/O error on \"/tmp/corpus.txt\": denied");
    }

    #[test]
    fn test_config_error_display() {
        let error = EngineError::Config("chunk_bytes must be positive".to_string());
        assert_eq!(
            error.to_string(),
            "invalid configuration: chunk_bytes must be positive"
        );
    }

    #[test]
    fn test_stall_errors_name_their_direction() {
        assert_eq!(
            EngineError::DecompressStalled.to_string(),
            "xz stream made no progress"
        );
        assert_eq!(
            EngineError::CompressStalled.to_string(),
            "xz encoder made no progress"
        );
    }
}
