// file: src/error.rs
// version: 1.0.0
// guid: 3f8a21c6-9d4e-4b72-8a15-c0d97e24f1ab

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, PlayError>;

/// Error types for tempo-play
#[derive(Error, Debug)]
pub enum PlayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Missing prerequisites: {0}")]
    Prerequisites(String),

    #[error("Download error: {0}")]
    Download(String),

    #[error("Audio processing error: {0}")]
    Transform(String),

    #[error("Playback error: {0}")]
    Playback(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Metadata error: {0}")]
    Metadata(#[from] serde_json::Error),
}

impl PlayError {
    /// Create a new invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new file not found error
    pub fn file_not_found(msg: impl Into<String>) -> Self {
        Self::FileNotFound(msg.into())
    }

    /// Create a new download error
    pub fn download(msg: impl Into<String>) -> Self {
        Self::Download(msg.into())
    }

    /// Create a new audio processing error
    pub fn transform(msg: impl Into<String>) -> Self {
        Self::Transform(msg.into())
    }

    /// Create a new playback error
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
