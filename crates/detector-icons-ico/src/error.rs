//! Error types for detector-icons-ico

use std::path::PathBuf;

/// Errors that can occur while reading an icon directory
#[derive(Debug, thiserror::Error)]
pub enum IcoError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The data is not a readable ICO or CUR file
    #[error("Not a valid ICO/CUR file: {0}")]
    Malformed(#[source] std::io::Error),

    /// The directory holds no frames at all
    #[error("Icon contains no frames")]
    NoFrames,
}
