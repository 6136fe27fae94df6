//! Common error types used throughout detector-icons.
//!
//! Covers the failure cases shared by the icon tooling: missing files,
//! malformed input, and I/O failures.

/// Common error type for detector-icons.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required file or entry was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("src/brand/unk.png");
        assert_eq!(err.to_string(), "Not found: src/brand/unk.png");

        let err = Error::invalid_input("not a directory");
        assert_eq!(err.to_string(), "Invalid input: not a directory");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
    }
}
