//! Error types for domset

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the domset application
#[derive(Debug, Error)]
pub enum DomsetError {
    #[error("Source directory not found: {0}")]
    SourceDirNotFound(PathBuf),

    #[error("Release directory not found: {0}")]
    ReleaseDirNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DomsetError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DomsetError::SourceDirNotFound(_) | DomsetError::ReleaseDirNotFound(_) => 2,
            DomsetError::Config(_) | DomsetError::Json(_) => 3,
            _ => 1,
        }
    }
}

/// Result type using DomsetError
pub type Result<T> = std::result::Result<T, DomsetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_exit_code() {
        let err = DomsetError::SourceDirNotFound(PathBuf::from("/tmp/missing"));
        assert_eq!(err.exit_code(), 2);

        let err = DomsetError::ReleaseDirNotFound(PathBuf::from("/tmp/missing"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_exit_code() {
        let err = DomsetError::Config("bad policy".to_string());
        assert_eq!(err.exit_code(), 3);

        let err = DomsetError::Json(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_io_exit_code() {
        let err = DomsetError::Io(std::io::Error::other("boom"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_display_includes_path() {
        let err = DomsetError::SourceDirNotFound(PathBuf::from("/data/rules"));
        assert!(err.to_string().contains("/data/rules"));
    }
}
