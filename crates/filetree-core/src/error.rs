//! Error types for scanning operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Scan root is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A before-scan hook rejected the directory.
    #[error("Hook rejected {path}: {message}")]
    Hook { path: PathBuf, message: String },

    /// Other error.
    #[error("{message}")]
    Other { message: String },
}

impl ScanError {
    /// Create an I/O error with path context, classifying well-known kinds.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create a hook-failure error.
    pub fn hook(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Hook {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this error means the underlying path no longer exists.
    ///
    /// A directory vanishing between being listed and being entered is a
    /// benign race with concurrent filesystem mutation; the scanner discards
    /// such failures without logging them. This covers ENOENT on POSIX and
    /// ERROR_FILE_NOT_FOUND / ERROR_PATH_NOT_FOUND on Windows, both of which
    /// std maps to `io::ErrorKind::NotFound`.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
