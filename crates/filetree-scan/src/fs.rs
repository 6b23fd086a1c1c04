//! Path and metadata provider seam.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use filetree_core::ScanError;

/// Filesystem queries the scanner depends on.
///
/// The scanner never touches `std::fs` directly; everything goes through this
/// trait so tests can substitute an in-memory filesystem and inject failures.
/// Type queries follow symlinks (a symlink to a directory answers both
/// `is_directory` and `is_symlink`); `children` lists immediate child paths
/// in no particular order.
pub trait FileSystem: Send + Sync {
    /// Check if the path refers to a directory (following symlinks).
    fn is_directory(&self, path: &Path) -> bool;

    /// Check if the path itself is a symbolic link.
    fn is_symlink(&self, path: &Path) -> bool;

    /// Check if the path refers to an existing object (following symlinks).
    fn exists(&self, path: &Path) -> bool;

    /// Size of the object in bytes, 0 when unreadable.
    fn size(&self, path: &Path) -> u64;

    /// Last modification time, `UNIX_EPOCH` when unreadable.
    fn last_write_time(&self, path: &Path) -> SystemTime;

    /// Immediate children of a directory.
    fn children(&self, dir: &Path) -> Result<Vec<PathBuf>, ScanError>;
}

/// [`FileSystem`] backed by the operating system via `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl OsFileSystem {
    /// Create a new OS filesystem provider.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for OsFileSystem {
    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_symlink(&self, path: &Path) -> bool {
        path.symlink_metadata()
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn size(&self, path: &Path) -> u64 {
        path.metadata().map(|m| m.len()).unwrap_or(0)
    }

    fn last_write_time(&self, path: &Path) -> SystemTime {
        path.metadata()
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH)
    }

    fn children(&self, dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let read_dir = std::fs::read_dir(dir).map_err(|e| ScanError::io(dir, e))?;
        let mut children = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| ScanError::io(dir, e))?;
            children.push(entry.path());
        }
        Ok(children)
    }
}
