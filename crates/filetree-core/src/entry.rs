//! Filesystem entry snapshot types.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// What kind of object an [`Entry`] describes.
///
/// Size and modification time live on the `File` variant only, so directory
/// and vanished entries cannot carry stale metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// Directory.
    Directory,
    /// Regular file that existed when its metadata was read.
    File {
        /// Size in bytes.
        size: u64,
        /// Last modification time.
        modified: SystemTime,
    },
    /// Path that vanished between directory listing and metadata read.
    ///
    /// Concurrent filesystem mutation during a scan is expected; the entry
    /// still records that the path was listed.
    Missing,
}

impl EntryKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, EntryKind::File { .. })
    }
}

/// Immutable snapshot of one filesystem object at scan time.
///
/// The absolute path doubles as the entry's identity within its parent node.
/// Whether the object is a symlink is tracked independently of its kind: a
/// symlink to a directory is a `Directory` entry with `symlink` set, which is
/// what the scanner uses to list it without descending into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    path: PathBuf,
    kind: EntryKind,
    symlink: bool,
}

impl Entry {
    /// Create a directory entry.
    pub fn directory(path: impl Into<PathBuf>, symlink: bool) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
            symlink,
        }
    }

    /// Create a file entry with its metadata.
    pub fn file(
        path: impl Into<PathBuf>,
        size: u64,
        modified: SystemTime,
        symlink: bool,
    ) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File { size, modified },
            symlink,
        }
    }

    /// Create an entry for a path that vanished before its metadata was read.
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Missing,
            symlink: false,
        }
    }

    /// Absolute path of the object.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Kind of object this entry describes.
    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        self.kind.is_dir()
    }

    /// Check if the object itself is a symbolic link.
    pub fn is_symlink(&self) -> bool {
        self.symlink
    }

    /// Check if the object still existed when its metadata was read.
    pub fn exists(&self) -> bool {
        !matches!(self.kind, EntryKind::Missing)
    }

    /// Size in bytes, for file entries only.
    pub fn size(&self) -> Option<u64> {
        match self.kind {
            EntryKind::File { size, .. } => Some(size),
            _ => None,
        }
    }

    /// Last modification time, for file entries only.
    pub fn last_write_time(&self) -> Option<SystemTime> {
        match self.kind {
            EntryKind::File { modified, .. } => Some(modified),
            _ => None,
        }
    }
}
