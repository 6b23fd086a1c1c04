//! Recursive directory tree scanner for filetree.
//!
//! This crate builds an in-memory [`TreeNode`] tree mirroring a directory's
//! structure, one [`Entry`] per file and subdirectory. Traversal is
//! synchronous and single-threaded; long scans stay polite through
//! cooperative [`YieldPoint`] suspensions.
//!
//! # Failure policy
//!
//! Enumeration failures at the scanned root are fatal and returned to the
//! caller. Failures deeper in the hierarchy are reported to the [`ErrorSink`]
//! and the scan continues, except for directories that vanished mid-scan,
//! which are skipped silently.
//!
//! # Example
//!
//! ```rust,no_run
//! use filetree_scan::{ScanOptions, TreeScanner};
//!
//! let scanner = TreeScanner::new();
//! let options = ScanOptions::builder()
//!     .recursive(true)
//!     .filter_fn(|entry| {
//!         entry
//!             .path()
//!             .file_name()
//!             .is_none_or(|name| name != ".git")
//!     })
//!     .build()
//!     .unwrap();
//!
//! let tree = scanner.scan_path("/path/to/scan", &options).unwrap();
//! println!("{} entries", tree.descendant_count());
//! ```

mod fs;
mod report;
mod scanner;
mod yield_point;

pub use fs::{FileSystem, OsFileSystem};
pub use report::{ErrorSink, TracingSink};
pub use scanner::TreeScanner;
pub use yield_point::{NeverYield, ThreadYield, YieldPoint};

// Re-export core types for convenience
pub use filetree_core::{Entry, EntryKind, ScanError, ScanOptions, TreeNode};
