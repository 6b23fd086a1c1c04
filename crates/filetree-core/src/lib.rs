//! Core types for filetree.
//!
//! This crate provides the data structures shared by the filetree
//! ecosystem: filesystem entries, the owned scan tree, scan options, and
//! error types.

mod entry;
mod error;
mod node;
mod options;

pub use entry::{Entry, EntryKind};
pub use error::ScanError;
pub use node::{TreeNode, Walk};
pub use options::{EntryFilter, ScanDirHook, ScanOptions, ScanOptionsBuilder};
