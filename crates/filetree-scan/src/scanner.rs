//! Recursive directory tree scanner.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use filetree_core::{Entry, ScanError, ScanOptions, TreeNode};

use crate::fs::{FileSystem, OsFileSystem};
use crate::report::{ErrorSink, TracingSink};
use crate::yield_point::{ThreadYield, YieldPoint};

/// Recursively populates a [`TreeNode`]'s subtree from the filesystem.
///
/// A failure to enumerate the directory the call was asked to scan is
/// returned to the caller: it signals a structural problem (access rights,
/// missing volume) the caller must react to. Failures while descending into
/// children are reported to the [`ErrorSink`] and traversal continues, so the
/// caller still gets a listing of everything else. A child directory that
/// vanished between being listed and being entered is an expected race and is
/// discarded without logging.
pub struct TreeScanner {
    fs: Arc<dyn FileSystem>,
    sink: Arc<dyn ErrorSink>,
    yielder: Arc<dyn YieldPoint>,
}

impl TreeScanner {
    /// Create a scanner over the OS filesystem, logging via `tracing`.
    pub fn new() -> Self {
        Self::with_collaborators(
            Arc::new(OsFileSystem::new()),
            Arc::new(TracingSink::new()),
            Arc::new(ThreadYield),
        )
    }

    /// Create a scanner with explicit collaborators.
    pub fn with_collaborators(
        fs: Arc<dyn FileSystem>,
        sink: Arc<dyn ErrorSink>,
        yielder: Arc<dyn YieldPoint>,
    ) -> Self {
        Self { fs, sink, yielder }
    }

    /// Rebuild `node`'s subtree from the directory its entry identifies.
    ///
    /// Existing children are discarded first; on success they are replaced by
    /// one child per surviving directory entry, in ascending path order.
    ///
    /// # Errors
    ///
    /// Returns an error when the hook rejects `node` or when `node`'s own
    /// directory cannot be enumerated. Deeper failures do not surface here.
    pub fn scan(&self, node: &mut TreeNode, options: &ScanOptions) -> Result<(), ScanError> {
        self.scan_node(node, options)
    }

    /// Build a fresh tree rooted at `root` and scan it.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::NotADirectory`] when `root` is not a directory,
    /// otherwise the same errors as [`scan`](Self::scan).
    pub fn scan_path(
        &self,
        root: impl Into<PathBuf>,
        options: &ScanOptions,
    ) -> Result<TreeNode, ScanError> {
        let path = root.into();
        if !self.fs.is_directory(&path) {
            return Err(ScanError::NotADirectory { path });
        }
        let symlink = self.fs.is_symlink(&path);
        let mut node = TreeNode::new(Entry::directory(path, symlink));
        self.scan(&mut node, options)?;
        Ok(node)
    }

    fn scan_node(&self, node: &mut TreeNode, options: &ScanOptions) -> Result<(), ScanError> {
        node.clear_children();

        // yield if requested (only applies to recursive scans)
        if options.recursive && options.yield_during_scan {
            self.yielder.yield_now();
        }

        if let Some(hook) = &options.on_before_scan_dir {
            hook(node.entry())?;
        }

        let child_paths = self.fs.children(node.entry().path())?;

        let mut count = 0usize;
        let mut entries: Vec<Entry> = child_paths
            .iter()
            .map(|path| self.convert(path, options.yield_during_scan, &mut count))
            .collect();

        // deterministic child order, independent of enumeration order
        entries.sort_by(|a, b| a.path().cmp(b.path()));

        for entry in entries {
            if let Some(filter) = &options.filter
                && !filter(&entry)
            {
                continue;
            }

            // symlinked directories are listed but never entered
            let descend = options.recursive && entry.is_directory() && !entry.is_symlink();
            let child = node.push_child(entry);
            if descend
                && let Err(error) = self.scan_node(child, options)
                && !error.is_not_found()
            {
                self.sink.report(&error);
            }
        }

        Ok(())
    }

    /// Snapshot one listed path into an [`Entry`].
    fn convert(&self, path: &Path, yield_during_scan: bool, count: &mut usize) -> Entry {
        // yield every 10 entries (defends against pegging the scheduler in
        // directories with a huge number of files)
        if yield_during_scan {
            *count += 1;
            if *count % 10 == 0 {
                self.yielder.yield_now();
            }
        }

        if self.fs.is_directory(path) {
            Entry::directory(path, self.fs.is_symlink(path))
        } else if self.fs.exists(path) {
            Entry::file(
                path,
                self.fs.size(path),
                self.fs.last_write_time(path),
                self.fs.is_symlink(path),
            )
        } else {
            // vanished between listing and metadata read
            Entry::missing(path)
        }
    }
}

impl Default for TreeScanner {
    fn default() -> Self {
        Self::new()
    }
}
