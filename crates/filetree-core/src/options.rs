//! Scan configuration types.

use std::fmt;
use std::sync::Arc;

use derive_builder::Builder;

use crate::entry::Entry;
use crate::error::ScanError;

/// Predicate deciding whether an entry is kept.
///
/// Rejected entries are neither stored in the tree nor recursed into.
pub type EntryFilter = Arc<dyn Fn(&Entry) -> bool + Send + Sync>;

/// Hook invoked with a directory's entry before its children are read.
///
/// A failure aborts the scan of that directory (and with it, its subtree).
pub type ScanDirHook = Arc<dyn Fn(&Entry) -> Result<(), ScanError> + Send + Sync>;

/// Configuration for a scan.
#[derive(Clone, Builder)]
#[builder(setter(into))]
pub struct ScanOptions {
    /// Descend into subdirectories.
    #[builder(default = "false")]
    pub recursive: bool,

    /// Cooperatively yield during enumeration so a long scan does not
    /// monopolize a shared execution context.
    #[builder(default = "false")]
    pub yield_during_scan: bool,

    /// Entry filter; entries it rejects are excluded entirely.
    #[builder(default, setter(strip_option))]
    pub filter: Option<EntryFilter>,

    /// Hook run before each directory's children are read.
    #[builder(default, setter(strip_option))]
    pub on_before_scan_dir: Option<ScanDirHook>,
}

impl ScanOptions {
    /// Create a scan options builder.
    pub fn builder() -> ScanOptionsBuilder {
        ScanOptionsBuilder::default()
    }

    /// Non-recursive, non-yielding options with no filter or hook.
    pub fn new() -> Self {
        Self {
            recursive: false,
            yield_during_scan: false,
            filter: None,
            on_before_scan_dir: None,
        }
    }

    /// Options for a plain recursive scan.
    pub fn recursive() -> Self {
        Self {
            recursive: true,
            ..Self::new()
        }
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanOptionsBuilder {
    /// Set the filter from a plain closure.
    pub fn filter_fn<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&Entry) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Some(Arc::new(f)));
        self
    }

    /// Set the before-scan hook from a plain closure.
    pub fn on_before_scan_dir_fn<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&Entry) -> Result<(), ScanError> + Send + Sync + 'static,
    {
        self.on_before_scan_dir = Some(Some(Arc::new(f)));
        self
    }
}

impl fmt::Debug for ScanOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanOptions")
            .field("recursive", &self.recursive)
            .field("yield_during_scan", &self.yield_during_scan)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .field(
                "on_before_scan_dir",
                &self.on_before_scan_dir.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults() {
        let options = ScanOptions::new();
        assert!(!options.recursive);
        assert!(!options.yield_during_scan);
        assert!(options.filter.is_none());
        assert!(options.on_before_scan_dir.is_none());
    }

    #[test]
    fn test_options_builder() {
        let options = ScanOptions::builder()
            .recursive(true)
            .yield_during_scan(true)
            .filter_fn(|entry| !entry.is_symlink())
            .build()
            .unwrap();

        assert!(options.recursive);
        assert!(options.yield_during_scan);
        assert!(options.filter.is_some());
        assert!(options.on_before_scan_dir.is_none());
    }

    #[test]
    fn test_filter_invocation() {
        let options = ScanOptions::builder()
            .filter_fn(|entry| entry.is_directory())
            .build()
            .unwrap();

        let filter = options.filter.unwrap();
        assert!(filter(&Entry::directory("/d", false)));
        assert!(!filter(&Entry::missing("/gone")));
    }
}
