//! Logging collaborator for non-fatal scan errors.

use filetree_core::ScanError;

/// Sink for errors the scan survives.
///
/// A failure to enumerate a descendant directory does not abort the scan; it
/// is handed here and traversal continues with the next sibling. Reporting
/// must not fail or block the scanner.
pub trait ErrorSink: Send + Sync {
    /// Record a non-fatal error.
    fn report(&self, error: &ScanError);
}

/// [`ErrorSink`] that forwards to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink.
    pub fn new() -> Self {
        Self
    }
}

impl ErrorSink for TracingSink {
    fn report(&self, error: &ScanError) {
        tracing::warn!(error = %error, "skipping unreadable directory");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_sink_reports_without_panicking() {
        let sink = TracingSink::new();
        sink.report(&ScanError::PermissionDenied {
            path: "/locked".into(),
        });
    }
}
