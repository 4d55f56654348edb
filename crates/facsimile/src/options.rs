//! Duplication options

use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::Duplicator`].
///
/// Options are read-only during a copy; per-call bookkeeping lives
/// elsewhere, so one set of options can serve any number of concurrent
/// copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyOptions {
    /// Maximum nesting depth to duplicate (`None` for unbounded).
    ///
    /// The top-level value is depth 0.
    pub max_depth: Option<usize>,

    /// Map each source object to a single duplicate, so shared
    /// sub-values stay shared and cycles stay cycles.
    pub preserve_shared: bool,

    /// Emit a trace event for every duplicated object
    pub trace: bool,
}

impl CopyOptions {
    /// Defaults: unbounded depth, shared structure preserved, no tracing.
    pub const DEFAULT: Self = Self {
        max_depth: None,
        preserve_shared: true,
        trace: false,
    };

    /// Create options with default settings.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Limit the nesting depth
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Toggle the identity table
    pub const fn with_preserve_shared(mut self, preserve_shared: bool) -> Self {
        self.preserve_shared = preserve_shared;
        self
    }

    /// Toggle per-object trace events
    pub const fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let opts = CopyOptions::new()
            .with_max_depth(4)
            .with_preserve_shared(false)
            .with_trace(true);
        assert_eq!(opts.max_depth, Some(4));
        assert!(!opts.preserve_shared);
        assert!(opts.trace);
        assert_eq!(CopyOptions::default(), CopyOptions::DEFAULT);
    }

    #[test]
    fn test_deserialize_partial() {
        let opts: CopyOptions = serde_json::from_str(r#"{ "max_depth": 8 }"#).unwrap();
        assert_eq!(opts.max_depth, Some(8));
        assert!(opts.preserve_shared);
        assert!(!opts.trace);
    }
}
