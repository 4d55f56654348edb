//! Per-call bookkeeping for a copy

use std::collections::HashMap;

use crate::value::Value;

/// Identity table and counters for one top-level copy.
///
/// Keys are source allocation addresses. Each entry holds a handle to its
/// source, so a source freed elsewhere mid-copy cannot hand its address
/// to a new allocation while the table lives.
#[derive(Debug, Default)]
pub(crate) struct CopyState {
    copies: HashMap<usize, (Value, Value)>,
    strict: bool,
    copied: usize,
}

impl CopyState {
    pub(crate) fn new(strict: bool) -> Self {
        Self {
            strict,
            ..Default::default()
        }
    }

    /// The duplicate already made for `source`, if any
    pub(crate) fn lookup(&self, source: &Value) -> Option<Value> {
        source
            .heap_addr()
            .and_then(|addr| self.copies.get(&addr))
            .map(|(_, copy)| copy.clone())
    }

    /// Record `copy` as the duplicate of `source`
    pub(crate) fn remember(&mut self, source: &Value, copy: Value) {
        if let Some(addr) = source.heap_addr() {
            self.copies.insert(addr, (source.clone(), copy));
        }
    }

    pub(crate) fn is_strict(&self) -> bool {
        self.strict
    }

    pub(crate) fn count(&mut self) {
        self.copied += 1;
    }

    /// Number of objects allocated so far
    pub(crate) fn copied(&self) -> usize {
        self.copied
    }
}
