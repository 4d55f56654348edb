//! Shallow and deep duplication of values
//!
//! A copy classifies the value, builds a seed of the same kind, and
//! populates it. Primitives and functions are returned as they are.
//! Deep copies recurse into every child and keep an identity table so
//! each source object is duplicated once: shared sub-values stay shared
//! and cycles in the source become cycles in the copy.

mod populate;
mod seed;
mod state;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{FacsimileError, Result};
use crate::kind::classify;
use crate::options::CopyOptions;
use crate::value::Value;

use state::CopyState;

/// How far a copy reaches into the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Depth {
    /// New top-level container; children are the same references
    Shallow,
    /// Every reachable object is duplicated
    Deep,
}

/// The duplication engine.
///
/// A `Duplicator` holds only its options, so a single instance can be
/// shared freely (see [`crate::deep_copy`]).
#[derive(Debug, Clone, Default)]
pub struct Duplicator {
    options: CopyOptions,
}

impl Duplicator {
    /// Create a duplicator with the given options
    pub const fn new(options: CopyOptions) -> Self {
        Self { options }
    }

    /// The options in effect
    pub fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Duplicate `value`. Never fails.
    ///
    /// When a depth limit is configured, objects below the limit are
    /// shared with the source instead of copied.
    pub fn duplicate(&self, value: &Value, depth: Depth) -> Value {
        let mut state = CopyState::new(false);
        match self.copy(value, depth, 0, &mut state) {
            Ok(copy) => {
                self.report(value, depth, &state);
                copy
            }
            // a lenient copy has no failure path of its own
            Err(err) => {
                warn!(%err, kind = classify(value).tag(), "copy failed, sharing value");
                value.clone()
            }
        }
    }

    /// Duplicate `value`, failing with [`FacsimileError::DepthExceeded`]
    /// instead of sharing objects below the depth limit.
    pub fn try_duplicate(&self, value: &Value, depth: Depth) -> Result<Value> {
        let mut state = CopyState::new(true);
        let copy = self.copy(value, depth, 0, &mut state)?;
        self.report(value, depth, &state);
        Ok(copy)
    }

    fn report(&self, value: &Value, depth: Depth, state: &CopyState) {
        let kind = classify(value);
        if kind.is_object_like() {
            debug!(
                mode = ?depth,
                kind = kind.tag(),
                copied = state.copied(),
                "duplicated value"
            );
        }
    }

    /// Copy one value at nesting `level`.
    pub(crate) fn copy(
        &self,
        value: &Value,
        depth: Depth,
        level: usize,
        state: &mut CopyState,
    ) -> Result<Value> {
        let kind = classify(value);
        if !kind.is_object_like() || kind.is_callable() {
            return Ok(value.clone());
        }

        if depth == Depth::Deep {
            if let Some(existing) = state.lookup(value) {
                return Ok(existing);
            }
            if let Some(limit) = self.options.max_depth {
                if level > limit {
                    if state.is_strict() {
                        return Err(FacsimileError::DepthExceeded { limit });
                    }
                    warn!(limit, kind = kind.tag(), "depth limit reached, sharing value");
                    return Ok(value.clone());
                }
            }
        }

        let copy = seed::build(value);
        if depth == Depth::Deep && self.options.preserve_shared {
            state.remember(value, copy.clone());
        }

        populate::fill(self, value, &copy, depth, level, state)?;
        state.count();

        if self.options.trace {
            trace!(kind = kind.tag(), level, "seeded duplicate");
        }
        Ok(copy)
    }
}
