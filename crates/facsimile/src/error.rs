//! Error types for facsimile operations

use thiserror::Error;

use crate::kind::Kind;

/// Main error type for facsimile operations.
///
/// Duplication itself never fails; these errors come from the edges of the
/// value model (pattern compilation, JSON export, native calls) and from
/// the strict, depth-limited copy path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FacsimileError {
    /// A configured nesting limit was reached during a strict copy
    #[error("Depth error: nesting limit of {limit} exceeded")]
    DepthExceeded {
        /// The configured limit
        limit: usize,
    },

    /// Pattern text failed to compile
    #[error("Invalid pattern /{pattern}/: {message}")]
    InvalidPattern {
        /// The offending pattern text
        pattern: String,
        /// Compiler diagnostic
        message: String,
    },

    /// Unknown or repeated pattern flag
    #[error("Invalid pattern flags: {0:?}")]
    InvalidFlags(String),

    /// The value has no JSON representation
    #[error("Value of kind {0:?} is not serializable")]
    NotSerializable(Kind),

    /// The value graph contains a cycle
    #[error("Converting circular structure")]
    Circular,

    /// A native function reported a failure
    #[error("Call error in {name}: {message}")]
    CallFailed {
        /// Function name
        name: String,
        /// Failure reported by the function
        message: String,
    },
}

/// Result type alias for facsimile operations
pub type Result<T> = std::result::Result<T, FacsimileError>;
