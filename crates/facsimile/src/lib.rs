//! # Facsimile
//!
//! Shallow and deep duplication of dynamic runtime values.
//!
//! Facsimile models the values of a dynamic, script-like language
//! (objects, arrays, maps, sets, dates, regular expressions, boxed
//! primitives, symbols and functions) and duplicates them while keeping
//! each value's kind.
//!
//! ## Architecture
//!
//! - **Value model** ([`value`]): primitives inline, objects behind
//!   shared handles with reference identity
//! - **Classifier** ([`kind`]): the semantic [`Kind`] of any value
//! - **Duplicator** ([`copy`]): seeds and populates a copy, recursing in
//!   deep mode with an identity table so shared structure and cycles
//!   survive
//!
//! ## Example
//!
//! ```
//! use facsimile::{deep_copy, shallow_copy, Value};
//!
//! let e = Value::from(vec![5, 6, 7]);
//! let src = Value::object([("a", Value::from(2)), ("e", e.clone())]);
//!
//! let shallow = shallow_copy(&src);
//! assert!(shallow.get("e").unwrap().same_value(&e));
//!
//! let deep = deep_copy(&src);
//! deep.get("e").unwrap().push(Value::from(8));
//! assert_eq!(e.len(), Some(3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod copy;
pub mod error;
pub mod json;
pub mod kind;
pub mod options;
pub mod value;

// Re-export main types
pub use copy::{Depth, Duplicator};
pub use error::{FacsimileError, Result};
pub use kind::{classify, Kind};
pub use options::CopyOptions;
pub use value::{
    DateBox, FunctionValue, MapEntries, MapKey, NativeFnPtr, Pattern, PatternFlags,
    PatternMatch, Properties, SetMembers, Shared, Symbol, Value,
};

/// Facsimile version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The duplicator behind [`deep_copy`] and [`shallow_copy`].
static SHARED: Duplicator = Duplicator::new(CopyOptions::DEFAULT);

/// Deep-duplicate `value`: every reachable object is copied.
///
/// Primitives and functions are returned as they are.
pub fn deep_copy(value: &Value) -> Value {
    SHARED.duplicate(value, Depth::Deep)
}

/// Shallow-duplicate `value`: a new top-level object whose children are
/// the same references as the source's.
///
/// Primitives and functions are returned as they are.
pub fn shallow_copy(value: &Value) -> Value {
    SHARED.duplicate(value, Depth::Shallow)
}
