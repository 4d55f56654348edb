//! Value representation for runtime values

mod callable;
mod date;
mod display;
mod impls;
mod key;
mod pattern;
mod shared;
mod symbol;

pub use callable::{FunctionValue, NativeFnPtr};
pub use date::DateBox;
pub use key::MapKey;
pub use pattern::{Pattern, PatternFlags, PatternMatch};
pub use shared::Shared;
pub use symbol::Symbol;

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

/// Ordered string-keyed properties of an object.
pub type Properties = IndexMap<String, Value>;

/// Ordered entries of a `Map`.
pub type MapEntries = IndexMap<MapKey, Value>;

/// Ordered members of a `Set`.
pub type SetMembers = IndexSet<MapKey>;

/// Runtime value of a dynamic, script-like language.
///
/// Values are organized into four tiers:
/// - Tier 1: Inline primitives, compared and copied by value
/// - Tier 2: Mutable compound types behind a [`Shared`] handle
/// - Tier 3: Immutable wrapper objects (boxed primitives)
/// - Tier 4: Callables
///
/// Cloning a `Value` never duplicates heap data: the clone is another
/// reference to the same object. Use [`crate::deep_copy`] or
/// [`crate::shallow_copy`] to duplicate structure.
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Tier 1: Inline Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// `undefined`
    Undefined,

    /// `null`
    Null,

    /// Boolean primitive
    Bool(bool),

    /// Number primitive (IEEE 754 double)
    Number(f64),

    /// String primitive
    String(Arc<String>),

    /// Bare symbol; identity is the allocation
    Symbol(Symbol),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 2: Mutable Compound Types
    // ═══════════════════════════════════════════════════════════════════
    /// Plain object
    Object(Shared<Properties>),

    /// Arguments object (indexed properties "0", "1", ...)
    Arguments(Shared<Properties>),

    /// Array
    Array(Shared<Vec<Value>>),

    /// Insertion-ordered map with SameValueZero keys
    Map(Shared<MapEntries>),

    /// Insertion-ordered set with SameValueZero members
    Set(Shared<SetMembers>),

    /// Date (epoch milliseconds)
    Date(Shared<DateBox>),

    /// Regular expression with a mutable search cursor
    RegExp(Shared<Pattern>),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 3: Boxed Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// `new Boolean(..)`
    BooleanBox(Arc<bool>),

    /// `new Number(..)`
    NumberBox(Arc<f64>),

    /// `new String(..)`
    StringBox(Arc<String>),

    /// `Object(symbol)`
    SymbolBox(Arc<Symbol>),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 4: Callables
    // ═══════════════════════════════════════════════════════════════════
    /// Native function
    Function(Arc<FunctionValue>),
}
