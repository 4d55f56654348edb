//! Value trait implementations: constructors, predicates, accessors, identity, From traits, PartialEq

use std::collections::HashSet;
use std::sync::Arc;

use super::*;
use crate::error::Result;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a string primitive
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Arc::new(s.into()))
    }

    /// Create a plain object from ordered properties
    pub fn object<K: Into<String>>(props: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(Shared::new(
            props.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Create an arguments object with indexed properties `"0"`, `"1"`, ...
    pub fn arguments(args: Vec<Value>) -> Self {
        Value::Arguments(Shared::new(
            args.into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
        ))
    }

    /// Create an array
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Shared::new(items))
    }

    /// Create a map from ordered entries; later duplicates of a key win
    /// but keep the first key's position
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Map(Shared::new(
            entries.into_iter().map(|(k, v)| (MapKey::from(k), v)).collect(),
        ))
    }

    /// Create a set from ordered members
    pub fn set(members: impl IntoIterator<Item = Value>) -> Self {
        Value::Set(Shared::new(members.into_iter().map(MapKey::from).collect()))
    }

    /// Create a date from an epoch timestamp in milliseconds
    pub fn date(epoch_ms: f64) -> Self {
        Value::Date(Shared::new(DateBox::from_epoch_millis(epoch_ms)))
    }

    /// Compile a regular expression value
    pub fn regexp(source: &str, flags: &str) -> Result<Self> {
        Ok(Value::RegExp(Shared::new(Pattern::new(source, flags)?)))
    }

    /// Create a fresh bare symbol
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Symbol::new(description))
    }

    /// Create a `Boolean` wrapper object
    pub fn boolean_box(b: bool) -> Self {
        Value::BooleanBox(Arc::new(b))
    }

    /// Create a `Number` wrapper object
    pub fn number_box(n: f64) -> Self {
        Value::NumberBox(Arc::new(n))
    }

    /// Create a `String` wrapper object
    pub fn string_box(s: impl Into<String>) -> Self {
        Value::StringBox(Arc::new(s.into()))
    }

    /// Create a `Symbol` wrapper object
    pub fn symbol_box(symbol: Symbol) -> Self {
        Value::SymbolBox(Arc::new(symbol))
    }

    /// Create a native function value
    pub fn function<F>(name: impl Into<String>, arity: i32, func: F) -> Self
    where
        F: Fn(&[Value]) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        Value::Function(Arc::new(FunctionValue::new(name, arity, func)))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if value is `undefined` or `null`
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Check if value is a primitive (never copied)
    pub fn is_primitive(&self) -> bool {
        self.heap_addr().is_none()
    }

    /// Check if value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Check if value is callable
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════

    /// Extract a boolean, unwrapping `Boolean` objects
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::BooleanBox(b) => Some(**b),
            _ => None,
        }
    }

    /// Extract a number, unwrapping `Number` objects
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::NumberBox(n) => Some(**n),
            _ => None,
        }
    }

    /// Extract a string slice, unwrapping `String` objects
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::StringBox(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Extract the symbol, unwrapping `Symbol` objects
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(s) => Some(s),
            Value::SymbolBox(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Extract the function
    pub fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Value::Function(f) => Some(f.as_ref()),
            _ => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════

    /// Read a property of an object or arguments object
    pub fn get(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(props) | Value::Arguments(props) => props.read().get(key).cloned(),
            _ => None,
        }
    }

    /// Write a property of an object or arguments object.
    ///
    /// Returns false when `self` has no properties.
    pub fn set_property(&self, key: impl Into<String>, value: Value) -> bool {
        match self {
            Value::Object(props) | Value::Arguments(props) => {
                props.write().insert(key.into(), value);
                true
            }
            _ => false,
        }
    }

    /// Property names of an object or arguments object, in order
    pub fn keys(&self) -> Vec<String> {
        match self {
            Value::Object(props) | Value::Arguments(props) => props.read().keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Read an array element
    pub fn index(&self, i: usize) -> Option<Value> {
        match self {
            Value::Array(items) => items.read().get(i).cloned(),
            _ => None,
        }
    }

    /// Append to an array, returning the new length
    pub fn push(&self, value: Value) -> Option<usize> {
        match self {
            Value::Array(items) => {
                let mut items = items.write();
                items.push(value);
                Some(items.len())
            }
            _ => None,
        }
    }

    /// Look up a map entry
    pub fn map_get(&self, key: &Value) -> Option<Value> {
        match self {
            Value::Map(entries) => entries.read().get(&MapKey(key.clone())).cloned(),
            _ => None,
        }
    }

    /// Insert or update a map entry. Returns false when `self` is not a map.
    pub fn map_insert(&self, key: Value, value: Value) -> bool {
        match self {
            Value::Map(entries) => {
                entries.write().insert(MapKey::from(key), value);
                true
            }
            _ => false,
        }
    }

    /// Add a set member. Returns false when `self` is not a set.
    pub fn set_add(&self, member: Value) -> bool {
        match self {
            Value::Set(members) => {
                members.write().insert(MapKey::from(member));
                true
            }
            _ => false,
        }
    }

    /// Whether a set contains `member`
    pub fn set_has(&self, member: &Value) -> bool {
        match self {
            Value::Set(members) => members.read().contains(&MapKey(member.clone())),
            _ => false,
        }
    }

    /// Number of elements, properties, entries or members of a container
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Object(props) | Value::Arguments(props) => Some(props.read().len()),
            Value::Array(items) => Some(items.read().len()),
            Value::Map(entries) => Some(entries.read().len()),
            Value::Set(members) => Some(members.read().len()),
            Value::String(s) | Value::StringBox(s) => Some(s.len()),
            _ => None,
        }
    }

    /// Whether a container is empty (false for non-containers)
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Identity
    // ═══════════════════════════════════════════════════════════════════

    /// Address of the heap allocation backing this value, if any.
    ///
    /// Primitives (including bare symbols) have no address.
    pub fn heap_addr(&self) -> Option<usize> {
        fn arc_addr<T: ?Sized>(arc: &Arc<T>) -> usize {
            Arc::as_ptr(arc) as *const () as usize
        }

        match self {
            Value::Undefined
            | Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Symbol(_) => None,

            Value::Object(h) | Value::Arguments(h) => Some(h.addr()),
            Value::Array(h) => Some(h.addr()),
            Value::Map(h) => Some(h.addr()),
            Value::Set(h) => Some(h.addr()),
            Value::Date(h) => Some(h.addr()),
            Value::RegExp(h) => Some(h.addr()),

            Value::BooleanBox(b) => Some(arc_addr(b)),
            Value::NumberBox(n) => Some(arc_addr(n)),
            Value::StringBox(s) => Some(arc_addr(s)),
            Value::SymbolBox(s) => Some(arc_addr(s)),
            Value::Function(f) => Some(arc_addr(f)),
        }
    }

    /// `Object.is` semantics: primitives by value (NaN is itself, +0 is
    /// not -0), symbols and heap values by identity.
    pub fn same_value(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => {
                a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (a, b) => {
                std::mem::discriminant(a) == std::mem::discriminant(b)
                    && a.heap_addr().is_some()
                    && a.heap_addr() == b.heap_addr()
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq Implementation
// ═══════════════════════════════════════════════════════════════════

/// Structural equality.
///
/// Containers compare element-wise in iteration order; functions and
/// symbols compare by identity; map keys compare by SameValueZero. Cyclic
/// graphs terminate: a pair of handles already under comparison is
/// assumed equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        structural_eq(self, other, &mut HashSet::new())
    }
}

fn numbers_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

fn structural_eq(a: &Value, b: &Value, seen: &mut HashSet<(usize, usize)>) -> bool {
    if let (Some(x), Some(y)) = (a.heap_addr(), b.heap_addr()) {
        if x == y {
            return std::mem::discriminant(a) == std::mem::discriminant(b);
        }
        if !seen.insert((x, y)) {
            return true;
        }
    }

    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_eq(*a, *b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Symbol(a), Value::Symbol(b)) => a == b,

        (Value::Object(a), Value::Object(b)) | (Value::Arguments(a), Value::Arguments(b)) => {
            let (a, b) = (a.snapshot(), b.snapshot());
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|((ka, va), (kb, vb))| ka == kb && structural_eq(va, vb, seen))
        }

        (Value::Array(a), Value::Array(b)) => {
            let (a, b) = (a.snapshot(), b.snapshot());
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|(x, y)| structural_eq(x, y, seen))
        }

        (Value::Map(a), Value::Map(b)) => {
            let (a, b) = (a.snapshot(), b.snapshot());
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|((ka, va), (kb, vb))| ka == kb && structural_eq(va, vb, seen))
        }

        (Value::Set(a), Value::Set(b)) => {
            let (a, b) = (a.snapshot(), b.snapshot());
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|(x, y)| structural_eq(&x.0, &y.0, seen))
        }

        (Value::Date(a), Value::Date(b)) => {
            numbers_eq(a.read().epoch_millis(), b.read().epoch_millis())
        }
        (Value::RegExp(a), Value::RegExp(b)) => *a.read() == *b.read(),

        (Value::BooleanBox(a), Value::BooleanBox(b)) => a == b,
        (Value::NumberBox(a), Value::NumberBox(b)) => numbers_eq(**a, **b),
        (Value::StringBox(a), Value::StringBox(b)) => a == b,
        (Value::SymbolBox(a), Value::SymbolBox(b)) => a == b,

        // Distinct functions are never equal
        (Value::Function(_), Value::Function(_)) => false,

        // Different kinds are never equal
        _ => false,
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<DateBox> for Value {
    fn from(d: DateBox) -> Self {
        Value::Date(Shared::new(d))
    }
}

impl From<Pattern> for Value {
    fn from(p: Pattern) -> Self {
        Value::RegExp(Shared::new(p))
    }
}

impl From<FunctionValue> for Value {
    fn from(f: FunctionValue) -> Self {
        Value::Function(Arc::new(f))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
