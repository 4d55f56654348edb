//! Hashable wrapper for Value to enable use as Map keys and Set members

use std::hash::{Hash, Hasher};

use super::Value;

/// A wrapper for Value that implements Hash and Eq with SameValueZero
/// semantics.
///
/// Primitives compare by value (`NaN` equals `NaN`, `-0` equals `+0`);
/// every heap value compares by identity, so two structurally equal
/// objects are distinct keys.
#[derive(Debug, Clone)]
pub struct MapKey(pub Value);

impl MapKey {
    /// The wrapped value
    pub fn value(&self) -> &Value {
        &self.0
    }
}

/// Stores a zero of either sign as `+0`, the way keys and members are
/// kept in a map or set.
impl From<Value> for MapKey {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) if n == 0.0 => MapKey(Value::Number(0.0)),
            other => MapKey(other),
        }
    }
}

/// Canonical bits for a number under SameValueZero.
fn number_bits(n: f64) -> u64 {
    if n.is_nan() {
        f64::NAN.to_bits()
    } else if n == 0.0 {
        0
    } else {
        n.to_bits()
    }
}

impl Hash for MapKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the discriminant first
        std::mem::discriminant(&self.0).hash(state);

        match &self.0 {
            Value::Undefined | Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => number_bits(*n).hash(state),
            Value::String(s) => s.hash(state),
            Value::Symbol(s) => s.hash(state),
            other => other.heap_addr().hash(state),
        }
    }
}

impl PartialEq for MapKey {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Value::Number(a), Value::Number(b)) => number_bits(*a) == number_bits(*b),
            (a, b) => a.same_value(b),
        }
    }
}

impl Eq for MapKey {}
