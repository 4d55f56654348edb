//! Atomic symbols

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug)]
struct SymbolData {
    description: Option<String>,
}

/// A unique atom. Two symbols are equal only if they are the same atom,
/// regardless of description.
#[derive(Clone)]
pub struct Symbol(Arc<SymbolData>);

impl Symbol {
    /// Create a fresh symbol
    pub fn new(description: Option<&str>) -> Self {
        Self(Arc::new(SymbolData {
            description: description.map(str::to_owned),
        }))
    }

    /// The description given at creation
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    /// Address of the atom, usable as an identity key
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}
