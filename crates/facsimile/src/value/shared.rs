//! Shared handles for mutable heap values

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A reference-counted, interior-mutable handle to heap data.
///
/// Cloning the handle yields another reference to the same allocation;
/// the allocation address is the value's identity.
pub struct Shared<T>(Arc<RwLock<T>>);

impl<T> Shared<T> {
    /// Allocate a new handle
    pub fn new(inner: T) -> Self {
        Self(Arc::new(RwLock::new(inner)))
    }

    /// Acquire shared read access
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read()
    }

    /// Acquire exclusive write access
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.0.write()
    }

    /// Replace the contents, returning the previous ones
    pub fn replace(&self, inner: T) -> T {
        std::mem::replace(&mut *self.0.write(), inner)
    }

    /// Whether two handles point at the same allocation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the allocation, usable as an identity key
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }
}

impl<T: Clone> Shared<T> {
    /// Clone the contents out, releasing the lock before returning.
    ///
    /// For collections of `Value` this copies references only.
    pub fn snapshot(&self) -> T {
        self.0.read().clone()
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shared({:#x})", self.addr())
    }
}
