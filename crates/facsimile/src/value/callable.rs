//! Callable values

use std::fmt;
use std::sync::Arc;

use super::Value;
use crate::error::{FacsimileError, Result};

/// Type alias for native function pointers to reduce complexity
pub type NativeFnPtr = Arc<dyn Fn(&[Value]) -> std::result::Result<Value, String> + Send + Sync>;

/// A native function exposed as a value.
///
/// Functions carry no copyable data: duplication always returns the
/// same function.
#[derive(Clone)]
pub struct FunctionValue {
    /// Function name (for display/debugging)
    pub name: String,

    /// Declared parameter count (-1 for variadic)
    pub arity: i32,

    /// The actual function pointer
    pub func: NativeFnPtr,
}

impl FunctionValue {
    /// Create a new function value
    pub fn new<F>(name: impl Into<String>, arity: i32, func: F) -> Self
    where
        F: Fn(&[Value]) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity,
            func: Arc::new(func),
        }
    }

    /// Invoke the function
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.func)(args).map_err(|message| FacsimileError::CallFailed {
            name: self.name.clone(),
            message,
        })
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionValue({})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call() {
        let double = FunctionValue::new("double", 1, |args| match args.first() {
            Some(Value::Number(n)) => Ok(Value::Number(n * 2.0)),
            _ => Err("expected a number".to_string()),
        });
        assert_eq!(double.call(&[Value::Number(2.0)]).unwrap(), Value::Number(4.0));

        let err = double.call(&[]).unwrap_err();
        assert_eq!(
            err,
            FacsimileError::CallFailed {
                name: "double".into(),
                message: "expected a number".into(),
            }
        );
    }
}
