//! Semantic classification of runtime values

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// The semantic kind of a value, independent of how it was constructed.
///
/// Every primitive (`undefined`, `null`, booleans, numbers, strings and
/// bare symbols) is `Unsupported`: it is never copied, only passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Ordinary object with string-keyed properties
    PlainObject,
    /// Arguments object; copied exactly like a plain object
    ArgumentList,
    /// Array
    Sequence,
    /// `Boolean` wrapper object
    BooleanBox,
    /// `Date`
    DateBox,
    /// `Map`
    Mapping,
    /// `Number` wrapper object
    NumberBox,
    /// `RegExp`
    PatternBox,
    /// `Set`
    SetCollection,
    /// `String` wrapper object
    StringBox,
    /// `Symbol` wrapper object
    AtomicSymbol,
    /// Function
    Callable,
    /// Primitive or unrecognized value
    Unsupported,
}

impl Kind {
    /// Whether values of this kind are compound or callable (not primitives).
    pub fn is_object_like(self) -> bool {
        !matches!(self, Kind::Unsupported)
    }

    /// Whether values of this kind are callable.
    pub fn is_callable(self) -> bool {
        matches!(self, Kind::Callable)
    }

    /// Whether values of this kind contain other values.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Kind::PlainObject
                | Kind::ArgumentList
                | Kind::Sequence
                | Kind::Mapping
                | Kind::SetCollection
        )
    }

    /// The built-in tag name, as reported by `Object.prototype.toString`.
    pub fn tag(self) -> &'static str {
        match self {
            Kind::PlainObject => "Object",
            Kind::ArgumentList => "Arguments",
            Kind::Sequence => "Array",
            Kind::BooleanBox => "Boolean",
            Kind::DateBox => "Date",
            Kind::Mapping => "Map",
            Kind::NumberBox => "Number",
            Kind::PatternBox => "RegExp",
            Kind::SetCollection => "Set",
            Kind::StringBox => "String",
            Kind::AtomicSymbol => "Symbol",
            Kind::Callable => "Function",
            Kind::Unsupported => "Primitive",
        }
    }
}

/// Classify a value by its effective runtime kind.
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::Symbol(_) => Kind::Unsupported,

        Value::Object(_) => Kind::PlainObject,
        Value::Arguments(_) => Kind::ArgumentList,
        Value::Array(_) => Kind::Sequence,
        Value::Map(_) => Kind::Mapping,
        Value::Set(_) => Kind::SetCollection,
        Value::Date(_) => Kind::DateBox,
        Value::RegExp(_) => Kind::PatternBox,

        Value::BooleanBox(_) => Kind::BooleanBox,
        Value::NumberBox(_) => Kind::NumberBox,
        Value::StringBox(_) => Kind::StringBox,
        Value::SymbolBox(_) => Kind::AtomicSymbol,

        Value::Function(_) => Kind::Callable,
    }
}

impl Value {
    /// Shorthand for [`classify`].
    pub fn kind(&self) -> Kind {
        classify(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Symbol;

    #[test]
    fn test_primitives_are_unsupported() {
        for v in [
            Value::Undefined,
            Value::Null,
            Value::Bool(true),
            Value::Number(1.5),
            Value::string("s"),
            Value::Symbol(Symbol::new(Some("s"))),
        ] {
            assert_eq!(classify(&v), Kind::Unsupported);
            assert!(!classify(&v).is_object_like());
        }
    }

    #[test]
    fn test_boxed_distinguished_from_primitive() {
        assert_eq!(classify(&Value::number_box(3.0)), Kind::NumberBox);
        assert_eq!(classify(&Value::Number(3.0)), Kind::Unsupported);
        assert_eq!(classify(&Value::string_box("x")), Kind::StringBox);
        assert_eq!(classify(&Value::boolean_box(false)), Kind::BooleanBox);
        assert_eq!(
            classify(&Value::symbol_box(Symbol::new(None))),
            Kind::AtomicSymbol
        );
    }

    #[test]
    fn test_tags() {
        assert_eq!(Value::object(Vec::<(String, Value)>::new()).kind().tag(), "Object");
        assert_eq!(Value::arguments(Vec::new()).kind().tag(), "Arguments");
        assert_eq!(Value::array(Vec::new()).kind().tag(), "Array");
        assert_eq!(Value::Null.kind().tag(), "Primitive");
    }

    #[test]
    fn test_callable() {
        let f = Value::function("id", 1, |args| Ok(args[0].clone()));
        assert!(f.kind().is_callable());
        assert!(f.kind().is_object_like());
        assert!(!f.kind().is_container());
    }
}
