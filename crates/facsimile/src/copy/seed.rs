//! Seed construction: a fresh value of the same kind as the source

use std::sync::Arc;

use crate::value::{DateBox, MapEntries, Pattern, Properties, SetMembers, Shared, Symbol, Value};

/// Build the seed for `source`.
///
/// Containers get an empty instance to be populated; boxes, dates and
/// patterns get a complete copy. Anything else is returned unchanged.
pub(super) fn build(source: &Value) -> Value {
    match source {
        Value::Array(items) => Value::Array(Shared::new(Vec::with_capacity(items.read().len()))),
        Value::Object(_) => Value::Object(Shared::new(Properties::new())),
        Value::Arguments(_) => Value::Arguments(Shared::new(Properties::new())),
        Value::Map(_) => Value::Map(Shared::new(MapEntries::new())),
        Value::Set(_) => Value::Set(Shared::new(SetMembers::new())),

        Value::BooleanBox(b) => boolean_box(**b),
        Value::Date(d) => date(&d.read()),
        Value::NumberBox(n) => Value::NumberBox(Arc::new(**n)),
        Value::StringBox(s) => Value::StringBox(Arc::new(s.as_str().to_owned())),
        Value::RegExp(p) => pattern(&p.read()),
        Value::SymbolBox(s) => symbol_box(s),

        Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::Symbol(_)
        | Value::Function(_) => source.clone(),
    }
}

/// A `Boolean` box rebuilt from the source's numeric coercion.
fn boolean_box(b: bool) -> Value {
    let numeric = if b { 1.0 } else { 0.0 };
    Value::BooleanBox(Arc::new(numeric != 0.0))
}

/// A date rebuilt from the source's epoch timestamp.
fn date(source: &DateBox) -> Value {
    Value::Date(Shared::new(DateBox::from_epoch_millis(source.epoch_millis())))
}

/// A pattern rebuilt from the source's text and flags.
///
/// The search cursor is not part of construction and is copied over
/// afterwards.
fn pattern(source: &Pattern) -> Value {
    let mut copy = source.rebuild();
    copy.last_index = source.last_index;
    Value::RegExp(Shared::new(copy))
}

/// A new box around the same atom.
fn symbol_box(source: &Symbol) -> Value {
    Value::SymbolBox(Arc::new(source.clone()))
}
