//! Display and Debug implementations for Value
//!
//! Rendering follows the console style of script runtimes:
//! `{ a: 2, e: [ 5, 6 ] }`, `Map(1) { 'k' => 1 }`, `[Number: 3]`.
//! A container reached again through its own contents prints as
//! `[Circular]`.

use std::fmt::{self, Write};

use super::*;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Renderer::default().value(f, self, true)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display is more user-friendly, Debug is more detailed
        match self {
            Value::String(s) => write!(f, "{}", s.as_str()), // No quotes for Display
            _ => Renderer::default().value(f, self, true),
        }
    }
}

fn number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}Infinity", if n < 0.0 { "-" } else { "" })
    } else if n == 0.0 && n.is_sign_negative() {
        write!(f, "-0")
    } else {
        write!(f, "{}", n)
    }
}

fn quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('\'')?;
    for c in s.chars() {
        match c {
            '\'' => f.write_str("\\'")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('\'')
}

fn property_key(f: &mut fmt::Formatter<'_>, key: &str) -> fmt::Result {
    let plain = !key.is_empty()
        && !key.starts_with(|c: char| c.is_ascii_digit())
        && key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if plain {
        f.write_str(key)
    } else {
        quoted(f, key)
    }
}

/// Tracks the containers currently being printed.
#[derive(Default)]
struct Renderer {
    ancestors: Vec<usize>,
}

impl Renderer {
    fn value(&mut self, f: &mut fmt::Formatter<'_>, value: &Value, quote: bool) -> fmt::Result {
        if let Some(addr) = value.heap_addr() {
            if self.ancestors.contains(&addr) {
                return write!(f, "[Circular]");
            }
        }

        match value {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => number(f, *n),
            Value::String(s) if quote => quoted(f, s),
            Value::String(s) => f.write_str(s),
            Value::Symbol(s) => write!(f, "{:?}", s),

            Value::Object(props) => {
                let props = props.snapshot();
                self.nested(f, value, |r, f| r.properties(f, &props))
            }
            Value::Arguments(props) => {
                let props = props.snapshot();
                write!(f, "[Arguments] ")?;
                self.nested(f, value, |r, f| r.list(f, props.values()))
            }
            Value::Array(items) => {
                let items = items.snapshot();
                self.nested(f, value, |r, f| r.list(f, items.iter()))
            }
            Value::Map(entries) => {
                let entries = entries.snapshot();
                write!(f, "Map({}) ", entries.len())?;
                self.nested(f, value, |r, f| {
                    if entries.is_empty() {
                        return write!(f, "{{}}");
                    }
                    write!(f, "{{ ")?;
                    for (i, (k, v)) in entries.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        r.value(f, &k.0, true)?;
                        write!(f, " => ")?;
                        r.value(f, v, true)?;
                    }
                    write!(f, " }}")
                })
            }
            Value::Set(members) => {
                let members = members.snapshot();
                write!(f, "Set({}) ", members.len())?;
                self.nested(f, value, |r, f| {
                    if members.is_empty() {
                        return write!(f, "{{}}");
                    }
                    write!(f, "{{ ")?;
                    for (i, m) in members.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        r.value(f, &m.0, true)?;
                    }
                    write!(f, " }}")
                })
            }
            Value::Date(d) => match d.read().to_iso_string() {
                Some(iso) => f.write_str(&iso),
                None => write!(f, "Invalid Date"),
            },
            Value::RegExp(p) => write!(f, "{}", *p.read()),

            Value::BooleanBox(b) => write!(f, "[Boolean: {}]", b),
            Value::NumberBox(n) => {
                write!(f, "[Number: ")?;
                number(f, **n)?;
                write!(f, "]")
            }
            Value::StringBox(s) => {
                write!(f, "[String: ")?;
                quoted(f, s)?;
                write!(f, "]")
            }
            Value::SymbolBox(s) => write!(f, "[Symbol: {:?}]", s.as_ref()),
            Value::Function(func) => write!(f, "[Function: {}]", func.name),
        }
    }

    fn nested<F>(&mut self, f: &mut fmt::Formatter<'_>, value: &Value, body: F) -> fmt::Result
    where
        F: FnOnce(&mut Self, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        if let Some(addr) = value.heap_addr() {
            self.ancestors.push(addr);
        }
        let result = body(self, f);
        self.ancestors.pop();
        result
    }

    fn list<'a>(
        &mut self,
        f: &mut fmt::Formatter<'_>,
        items: impl ExactSizeIterator<Item = &'a Value>,
    ) -> fmt::Result {
        if items.len() == 0 {
            return write!(f, "[]");
        }
        write!(f, "[ ")?;
        for (i, item) in items.enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            self.value(f, item, true)?;
        }
        write!(f, " ]")
    }

    fn properties(&mut self, f: &mut fmt::Formatter<'_>, props: &Properties) -> fmt::Result {
        if props.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{ ")?;
        for (i, (k, v)) in props.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            property_key(f, k)?;
            write!(f, ": ")?;
            self.value(f, v, true)?;
        }
        write!(f, " }}")
    }
}
