//! Conversion between values and JSON

use serde_json::{Map as JsonMap, Number as JsonNumber, Value as Json};

use crate::error::{FacsimileError, Result};
use crate::value::Value;

/// Largest integer a double holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<&Json> for Value {
    fn from(json: &Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::string(s.as_str()),
            Json::Array(items) => Value::array(items.iter().map(Value::from).collect()),
            Json::Object(props) => {
                Value::object(props.iter().map(|(k, v)| (k.as_str(), Value::from(v))))
            }
        }
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        Value::from(&json)
    }
}

impl Value {
    /// Convert to JSON the way `JSON.stringify` does.
    ///
    /// Non-finite numbers become `null`; `undefined`, functions and
    /// symbols are dropped from objects and become `null` in arrays;
    /// boxes are unwrapped; dates become ISO-8601 strings; maps, sets and
    /// patterns become empty objects.
    ///
    /// Fails when the top-level value itself has no JSON form or when the
    /// graph is cyclic.
    pub fn to_json(&self) -> Result<Json> {
        let mut ancestors = Vec::new();
        convert(self, &mut ancestors)?.ok_or_else(|| FacsimileError::NotSerializable(self.kind()))
    }
}

fn number(n: f64) -> Json {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Json::from(n as i64)
    } else {
        JsonNumber::from_f64(n).map_or(Json::Null, Json::Number)
    }
}

/// `None` means "no JSON form"; the caller decides whether to skip or null it.
fn convert(value: &Value, ancestors: &mut Vec<usize>) -> Result<Option<Json>> {
    let json = match value {
        Value::Undefined | Value::Symbol(_) | Value::Function(_) => return Ok(None),
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Number(n) => number(*n),
        Value::String(s) => Json::String(s.as_str().to_owned()),

        Value::BooleanBox(b) => Json::Bool(**b),
        Value::NumberBox(n) => number(**n),
        Value::StringBox(s) => Json::String(s.as_str().to_owned()),
        Value::Date(d) => d.read().to_iso_string().map_or(Json::Null, Json::String),

        Value::Map(_) | Value::Set(_) | Value::RegExp(_) | Value::SymbolBox(_) => {
            Json::Object(JsonMap::new())
        }

        Value::Array(items) => {
            let items = items.snapshot();
            enter(value, ancestors, |ancestors| {
                let mut out = Vec::with_capacity(items.len());
                for item in &items {
                    out.push(convert(item, ancestors)?.unwrap_or(Json::Null));
                }
                Ok(Json::Array(out))
            })?
        }

        Value::Object(props) | Value::Arguments(props) => {
            let props = props.snapshot();
            enter(value, ancestors, |ancestors| {
                let mut out = JsonMap::new();
                for (key, item) in &props {
                    if let Some(json) = convert(item, ancestors)? {
                        out.insert(key.clone(), json);
                    }
                }
                Ok(Json::Object(out))
            })?
        }
    };
    Ok(Some(json))
}

fn enter<F>(value: &Value, ancestors: &mut Vec<usize>, body: F) -> Result<Json>
where
    F: FnOnce(&mut Vec<usize>) -> Result<Json>,
{
    let addr = value.heap_addr().unwrap_or_default();
    if ancestors.contains(&addr) {
        return Err(FacsimileError::Circular);
    }
    ancestors.push(addr);
    let result = body(ancestors);
    ancestors.pop();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_json_keeps_order() {
        let v = Value::from(json!({ "b": 1, "a": [true, null, "s"] }));
        assert_eq!(v.keys(), vec!["b".to_string(), "a".to_string()]);
        assert_eq!(v.get("a").unwrap().to_string(), "[ true, null, 's' ]");
    }

    #[test]
    fn test_round_trip() {
        let src = json!({ "a": 2, "obj": { "d": "dd", "e": [5, 6, 7] }, "f": 1.5 });
        assert_eq!(Value::from(&src).to_json().unwrap(), src);
    }

    #[test]
    fn test_stringify_rules() {
        let f = Value::function("f", 0, |_| Ok(Value::Null));
        let v = Value::object([
            ("u", Value::Undefined),
            ("f", f.clone()),
            ("nan", Value::Number(f64::NAN)),
            ("list", Value::array(vec![Value::Undefined, f])),
            ("boxed", Value::number_box(3.0)),
            ("date", Value::date(0.0)),
            ("bad_date", Value::date(f64::NAN)),
            ("map", Value::map([(Value::from(1), Value::from(2))])),
        ]);
        assert_eq!(
            v.to_json().unwrap(),
            json!({
                "nan": null,
                "list": [null, null],
                "boxed": 3,
                "date": "1970-01-01T00:00:00.000Z",
                "bad_date": null,
                "map": {}
            })
        );
    }

    #[test]
    fn test_top_level_not_serializable() {
        assert_eq!(
            Value::Undefined.to_json().unwrap_err(),
            FacsimileError::NotSerializable(Kind::Unsupported)
        );
        let f = Value::function("f", 0, |_| Ok(Value::Null));
        assert_eq!(
            f.to_json().unwrap_err(),
            FacsimileError::NotSerializable(Kind::Callable)
        );
    }

    #[test]
    fn test_circular_rejected() {
        let v = Value::array(vec![]);
        v.push(Value::object([("back", v.clone())]));
        assert_eq!(v.to_json().unwrap_err(), FacsimileError::Circular);
    }

    #[test]
    fn test_shared_sibling_allowed() {
        let inner = Value::from(vec![1]);
        let v = Value::array(vec![inner.clone(), inner]);
        assert_eq!(v.to_json().unwrap(), json!([[1], [1]]));
    }
}
