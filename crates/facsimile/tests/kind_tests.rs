//! Classification and kind preservation

use facsimile::*;

fn one_of_each() -> Vec<(Value, Kind)> {
    vec![
        (Value::object([("a", Value::from(1))]), Kind::PlainObject),
        (Value::arguments(vec![Value::from(1)]), Kind::ArgumentList),
        (Value::from(vec![1, 2]), Kind::Sequence),
        (Value::boolean_box(true), Kind::BooleanBox),
        (Value::date(86_400_000.0), Kind::DateBox),
        (
            Value::map([(Value::from("k"), Value::from("v"))]),
            Kind::Mapping,
        ),
        (Value::number_box(7.5), Kind::NumberBox),
        (Value::regexp("a+", "gi").unwrap(), Kind::PatternBox),
        (Value::set([Value::from(1)]), Kind::SetCollection),
        (Value::string_box("boxed"), Kind::StringBox),
        (Value::symbol_box(Symbol::new(Some("s"))), Kind::AtomicSymbol),
        (Value::function("f", 0, |_| Ok(Value::Null)), Kind::Callable),
        (Value::Number(1.0), Kind::Unsupported),
        (Value::Null, Kind::Unsupported),
    ]
}

#[test]
fn test_classify_each_kind() {
    for (value, kind) in one_of_each() {
        assert_eq!(classify(&value), kind, "classify {:?}", value);
        assert_eq!(value.kind(), kind);
    }
}

#[test]
fn test_kind_preserved_by_deep_copy() {
    for (value, kind) in one_of_each() {
        assert_eq!(classify(&deep_copy(&value)), kind, "deep copy of {:?}", value);
    }
}

#[test]
fn test_kind_preserved_by_shallow_copy() {
    for (value, kind) in one_of_each() {
        assert_eq!(
            classify(&shallow_copy(&value)),
            kind,
            "shallow copy of {:?}",
            value
        );
    }
}

#[test]
fn test_object_like_copies_are_new_allocations() {
    for (value, kind) in one_of_each() {
        if !kind.is_object_like() || kind.is_callable() {
            continue;
        }
        assert!(!deep_copy(&value).same_value(&value), "{:?}", kind);
        assert!(!shallow_copy(&value).same_value(&value), "{:?}", kind);
        assert_eq!(deep_copy(&value), value);
    }
}

#[test]
fn test_tags_match_builtin_names() {
    let tags: Vec<_> = one_of_each().iter().map(|(v, _)| v.kind().tag()).collect();
    assert_eq!(
        tags,
        vec![
            "Object",
            "Arguments",
            "Array",
            "Boolean",
            "Date",
            "Map",
            "Number",
            "RegExp",
            "Set",
            "String",
            "Symbol",
            "Function",
            "Primitive",
            "Primitive",
        ]
    );
}

#[test]
fn test_kind_serializes_by_name() {
    let json = serde_json::to_string(&Kind::PatternBox).unwrap();
    assert_eq!(json, "\"PatternBox\"");
    let back: Kind = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Kind::PatternBox);
}
