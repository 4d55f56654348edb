//! Self-referential and shared structure

use facsimile::*;

#[test]
fn test_self_referential_object() {
    let src = Value::object([("name", Value::from("root"))]);
    src.set_property("me", src.clone());

    let copy = deep_copy(&src);
    let me = copy.get("me").unwrap();

    assert!(me.same_value(&copy));
    assert!(!me.same_value(&src));
    assert_eq!(copy, src);
}

#[test]
fn test_self_referential_array() {
    let src = Value::array(vec![Value::from(1)]);
    src.push(src.clone());

    let copy = deep_copy(&src);
    assert!(copy.index(1).unwrap().same_value(&copy));
    assert_eq!(copy.to_string(), "[ 1, [Circular] ]");
}

#[test]
fn test_indirect_cycle() {
    let a = Value::object([("id", Value::from("a"))]);
    let b = Value::object([("id", Value::from("b")), ("a", a.clone())]);
    a.set_property("b", b.clone());

    let a2 = deep_copy(&a);
    let b2 = a2.get("b").unwrap();
    assert!(!b2.same_value(&b));
    assert!(b2.get("a").unwrap().same_value(&a2));

    // The copy is independent of the source cycle
    b2.set_property("id", Value::from("changed"));
    assert_eq!(b.get("id"), Some(Value::from("b")));
}

#[test]
fn test_cycle_through_map_and_set() {
    let map = Value::map(Vec::new());
    let set = Value::set([map.clone()]);
    map.map_insert(Value::from("set"), set.clone());

    let copy = deep_copy(&map);
    let set2 = copy.map_get(&Value::from("set")).unwrap();
    assert!(!set2.same_value(&set));
    assert!(set2.set_has(&copy));
}

#[test]
fn test_shallow_copy_of_cycle() {
    let src = Value::array(vec![]);
    src.push(src.clone());

    let copy = shallow_copy(&src);
    assert!(!copy.same_value(&src));
    assert!(copy.index(0).unwrap().same_value(&src));
}

#[test]
fn test_shared_subvalue_stays_shared() {
    let shared = Value::from(vec![1, 2]);
    let src = Value::object([("x", shared.clone()), ("y", shared.clone())]);

    let copy = deep_copy(&src);
    let (x, y) = (copy.get("x").unwrap(), copy.get("y").unwrap());
    assert!(x.same_value(&y));
    assert!(!x.same_value(&shared));

    x.push(Value::from(3));
    assert_eq!(y.len(), Some(3));
    assert_eq!(shared.len(), Some(2));
}

#[test]
fn test_shared_box_stays_shared() {
    let boxed = Value::number_box(1.0);
    let src = Value::array(vec![boxed.clone(), boxed.clone()]);
    let copy = deep_copy(&src);
    let first = copy.index(0).unwrap();
    assert!(first.same_value(&copy.index(1).unwrap()));
    assert!(!first.same_value(&boxed));
}

#[test]
fn test_cycle_without_identity_table_bounded_by_depth() {
    let src = Value::array(vec![]);
    src.push(src.clone());

    let dup = Duplicator::new(
        CopyOptions::new()
            .with_preserve_shared(false)
            .with_max_depth(3),
    );
    let copy = dup.duplicate(&src, Depth::Deep);
    let mut cursor = copy.clone();
    for _ in 0..3 {
        cursor = cursor.index(0).unwrap();
        assert!(!cursor.same_value(&src));
    }
    // past the limit the source itself is referenced
    assert!(cursor.index(0).unwrap().same_value(&src));

    assert_eq!(
        dup.try_duplicate(&src, Depth::Deep).unwrap_err(),
        FacsimileError::DepthExceeded { limit: 3 }
    );
}
