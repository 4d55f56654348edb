//! Filling a seed with the source's children

use super::{Depth, Duplicator};
use super::state::CopyState;
use crate::error::Result;
use crate::value::{MapEntries, MapKey, Properties, SetMembers, Value};

/// Populate `seed` from `source`.
///
/// Children are snapshotted before recursing, so no lock on the source
/// is held while its children are copied.
pub(super) fn fill(
    dup: &Duplicator,
    source: &Value,
    seed: &Value,
    depth: Depth,
    level: usize,
    state: &mut CopyState,
) -> Result<()> {
    let child = |value: &Value, state: &mut CopyState| match depth {
        Depth::Shallow => Ok(value.clone()),
        Depth::Deep => dup.copy(value, depth, level + 1, state),
    };

    match (source, seed) {
        (Value::Array(src), Value::Array(dst)) => {
            let items = src.snapshot();
            let mut out = Vec::with_capacity(items.len());
            for item in &items {
                out.push(child(item, state)?);
            }
            dst.replace(out);
        }

        (Value::Object(src), Value::Object(dst))
        | (Value::Arguments(src), Value::Arguments(dst)) => {
            let props = src.snapshot();
            let mut out = Properties::with_capacity(props.len());
            for (key, value) in &props {
                out.insert(key.clone(), child(value, state)?);
            }
            dst.replace(out);
        }

        // Keys are never duplicated
        (Value::Map(src), Value::Map(dst)) => {
            let entries = src.snapshot();
            let mut out = MapEntries::with_capacity(entries.len());
            for (key, value) in &entries {
                out.insert(key.clone(), child(value, state)?);
            }
            dst.replace(out);
        }

        (Value::Set(src), Value::Set(dst)) => {
            let members = src.snapshot();
            let mut out = SetMembers::with_capacity(members.len());
            for member in &members {
                out.insert(MapKey::from(child(&member.0, state)?));
            }
            dst.replace(out);
        }

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copy::seed;

    fn fill_fresh(source: &Value, depth: Depth) -> Value {
        let seed = seed::build(source);
        let mut state = CopyState::new(false);
        fill(&Duplicator::default(), source, &seed, depth, 0, &mut state).unwrap();
        seed
    }

    #[test]
    fn test_shallow_fill_keeps_references() {
        let inner = Value::array(vec![]);
        let src = Value::object([("inner", inner.clone())]);
        let copy = fill_fresh(&src, Depth::Shallow);
        assert!(copy.get("inner").unwrap().same_value(&inner));
    }

    #[test]
    fn test_deep_fill_copies_children() {
        let inner = Value::array(vec![Value::from(1)]);
        let src = Value::set([inner.clone()]);
        let copy = fill_fresh(&src, Depth::Deep);
        assert_eq!(copy, src);
        assert!(!copy.set_has(&inner));
    }

    #[test]
    fn test_map_keys_shared() {
        let key = Value::object([("id", Value::from(1))]);
        let src = Value::map([(key.clone(), Value::from(vec![1]))]);
        let copy = fill_fresh(&src, Depth::Deep);
        assert!(copy.map_get(&key).is_some());
        assert!(!copy.map_get(&key).unwrap().same_value(&src.map_get(&key).unwrap()));
    }

    #[test]
    fn test_boxes_left_alone() {
        let src = Value::number_box(1.0);
        let copy = fill_fresh(&src, Depth::Deep);
        assert_eq!(copy, src);
    }
}
