//! In-place collection operations
//!
//! Each takes the container by value, changes it, and returns that same
//! container. Mappings are treated as ordered entry lists: `sort` and
//! `reverse` reorder entries, `fill` overwrites values, `push` appends pairs.
//! Without the `preserve_order` feature mappings keep key order regardless.

use std::cmp::Ordering;

use serde_json::{Map, Value};
use tracing::warn;

use super::{resolve_range, split_pair};
use crate::path::Key;
use crate::util::order::compare_values;

/// Remove `keys` from `obj` and return it
///
/// A nil `obj` or missing key list gives a fresh empty mapping, not `obj`.
/// Omitting an index from a sequence leaves a nil hole in its place.
pub fn omit(mut obj: Value, keys: Option<&[Key]>) -> Value {
    let Some(keys) = keys.filter(|_| !obj.is_null()) else {
        return Value::Object(Map::new());
    };

    match &mut obj {
        Value::Object(map) => {
            for key in keys {
                remove_entry(map, &key.as_field());
            }
        }
        Value::Array(items) => {
            for idx in keys.iter().filter_map(Key::as_index) {
                if let Some(slot) = items.get_mut(idx) {
                    *slot = Value::Null;
                }
            }
        }
        _ => {}
    }
    obj
}

#[cfg(feature = "preserve_order")]
fn remove_entry(map: &mut Map<String, Value>, key: &str) {
    map.shift_remove(key);
}

#[cfg(not(feature = "preserve_order"))]
fn remove_entry(map: &mut Map<String, Value>, key: &str) {
    map.remove(key);
}

/// Sort with the default value ordering
pub fn sort(coll: Value) -> Value {
    sort_by(coll, compare_values)
}

/// Sort with `cmp`; mappings are ordered by comparing entry pairs
pub fn sort_by<F>(coll: Value, mut cmp: F) -> Value
where
    F: FnMut(&Value, &Value) -> Ordering,
{
    match coll {
        Value::Null => Value::Array(Vec::new()),
        Value::Array(mut items) => {
            items.sort_by(|a, b| cmp(a, b));
            Value::Array(items)
        }
        Value::Object(map) => {
            let mut pairs: Vec<Value> = map
                .into_iter()
                .map(|(k, v)| Value::Array(vec![Value::String(k), v]))
                .collect();
            pairs.sort_by(|a, b| cmp(a, b));
            Value::Object(pairs.into_iter().filter_map(split_pair).collect())
        }
        leaf => leaf,
    }
}

pub fn reverse(coll: Value) -> Value {
    match coll {
        Value::Null => Value::Array(Vec::new()),
        Value::Array(mut items) => {
            items.reverse();
            Value::Array(items)
        }
        Value::Object(map) => Value::Object(map.into_iter().rev().collect()),
        leaf => leaf,
    }
}

/// Overwrite positions `start..end` with `value`
pub fn fill(coll: Value, value: &Value, start: isize, end: Option<isize>) -> Value {
    match coll {
        Value::Null => Value::Array(Vec::new()),
        Value::Array(mut items) => {
            let range = resolve_range(start, end, items.len());
            items[range].fill(value.clone());
            Value::Array(items)
        }
        Value::Object(mut map) => {
            let range = resolve_range(start, end, map.len());
            map.values_mut()
                .skip(range.start)
                .take(range.len())
                .for_each(|slot| *slot = value.clone());
            Value::Object(map)
        }
        leaf => leaf,
    }
}

/// Append `items` and return the grown container
///
/// Nil becomes a new sequence; a leaf is wrapped as a singleton first.
/// Mappings accept `[key, value]` pairs and skip anything else.
pub fn push<I>(coll: Value, items: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    match coll {
        Value::Null => Value::Array(items.into_iter().collect()),
        Value::Array(mut seq) => {
            seq.extend(items);
            Value::Array(seq)
        }
        Value::Object(mut map) => {
            for item in items {
                match split_pair(item) {
                    Some((key, value)) => {
                        map.insert(key, value);
                    }
                    None => warn!("push onto a mapping expects [key, value] pairs, skipping item"),
                }
            }
            Value::Object(map)
        }
        leaf => {
            let mut seq = vec![leaf];
            seq.extend(items);
            Value::Array(seq)
        }
    }
}
