//! Read-only collection operations
//!
//! None of these modify their input. Nil fallbacks:
//! - `map`, `filter`, `slice`, `chunk` → empty sequence
//! - `reduce` → the initial accumulator
//! - `some`, `every`, `includes` → `false`
//! - `find` → nil
//! - `join` → empty string
//! - `pick` → empty mapping
//! - `concat` → nil wrapped as a singleton

use serde_json::{Map, Value};

use super::{resolve_range, Items};
use crate::engine::step;
use crate::path::Key;
use crate::util::text::render;

pub fn map<F>(coll: &Value, mut f: F) -> Vec<Value>
where
    F: FnMut(&Value) -> Value,
{
    Items::of(coll).iter().map(|item| f(&item)).collect()
}

/// Left fold seeded with `init`
pub fn reduce<A, F>(coll: &Value, mut f: F, init: A) -> A
where
    F: FnMut(A, &Value) -> A,
{
    Items::of(coll).iter().fold(init, |acc, item| f(acc, &item))
}

pub fn filter<P>(coll: &Value, mut pred: P) -> Vec<Value>
where
    P: FnMut(&Value) -> bool,
{
    Items::of(coll)
        .iter()
        .filter(|item| pred(item))
        .map(|item| item.into_owned())
        .collect()
}

pub fn some<P>(coll: &Value, mut pred: P) -> bool
where
    P: FnMut(&Value) -> bool,
{
    Items::of(coll).iter().any(|item| pred(&item))
}

/// True when every element matches; nil is `false`, an empty sequence `true`
pub fn every<P>(coll: &Value, mut pred: P) -> bool
where
    P: FnMut(&Value) -> bool,
{
    let items = Items::of(coll);
    !items.is_nil() && items.iter().all(|item| pred(&item))
}

/// First matching element, or nil
pub fn find<P>(coll: &Value, mut pred: P) -> Value
where
    P: FnMut(&Value) -> bool,
{
    Items::of(coll)
        .iter()
        .find(|item| pred(item))
        .map(|item| item.into_owned())
        .unwrap_or_default()
}

/// Membership by equality; mappings are searched by entry pair
pub fn includes(coll: &Value, needle: &Value) -> bool {
    Items::of(coll).iter().any(|item| *item == *needle)
}

pub fn join(coll: &Value, separator: &str) -> String {
    Items::of(coll)
        .iter()
        .map(|item| render(&item).into_owned())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Append `other` to `coll`
///
/// A `coll` that is not a sequence (nil included) is wrapped as a singleton
/// first. A sequence `other` is spread, anything else appended whole.
pub fn concat(coll: &Value, other: &Value) -> Vec<Value> {
    let mut out = match coll {
        Value::Array(items) => items.clone(),
        single => vec![single.clone()],
    };
    match other {
        Value::Array(more) => out.extend(more.iter().cloned()),
        single => out.push(single.clone()),
    }
    out
}

/// Elements in `start..end`; negative offsets count from the end
pub fn slice(coll: &Value, start: isize, end: Option<isize>) -> Vec<Value> {
    let items = Items::of(coll);
    let range = resolve_range(start, end, items.len());
    items
        .iter()
        .skip(range.start)
        .take(range.len())
        .map(|item| item.into_owned())
        .collect()
}

/// Split into sequences of `size`; the last one may be shorter
///
/// A zero `size` or an empty input yields no chunks.
pub fn chunk(coll: &Value, size: usize) -> Vec<Value> {
    if size == 0 {
        return Vec::new();
    }
    let items: Vec<Value> = Items::of(coll).iter().map(|item| item.into_owned()).collect();
    items
        .chunks(size)
        .map(|part| Value::Array(part.to_vec()))
        .collect()
}

/// A new mapping holding only `keys`
///
/// Listed keys missing from `obj` are kept with a nil value. A nil `obj` or
/// missing key list gives an empty mapping.
pub fn pick(obj: &Value, keys: Option<&[Key]>) -> Value {
    let (false, Some(keys)) = (obj.is_null(), keys) else {
        return Value::Object(Map::new());
    };

    let picked = keys
        .iter()
        .map(|key| {
            let value = step(obj, key).cloned().unwrap_or_default();
            (key.as_field().into_owned(), value)
        })
        .collect();
    Value::Object(picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_i64(v: &Value) -> i64 {
        v.as_i64().unwrap_or(0)
    }

    #[test]
    fn map_sequence() {
        let out = map(&json!([1, 2, 3, 4, 5]), |x| json!(as_i64(x) + 1));
        assert_eq!(out, vec![json!(2), json!(3), json!(4), json!(5), json!(6)]);
    }

    #[test]
    fn map_mapping_sees_pairs() {
        let out = map(&json!({"a": 1, "b": 2}), |pair| pair[0].clone());
        assert_eq!(out, vec![json!("a"), json!("b")]);
    }

    #[test]
    fn map_nil_is_empty() {
        assert!(map(&Value::Null, |x| x.clone()).is_empty());
    }

    #[test]
    fn reduce_sequence_and_mapping() {
        assert_eq!(reduce(&json!([1, 2, 3, 4, 5]), |acc, x| acc + as_i64(x), 0), 15);
        assert_eq!(reduce(&json!({"a": 1, "b": 2, "c": 3}), |acc, pair| acc + as_i64(&pair[1]), 0), 6);
        assert_eq!(reduce(&Value::Null, |acc, _| acc + 1, 42), 42);
    }

    #[test]
    fn filter_keeps_matches() {
        let evens = filter(&json!([1, 2, 3, 4]), |x| as_i64(x) % 2 == 0);
        assert_eq!(evens, vec![json!(2), json!(4)]);

        let big = filter(&json!({"a": 1, "b": 20}), |pair| as_i64(&pair[1]) > 10);
        assert_eq!(big, vec![json!(["b", 20])]);

        assert!(filter(&Value::Null, |_| true).is_empty());
    }

    #[test]
    fn some_every_fallbacks() {
        assert!(some(&json!([1, 5]), |x| as_i64(x) > 4));
        assert!(!some(&Value::Null, |_| true));

        assert!(every(&json!([1, 5]), |x| as_i64(x) > 0));
        assert!(every(&json!([]), |_| false));
        assert!(!every(&Value::Null, |_| true));
    }

    #[test]
    fn find_first_match() {
        assert_eq!(find(&json!([1, 5, 7]), |x| as_i64(x) > 4), json!(5));
        assert_eq!(find(&json!([1]), |x| as_i64(x) > 4), Value::Null);
        assert_eq!(find(&Value::Null, |_| true), Value::Null);
    }

    #[test]
    fn includes_by_equality() {
        assert!(includes(&json!([1, "a"]), &json!("a")));
        assert!(!includes(&json!([1, "a"]), &json!("b")));
        assert!(includes(&json!({"k": 1}), &json!(["k", 1])));
        assert!(!includes(&Value::Null, &Value::Null));
    }

    #[test]
    fn join_renders_loosely() {
        assert_eq!(join(&json!(["a", 1, null, true]), "-"), "a-1--true");
        assert_eq!(join(&Value::Null, ","), "");
    }

    #[test]
    fn concat_wraps_non_sequences() {
        assert_eq!(concat(&Value::Null, &json!([2, 4])), vec![json!(null), json!(2), json!(4)]);
        assert_eq!(concat(&json!([1]), &json!(2)), vec![json!(1), json!(2)]);
        assert_eq!(concat(&json!([1]), &json!([[2]])), vec![json!(1), json!([2])]);
    }

    #[test]
    fn slice_offsets() {
        let coll = json!([1, 2, 3, 4, 5]);
        assert_eq!(slice(&coll, 1, Some(3)), vec![json!(2), json!(3)]);
        assert_eq!(slice(&coll, -2, None), vec![json!(4), json!(5)]);
        assert!(slice(&coll, 3, Some(1)).is_empty());
        assert!(slice(&Value::Null, 0, None).is_empty());
    }

    #[test]
    fn chunk_sizes() {
        assert_eq!(
            chunk(&json!([1, 2, 3, 4, 5]), 3),
            vec![json!([1, 2, 3]), json!([4, 5])]
        );
        assert!(chunk(&json!([]), 2).is_empty());
        assert!(chunk(&json!([1, 2]), 0).is_empty());
        assert!(chunk(&Value::Null, 2).is_empty());
        assert_eq!(chunk(&json!({"a": 1, "b": 2}), 1), vec![json!([["a", 1]]), json!([["b", 2]])]);
    }

    #[test]
    fn pick_listed_keys() {
        let obj = json!({"a": 1, "b": {"c": {"d": 1}}, "e": "3"});
        let keys = [Key::from("a"), Key::from("e")];
        assert_eq!(pick(&obj, Some(&keys)), json!({"a": 1, "e": "3"}));

        let keys = [Key::from("a"), Key::from("zz")];
        assert_eq!(pick(&obj, Some(&keys)), json!({"a": 1, "zz": null}));
    }

    #[test]
    fn pick_nil_inputs() {
        let keys = [Key::from("a")];
        assert_eq!(pick(&Value::Null, Some(&keys)), json!({}));
        assert_eq!(pick(&json!({"a": 1}), None), json!({}));
    }
}
