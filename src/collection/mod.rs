//! Collection operations over sequences and mappings
//!
//! Every operation classifies its input once through [`Items::of`]:
//! - sequences yield their elements
//! - mappings yield entry pairs `[key, value]`
//! - nil takes the operation's documented fallback
//! - other leaves read as an empty collection
//!
//! Readers (`query`) never touch their input. Writers (`mutate`) take the
//! container by value and hand the same container back, changed in place.
//! `curried` holds the `*_flow` forms used inside [`flow!`](crate::flow).

use std::borrow::Cow;

use serde_json::{Map, Value};

pub mod curried;
pub mod mutate;
pub mod query;

pub use curried::*;
pub use mutate::{fill, omit, push, reverse, sort, sort_by};
pub use query::{chunk, concat, every, filter, find, includes, join, map, pick, reduce, slice, some};

/// A collection-like value, classified once
#[derive(Debug, Clone, Copy)]
pub enum Items<'a> {
    Nil,
    Seq(&'a [Value]),
    Map(&'a Map<String, Value>),
    /// A non-nil leaf: readers treat it as empty
    Scalar(&'a Value),
}

impl<'a> Items<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Null => Items::Nil,
            Value::Array(items) => Items::Seq(items),
            Value::Object(map) => Items::Map(map),
            other => Items::Scalar(other),
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Items::Nil)
    }

    pub fn len(&self) -> usize {
        match self {
            Items::Seq(items) => items.len(),
            Items::Map(map) => map.len(),
            Items::Nil | Items::Scalar(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements, or entry pairs for mappings
    pub fn iter(&self) -> impl Iterator<Item = Cow<'a, Value>> + 'a {
        let (seq, map): (&'a [Value], Option<&'a Map<String, Value>>) = match *self {
            Items::Seq(items) => (items, None),
            Items::Map(map) => (&[], Some(map)),
            Items::Nil | Items::Scalar(_) => (&[], None),
        };

        seq.iter().map(Cow::Borrowed).chain(
            map.into_iter()
                .flat_map(|map| map.iter().map(|(k, v)| Cow::Owned(entry_pair(k, v)))),
        )
    }
}

/// `[key, value]` as a JSON pair
pub fn entry_pair(key: &str, value: &Value) -> Value {
    Value::Array(vec![Value::String(key.to_string()), value.clone()])
}

/// Split a `[key, value]` pair; anything else is rejected
pub(crate) fn split_pair(pair: Value) -> Option<(String, Value)> {
    let Value::Array(kv) = pair else {
        return None;
    };
    if kv.len() != 2 {
        return None;
    }
    let mut kv = kv.into_iter();
    match (kv.next(), kv.next()) {
        (Some(Value::String(key)), Some(value)) => Some((key, value)),
        _ => None,
    }
}

/// Resolve a possibly negative offset against `len`, clamped to `0..=len`
pub(crate) fn clamp_offset(offset: isize, len: usize) -> usize {
    if offset < 0 {
        len.saturating_sub(offset.unsigned_abs())
    } else {
        offset.unsigned_abs().min(len)
    }
}

/// `start..end` with negative offsets counted from the end; empty when inverted
pub(crate) fn resolve_range(start: isize, end: Option<isize>, len: usize) -> std::ops::Range<usize> {
    let start = clamp_offset(start, len);
    let end = end.map_or(len, |end| clamp_offset(end, len));
    start..end.max(start)
}
