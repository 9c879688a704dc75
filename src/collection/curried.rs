//! Curried collection operations
//!
//! Each `*_flow` builder takes the non-collection arguments up front and
//! returns a function awaiting the collection. Builders capture their
//! arguments once; the returned functions can be called any number of times
//! and slot straight into [`flow!`](crate::flow):
//!
//! ```
//! use pathflow::{flow, map_flow, chunk_flow, join_flow};
//! use serde_json::json;
//!
//! let shout = flow!(
//!     map_flow(|v| json!(v.as_str().unwrap_or_default().to_uppercase())),
//!     join_flow(" "),
//! );
//! assert_eq!(shout.call(json!(["a", "b"])), "A B");
//!
//! let pairs = chunk_flow(2);
//! assert_eq!(pairs(json!([1, 2, 3])), json!([[1, 2], [3]]));
//! ```

use std::cmp::Ordering;

use serde_json::Value;

use super::{mutate, query};
use crate::path::Key;

pub fn map_flow<F>(f: F) -> impl Fn(Value) -> Value
where
    F: Fn(&Value) -> Value,
{
    move |coll| Value::Array(query::map(&coll, &f))
}

pub fn reduce_flow<A, F>(f: F, init: A) -> impl Fn(Value) -> A
where
    A: Clone,
    F: Fn(A, &Value) -> A,
{
    move |coll| query::reduce(&coll, &f, init.clone())
}

pub fn filter_flow<P>(pred: P) -> impl Fn(Value) -> Value
where
    P: Fn(&Value) -> bool,
{
    move |coll| Value::Array(query::filter(&coll, &pred))
}

pub fn some_flow<P>(pred: P) -> impl Fn(Value) -> bool
where
    P: Fn(&Value) -> bool,
{
    move |coll| query::some(&coll, &pred)
}

pub fn every_flow<P>(pred: P) -> impl Fn(Value) -> bool
where
    P: Fn(&Value) -> bool,
{
    move |coll| query::every(&coll, &pred)
}

pub fn find_flow<P>(pred: P) -> impl Fn(Value) -> Value
where
    P: Fn(&Value) -> bool,
{
    move |coll| query::find(&coll, &pred)
}

pub fn includes_flow(needle: Value) -> impl Fn(Value) -> bool {
    move |coll| query::includes(&coll, &needle)
}

pub fn join_flow(separator: impl Into<String>) -> impl Fn(Value) -> String {
    let separator = separator.into();
    move |coll| query::join(&coll, &separator)
}

pub fn concat_flow(other: Value) -> impl Fn(Value) -> Value {
    move |coll| Value::Array(query::concat(&coll, &other))
}

pub fn slice_flow(start: isize, end: Option<isize>) -> impl Fn(Value) -> Value {
    move |coll| Value::Array(query::slice(&coll, start, end))
}

pub fn chunk_flow(size: usize) -> impl Fn(Value) -> Value {
    move |coll| Value::Array(query::chunk(&coll, size))
}

pub fn pick_flow(keys: Option<Vec<Key>>) -> impl Fn(Value) -> Value {
    move |obj| query::pick(&obj, keys.as_deref())
}

pub fn omit_flow(keys: Option<Vec<Key>>) -> impl Fn(Value) -> Value {
    move |obj| mutate::omit(obj, keys.as_deref())
}

pub fn sort_flow() -> impl Fn(Value) -> Value {
    mutate::sort
}

pub fn sort_by_flow<F>(cmp: F) -> impl Fn(Value) -> Value
where
    F: Fn(&Value, &Value) -> Ordering,
{
    move |coll| mutate::sort_by(coll, &cmp)
}

pub fn reverse_flow() -> impl Fn(Value) -> Value {
    mutate::reverse
}

pub fn fill_flow(value: Value, start: isize, end: Option<isize>) -> impl Fn(Value) -> Value {
    move |coll| mutate::fill(coll, &value, start, end)
}

pub fn push_flow(items: Vec<Value>) -> impl Fn(Value) -> Value {
    move |coll| mutate::push(coll, items.iter().cloned())
}
