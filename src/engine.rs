//! Path engine: deep get / set / update on nested values
//!
//! Reads are nil-safe at every step: a missing key, a `null`, or a leaf in the
//! middle of a path all resolve to nil instead of failing. Writes build the
//! missing structure on the way down, always as mappings.
//!
//! Each operation comes in two shapes:
//! - direct: `get(&value, &path, default)`, `set(&mut value, &path, v)`
//! - curried: `get_flow(path, default)` returns `Fn(Value) -> Value`, ready
//!   to drop into a [`flow!`](crate::flow) pipeline and reuse.

use serde_json::{Map, Value};
use tracing::trace;

use crate::compose::Flow;
use crate::path::{Key, Path};
use crate::predicates::is_nil;
use crate::util::constants::MAX_SEQUENCE_GAP;

/// Resolve one key against `value`, nil-safe
pub(crate) fn step<'v>(value: &'v Value, key: &Key) -> Option<&'v Value> {
    match value {
        Value::Array(items) => items.get(key.as_index()?),
        Value::Object(map) => map.get(key.as_field().as_ref()),
        _ => None,
    }
}

fn step_mut<'v>(value: &'v mut Value, key: &Key) -> Option<&'v mut Value> {
    match value {
        Value::Array(items) => items.get_mut(key.as_index()?),
        Value::Object(map) => map.get_mut(key.as_field().as_ref()),
        _ => None,
    }
}

/// Borrow the value at `path`, if every step resolves
pub fn get_ref<'v>(container: &'v Value, path: &Path) -> Option<&'v Value> {
    path.iter().try_fold(container, step)
}

/// Read the value at `path`, falling back to `default` when it is nil
///
/// A nil `container` is replaced by `default` BEFORE the walk, so a non-empty
/// path is then resolved inside `default` itself.
pub fn get(container: &Value, path: &Path, default: Value) -> Value {
    let root = if is_nil(container) { &default } else { container };
    let found = get_ref(root, path).filter(|v| !is_nil(v)).cloned();
    found.unwrap_or(default)
}

/// Curried [`get`]
pub fn get_flow(path: impl Into<Path>, default: Value) -> impl Fn(Value) -> Value {
    let path = path.into();
    move |container| get(&container, &path, default.clone())
}

/// Write `value` at `path`, creating missing intermediate mappings
///
/// Returns the root. An empty path replaces the root with `value`.
pub fn set<'c>(container: &'c mut Value, path: &Path, value: Value) -> &'c mut Value {
    set_in(container, path.keys(), value);
    container
}

fn set_in(node: &mut Value, keys: &[Key], value: Value) {
    let Some((key, rest)) = keys.split_first() else {
        *node = value;
        return;
    };

    let Some(slot) = slot_mut(node, key) else {
        return;
    };
    if rest.is_empty() {
        *slot = value;
    } else {
        set_in(slot, rest, value);
    }
}

/// The child slot for `key`, created as nil if absent
///
/// Sequences are padded with nil up to [`MAX_SEQUENCE_GAP`] slots past their
/// end; an index beyond that goes through the mapping branch.
fn slot_mut<'v>(node: &'v mut Value, key: &Key) -> Option<&'v mut Value> {
    let seq_idx = key.as_index().filter(|&idx| {
        matches!(node, Value::Array(items) if idx.saturating_sub(items.len()) <= MAX_SEQUENCE_GAP)
    });
    match (node, seq_idx) {
        (Value::Array(items), Some(idx)) => {
            if idx >= items.len() {
                trace!(index = idx, len = items.len(), "padding sequence with nil");
                items.resize(idx + 1, Value::Null);
            }
            items.get_mut(idx)
        }
        (node, _) => {
            ensure_mapping(node, key).map(|map| map.entry(key.as_field()).or_insert(Value::Null))
        }
    }
}

/// Turn `node` into a mapping in place
///
/// Sequences keep their elements under stringified indexes; anything else
/// that cannot hold `key` is replaced by an empty mapping.
fn ensure_mapping<'v>(node: &'v mut Value, key: &Key) -> Option<&'v mut Map<String, Value>> {
    if !node.is_object() {
        let map = match std::mem::take(node) {
            Value::Array(items) => {
                trace!(%key, len = items.len(), "converting sequence to mapping");
                items
                    .into_iter()
                    .enumerate()
                    .map(|(idx, item)| (idx.to_string(), item))
                    .collect()
            }
            other => {
                trace!(%key, replaced = %other, "creating intermediate mapping");
                Map::new()
            }
        };
        *node = Value::Object(map);
    }
    node.as_object_mut()
}

/// Curried [`set`] working on owned values
pub fn set_flow(path: impl Into<Path>, value: Value) -> impl Fn(Value) -> Value {
    let path = path.into();
    move |mut container| {
        set(&mut container, &path, value.clone());
        container
    }
}

/// Move the value at `path` out of `container`, leaving nil behind
fn take_at(container: &mut Value, path: &Path) -> Value {
    path.iter()
        .try_fold(container, step_mut)
        .map(std::mem::take)
        .unwrap_or_default()
}

/// Replace the value at `path` with `transform(current)`
///
/// `transform` sees the raw current value: nil when absent, no default.
pub fn update<'c, F>(container: &'c mut Value, path: &Path, transform: F) -> &'c mut Value
where
    F: FnOnce(Value) -> Value,
{
    let current = take_at(container, path);
    set(container, path, transform(current))
}

/// [`update`] with extra positional arguments handed to `transform`
pub fn update_with_args<'c, F>(
    container: &'c mut Value,
    path: &Path,
    transform: F,
    args: &[Value],
) -> &'c mut Value
where
    F: FnOnce(Value, &[Value]) -> Value,
{
    update(container, path, |current| transform(current, args))
}

/// Curried [`update`]: read, transform and write back as one flow
pub fn update_flow<F>(path: impl Into<Path>, transform: F) -> impl Fn(Value) -> Value
where
    F: Fn(Value) -> Value + 'static,
{
    update_flow_with_args(path, move |current, _| transform(current), Vec::new())
}

/// Curried [`update_with_args`]; `args` are captured once and reused
pub fn update_flow_with_args<F>(
    path: impl Into<Path>,
    transform: F,
    args: Vec<Value>,
) -> impl Fn(Value) -> Value
where
    F: Fn(Value, &[Value]) -> Value + 'static,
{
    let read_path = path.into();
    let write_path = read_path.clone();

    Flow::new(move |mut container: Value| {
        let current = take_at(&mut container, &read_path);
        (container, current)
    })
    .then(move |(container, current)| (container, transform(current, &args)))
    .then(move |(mut container, next)| {
        set(&mut container, &write_path, next);
        container
    })
    .into_fn()
}
