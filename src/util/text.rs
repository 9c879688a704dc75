//! Loose string rendering of values
//!
//! Strings render raw (no quotes), nil renders empty, sequences render their
//! elements comma-separated, mappings render as compact JSON.

use std::borrow::Cow;

use serde_json::Value;

pub fn render(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(|item| render(item))
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Owned(value.to_string()),
    }
}
