//! Type predicates over JSON values

use serde_json::Value;

/// Nil is the single absent sentinel: `null` (a missing key reads as `null`)
pub fn is_nil(value: &Value) -> bool {
    value.is_null()
}

pub fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// Ordered sequences
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Key-value mappings
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// Values a path can descend into: sequences and mappings
pub fn is_indexable(value: &Value) -> bool {
    is_array(value) || is_object(value)
}
