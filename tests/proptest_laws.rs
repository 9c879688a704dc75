//! Property-based tests for pathflow
//!
//! Uses proptest to check the laws the path engine and composer promise:
//! - set then get returns what was written
//! - the empty flow is the identity
//! - chunking never loses or reorders elements
//! - paths survive display and parse

use pathflow::{chunk, flow, get, omit, pick, set, Key, Path};
use proptest::prelude::*;
use serde_json::Value;

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z0-9]{1,3}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        (0usize..4).prop_map(Key::Index),
        "[a-z0-9]{1,3}".prop_map(Key::Field),
    ]
}

prop_compose! {
    /// Non-empty paths mixing indexes and field names (numeric names included)
    fn arb_path()(keys in prop::collection::vec(arb_key(), 1..5)) -> Path {
        Path::from(keys)
    }
}

prop_compose! {
    /// Paths whose text form is unambiguous (fields never look numeric)
    fn arb_printable_path()(
        keys in prop::collection::vec(
            prop_oneof![
                (0usize..100).prop_map(Key::Index),
                "[a-z_][a-z0-9_]{0,6}".prop_map(Key::Field),
            ],
            0..6,
        )
    ) -> Path {
        Path::from(keys)
    }
}

proptest! {
    /// Property: whatever `set` writes, `get` reads back
    #[test]
    fn test_set_then_get_round_trip(container in arb_json(), path in arb_path(), value in arb_json()) {
        let mut container = container;
        set(&mut container, &path, value.clone());
        prop_assert_eq!(get(&container, &path, Value::Null), value);
    }

    /// Property: the empty flow changes nothing
    #[test]
    fn test_flow_identity(value in arb_json()) {
        let id = flow!();
        prop_assert_eq!(id.call(value.clone()), value);
    }

    /// Property: chunks concatenate back to the original sequence
    #[test]
    fn test_chunk_preserves_elements(items in prop::collection::vec(arb_json(), 0..12), size in 1usize..5) {
        let chunks = chunk(&Value::Array(items.clone()), size);
        let mut rejoined = Vec::new();
        for part in &chunks {
            let part = part.as_array().cloned().unwrap_or_default();
            prop_assert!(!part.is_empty() && part.len() <= size);
            rejoined.extend(part);
        }
        prop_assert_eq!(rejoined, items);
    }

    /// Property: pick and omit split a mapping's keys between them
    #[test]
    fn test_pick_omit_partition(
        map in prop::collection::btree_map("[a-z]{1,3}", any::<i64>(), 0..6),
        chosen in prop::collection::vec("[a-z]{1,3}", 0..4),
    ) {
        let obj = Value::Object(map.iter().map(|(k, v)| (k.clone(), Value::from(*v))).collect());
        let keys: Vec<Key> = chosen.iter().map(|k| Key::from(k.as_str())).collect();

        let picked = pick(&obj, Some(&keys));
        let rest = omit(obj.clone(), Some(&keys));

        for (k, v) in &map {
            let in_picked = picked.get(k).filter(|p| !p.is_null()).is_some();
            let in_rest = rest.get(k).is_some();
            prop_assert!(in_picked != in_rest, "key {} in both or neither", k);
            prop_assert_eq!(
                picked.get(k).or_else(|| rest.get(k)),
                Some(&Value::from(*v))
            );
        }
    }

    /// Property: a path prints as text that parses back to itself
    #[test]
    fn test_path_display_parse(path in arb_printable_path()) {
        let text = path.to_string();
        prop_assert_eq!(Path::parse(&text), Ok(path));
    }
}
