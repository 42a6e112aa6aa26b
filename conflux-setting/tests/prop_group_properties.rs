//! Property-based tests for `PropGroup`.
//!
//! These verify the value contract that every group must satisfy:
//! - JSON round-trip: from_json(g.to_json_string()) == g
//! - Column round-trip: of_columns(cs).to_columns() == cs
//! - Cardinality: number_of_elements is the sum of mapping sizes
//! - Equality and hashing agree with the canonical JSON text

use conflux_setting::PropGroup;
use conflux_types::{Column, DataType};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn token_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_\\- \"\\\\]{1,12}").unwrap()
}

fn mapping_strategy() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map(token_strategy(), token_strategy(), 0..5)
}

fn mappings_strategy() -> impl Strategy<Value = Vec<HashMap<String, String>>> {
    prop::collection::vec(mapping_strategy(), 0..6)
}

fn data_type_strategy() -> impl Strategy<Value = DataType> {
    prop::sample::select(DataType::ALL.to_vec())
}

fn column_strategy() -> impl Strategy<Value = Column> {
    (
        any::<i32>(),
        token_strategy(),
        prop::option::of(token_strategy()),
        data_type_strategy(),
    )
        .prop_map(|(order, name, new_name, data_type)| {
            let mut builder = Column::builder().order(order).name(name).data_type(data_type);
            if let Some(new_name) = new_name {
                builder = builder.new_name(new_name);
            }
            builder.build().unwrap()
        })
}

fn hash_of(group: &PropGroup) -> u64 {
    let mut hasher = DefaultHasher::new();
    group.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// ROUND-TRIP PROPERTIES
// =============================================================================

proptest! {
    /// Any group survives a trip through its JSON text.
    #[test]
    fn json_roundtrip(raw in mappings_strategy()) {
        let group = PropGroup::of(raw).unwrap();
        let parsed = PropGroup::from_json(&group.to_json_string()).unwrap();
        prop_assert_eq!(parsed, group);
    }

    /// Columns survive a trip through a group, including defaulted new names.
    #[test]
    fn columns_roundtrip(columns in prop::collection::vec(column_strategy(), 0..6)) {
        let decoded = PropGroup::of_columns(&columns).to_columns().unwrap();
        prop_assert_eq!(&decoded, &columns);
        for (before, after) in columns.iter().zip(&decoded) {
            prop_assert_eq!(before.name() == before.new_name(), after.name() == after.new_name());
        }
    }
}

// =============================================================================
// CARDINALITY PROPERTIES
// =============================================================================

proptest! {
    /// Empty mappings vanish; everything else is counted.
    #[test]
    fn cardinality(raw in mappings_strategy()) {
        let non_empty: Vec<usize> = raw.iter().map(HashMap::len).filter(|n| *n > 0).collect();
        let group = PropGroup::of(raw).unwrap();

        prop_assert_eq!(group.size(), non_empty.len());
        prop_assert_eq!(group.number_of_elements(), non_empty.iter().sum::<usize>());
        prop_assert!(group.size() <= group.number_of_elements());
        prop_assert_eq!(
            group.size() == group.number_of_elements(),
            non_empty.iter().all(|n| *n == 1)
        );
    }

    /// A single empty key or value anywhere poisons the whole group.
    #[test]
    fn empty_strings_rejected(
        mut raw in prop::collection::vec(mapping_strategy(), 1..4),
        empty_key in any::<bool>(),
        value in token_strategy(),
    ) {
        let (k, v) = if empty_key {
            (String::new(), value)
        } else {
            (value, String::new())
        };
        raw[0].insert(k, v);
        prop_assert!(PropGroup::of(raw).is_err());
    }
}

// =============================================================================
// EQUALITY PROPERTIES
// =============================================================================

proptest! {
    /// Equality coincides with canonical-text equality and implies equal hashes.
    #[test]
    fn equality_matches_json(a in mappings_strategy(), b in mappings_strategy()) {
        let a = PropGroup::of(a).unwrap();
        let b = PropGroup::of(b).unwrap();
        prop_assert_eq!(a == b, a.to_json_string() == b.to_json_string());
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    /// Rebuilding each mapping with reversed insertion order changes nothing.
    #[test]
    fn inner_order_is_irrelevant(raw in mappings_strategy()) {
        let reversed: Vec<Vec<(String, String)>> = raw
            .iter()
            .map(|m| {
                let mut entries: Vec<(String, String)> =
                    m.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
                entries.sort();
                entries.reverse();
                entries
            })
            .collect();
        let a = PropGroup::of(raw).unwrap();
        let b = PropGroup::of(reversed).unwrap();
        prop_assert_eq!(hash_of(&a), hash_of(&b));
        prop_assert_eq!(a, b);
    }

    /// Swapping two distinct mappings breaks equality.
    #[test]
    fn outer_order_matters(x in mapping_strategy(), y in mapping_strategy()) {
        let a = PropGroup::of(vec![x.clone(), y.clone()]).unwrap();
        let b = PropGroup::of(vec![y.clone(), x.clone()]).unwrap();
        let distinct = !x.is_empty() && !y.is_empty() && x != y;
        if distinct {
            prop_assert_ne!(a, b);
        }
    }
}
