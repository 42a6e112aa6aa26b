//! Property-based tests for the schema and row types.
//!
//! These verify the contracts every value must satisfy:
//! - DataType names parse back, in any case, and survive serde
//! - Column serde round-trip, with new_name defaulting to name
//! - Row serde round-trip keeps cell order and tags
//! - A row never holds two cells with the same name

use conflux_types::{Cell, Column, DataType, Row};
use proptest::prelude::*;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_ \"\\\\]{0,11}").unwrap()
}

fn data_type_strategy() -> impl Strategy<Value = DataType> {
    prop::sample::select(DataType::ALL.to_vec())
}

fn column_strategy() -> impl Strategy<Value = (i32, String, Option<String>, DataType)> {
    (
        any::<i32>(),
        name_strategy(),
        prop::option::of(name_strategy()),
        data_type_strategy(),
    )
}

fn cells_strategy() -> impl Strategy<Value = Vec<Cell>> {
    prop::collection::btree_map(name_strategy(), any::<i64>(), 0..6).prop_map(|cells| {
        cells
            .into_iter()
            .map(|(name, value)| Cell::new(name, value).unwrap())
            .collect()
    })
}

// =============================================================================
// DATA TYPE
// =============================================================================

proptest! {
    #[test]
    fn data_type_name_parses_back_in_any_case(
        data_type in data_type_strategy(),
        lower in any::<bool>(),
    ) {
        let text = if lower {
            data_type.name().to_lowercase()
        } else {
            data_type.name().to_string()
        };
        prop_assert_eq!(DataType::parse(&text).unwrap(), data_type);
    }

    #[test]
    fn data_type_serde_roundtrip(data_type in data_type_strategy()) {
        let json = serde_json::to_string(&data_type).unwrap();
        prop_assert_eq!(json.clone(), format!("\"{}\"", data_type.name()));
        let parsed: DataType = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, data_type);
    }
}

// =============================================================================
// COLUMN
// =============================================================================

proptest! {
    #[test]
    fn column_serde_roundtrip((order, name, new_name, data_type) in column_strategy()) {
        let mut builder = Column::builder().order(order).name(name.clone()).data_type(data_type);
        if let Some(new_name) = &new_name {
            builder = builder.new_name(new_name.clone());
        }
        let column = builder.build().unwrap();
        prop_assert_eq!(column.new_name(), new_name.as_deref().unwrap_or(&name));

        let json = serde_json::to_string(&column).unwrap();
        let parsed: Column = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, column);
    }
}

// =============================================================================
// ROW
// =============================================================================

proptest! {
    #[test]
    fn row_serde_roundtrip(
        cells in cells_strategy(),
        tags in prop::collection::vec(name_strategy(), 0..4),
    ) {
        let row = Row::with_tags(tags.clone(), cells.clone()).unwrap();
        prop_assert_eq!(row.cells(), cells.as_slice());
        prop_assert_eq!(row.tags(), tags.as_slice());

        let json = serde_json::to_string(&row).unwrap();
        let parsed: Row = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, row);
    }

    #[test]
    fn row_rejects_repeated_cell_name(cells in cells_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!cells.is_empty());
        let mut cells = cells;
        let repeated = cells[pick.index(cells.len())].clone();
        cells.push(repeated);
        prop_assert!(Row::of(cells).is_err());
    }
}
