//! Canonical keys of a column encoded inside a [`PropGroup`](crate::PropGroup).
//!
//! These strings are part of the wire format. Changing any of them breaks
//! every stored setting that carries columns.

/// Position of the column in the schema, as decimal text.
pub const ORDER_KEY: &str = "order";

/// Upstream column name.
pub const COLUMN_NAME_KEY: &str = "name";

/// Downstream column name. Optional on input, defaults to the name.
pub const COLUMN_NEW_NAME_KEY: &str = "newName";

/// Uppercase data type name.
pub const COLUMN_DATA_TYPE_KEY: &str = "dataType";

/// All keys written for one column.
pub const COLUMN_KEYS: [&str; 4] = [
    ORDER_KEY,
    COLUMN_NAME_KEY,
    COLUMN_NEW_NAME_KEY,
    COLUMN_DATA_TYPE_KEY,
];
