//! Grouped string properties.
//!
//! A [`PropGroup`] is an ordered list of property mappings. Each mapping is a
//! non-empty set of string→string entries. The JSON form is an array of
//! objects:
//!
//! ```json
//! [{"order":"1","name":"a","newName":"a","dataType":"STRING"}]
//! ```
//!
//! Inner mappings are kept in sorted maps, so the serialized text is
//! canonical: two groups holding the same entries in the same outer order
//! render identically regardless of how the entries were inserted. Equality
//! and hashing are therefore the same as comparing canonical JSON strings.

use crate::keys::{COLUMN_DATA_TYPE_KEY, COLUMN_NAME_KEY, COLUMN_NEW_NAME_KEY, ORDER_KEY};
use conflux_types::{Column, DataType, Error, Result};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, trace};

/// One property mapping inside a [`PropGroup`].
pub type Props = BTreeMap<String, String>;

/// An immutable, ordered list of non-empty property mappings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Vec<Props>")]
pub struct PropGroup {
    values: Vec<Props>,
}

impl PropGroup {
    /// Builds a group from raw mappings.
    ///
    /// Empty mappings are dropped. Every key and value of the remaining
    /// mappings must be non-empty, and a key may appear only once per mapping.
    pub fn of<I, M, K, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = M>,
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut kept = Vec::new();
        let mut dropped = 0usize;
        for (index, raw) in values.into_iter().enumerate() {
            let mut props = Props::new();
            for (key, value) in raw {
                let (key, value): (String, String) = (key.into(), value.into());
                if key.is_empty() {
                    return Err(Error::invalid(format!(
                        "empty key in property mapping {index}"
                    )));
                }
                if value.is_empty() {
                    return Err(Error::invalid(format!(
                        "empty value for {key:?} in property mapping {index}"
                    )));
                }
                if props.contains_key(&key) {
                    return Err(Error::invalid(format!(
                        "duplicate key {key:?} in property mapping {index}"
                    )));
                }
                props.insert(key, value);
            }
            if props.is_empty() {
                dropped += 1;
                continue;
            }
            kept.push(props);
        }
        if dropped > 0 {
            debug!(dropped, kept = kept.len(), "Dropped empty property mappings");
        }
        Ok(Self { values: kept })
    }

    /// Parses a JSON array of objects whose members are all strings.
    pub fn from_json(json: &str) -> Result<Self> {
        let Value::Array(items) = serde_json::from_str::<Value>(json)? else {
            return Err(Error::invalid("property group must be a JSON array"));
        };
        let mut groups = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let Value::Object(object) = item else {
                trace!(index, "Rejected non-object property mapping");
                return Err(Error::invalid(format!(
                    "element {index} of property group is not a JSON object"
                )));
            };
            let mut props = Props::new();
            for (key, value) in object {
                match value {
                    Value::String(s) => {
                        props.insert(key, s);
                    }
                    other => {
                        return Err(Error::invalid(format!(
                            "value of {key:?} in element {index} is not a string: {other}"
                        )));
                    }
                }
            }
            groups.push(props);
        }
        Self::of(groups)
    }

    /// Encodes a single column.
    pub fn of_column(column: &Column) -> Self {
        Self::of_columns(std::slice::from_ref(column))
    }

    /// Encodes each column as one four-entry mapping.
    pub fn of_columns(columns: &[Column]) -> Self {
        // column_props never yields an empty key or value, so no validation pass.
        Self {
            values: columns.iter().map(column_props).collect(),
        }
    }

    /// Decodes every mapping as a column.
    pub fn to_columns(&self) -> Result<Vec<Column>> {
        self.values
            .iter()
            .enumerate()
            .map(|(index, props)| {
                to_column(props).map_err(|e| {
                    debug!(index, error = %e, "Property mapping is not a column");
                    e
                })
            })
            .collect()
    }

    /// Returns a copy of the mapping at `index`.
    pub fn props(&self, index: usize) -> Result<Props> {
        self.values
            .get(index)
            .cloned()
            .ok_or(Error::OutOfBounds {
                index,
                size: self.values.len(),
            })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of mappings.
    #[must_use]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Total number of entries across all mappings.
    #[must_use]
    pub fn number_of_elements(&self) -> usize {
        self.values.iter().map(BTreeMap::len).sum()
    }

    /// The backing mappings. Read-only, so no copy is made.
    #[must_use]
    pub fn raw(&self) -> &[Props] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Props> {
        self.values.iter()
    }

    /// Renders the canonical JSON text.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.to_string()
    }
}

/// Projects a column onto the canonical setting keys.
pub fn column_props(column: &Column) -> Props {
    Props::from([
        (ORDER_KEY.to_string(), column.order().to_string()),
        (COLUMN_NAME_KEY.to_string(), column.name().to_string()),
        (COLUMN_NEW_NAME_KEY.to_string(), column.new_name().to_string()),
        (
            COLUMN_DATA_TYPE_KEY.to_string(),
            column.data_type().name().to_string(),
        ),
    ])
}

fn required<'a>(props: &'a Props, key: &str) -> Result<&'a str> {
    props
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| Error::invalid(format!("column is missing {key:?}")))
}

fn to_column(props: &Props) -> Result<Column> {
    let order_text = required(props, ORDER_KEY)?;
    let order: i32 = order_text.parse().map_err(|e| {
        Error::invalid(format!("{ORDER_KEY} {order_text:?} is not an integer: {e}"))
    })?;
    let name = required(props, COLUMN_NAME_KEY)?;
    let new_name = props
        .get(COLUMN_NEW_NAME_KEY)
        .map_or(name, String::as_str);
    let data_type = DataType::parse(required(props, COLUMN_DATA_TYPE_KEY)?)?;
    Column::builder()
        .order(order)
        .name(name)
        .new_name(new_name)
        .data_type(data_type)
        .build()
}

impl fmt::Display for PropGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.values).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl Serialize for PropGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

impl TryFrom<Vec<Props>> for PropGroup {
    type Error = Error;

    fn try_from(values: Vec<Props>) -> Result<Self> {
        Self::of(values)
    }
}

impl<'a> IntoIterator for &'a PropGroup {
    type Item = &'a Props;
    type IntoIter = std::slice::Iter<'a, Props>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
