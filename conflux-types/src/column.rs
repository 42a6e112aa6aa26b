//! Schema columns.

use crate::{DataType, Error, Result, require_non_empty};
use serde::{Deserialize, Serialize};

/// One field of a row schema.
///
/// `name` is the field name as produced upstream; `new_name` is the name it
/// should carry downstream. The two are equal unless a rename was requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ColumnFields")]
pub struct Column {
    order: i32,
    name: String,
    new_name: String,
    data_type: DataType,
}

impl Column {
    /// Starts building a column.
    #[must_use]
    pub fn builder() -> ColumnBuilder {
        ColumnBuilder::default()
    }

    #[must_use]
    pub fn order(&self) -> i32 {
        self.order
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    #[must_use]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }
}

/// Builder for [`Column`].
///
/// `new_name` falls back to `name` when never set.
#[derive(Debug, Clone, Default)]
pub struct ColumnBuilder {
    order: i32,
    name: Option<String>,
    new_name: Option<String>,
    data_type: Option<DataType>,
}

impl ColumnBuilder {
    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn new_name(mut self, new_name: impl Into<String>) -> Self {
        self.new_name = Some(new_name.into());
        self
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    /// Validates and builds the column.
    pub fn build(self) -> Result<Column> {
        let name = self
            .name
            .ok_or_else(|| Error::invalid("column name is required"))?;
        require_non_empty(&name, "column name")?;
        let new_name = match self.new_name {
            Some(new_name) => {
                require_non_empty(&new_name, "column new name")?;
                new_name
            }
            None => name.clone(),
        };
        let data_type = self
            .data_type
            .ok_or_else(|| Error::invalid(format!("data type of column {name:?} is required")))?;
        Ok(Column {
            order: self.order,
            name,
            new_name,
            data_type,
        })
    }
}

/// Unvalidated serde shape of a column.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColumnFields {
    #[serde(default)]
    order: i32,
    name: String,
    #[serde(default)]
    new_name: Option<String>,
    data_type: DataType,
}

impl TryFrom<ColumnFields> for Column {
    type Error = Error;

    fn try_from(fields: ColumnFields) -> Result<Self> {
        let mut builder = Column::builder()
            .order(fields.order)
            .name(fields.name)
            .data_type(fields.data_type);
        if let Some(new_name) = fields.new_name {
            builder = builder.new_name(new_name);
        }
        builder.build()
    }
}
