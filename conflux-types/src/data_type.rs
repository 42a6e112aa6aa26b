//! Column data types.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The type of a column in a row schema.
///
/// The wire name of each variant is its uppercase identifier (`"STRING"`,
/// `"INT"`, ...). Parsing accepts any casing, including through serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum DataType {
    Bytes,
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    Row,
    Object,
}

impl DataType {
    /// Every variant, in declaration order.
    pub const ALL: [DataType; 11] = [
        DataType::Bytes,
        DataType::Boolean,
        DataType::Byte,
        DataType::Short,
        DataType::Int,
        DataType::Long,
        DataType::Float,
        DataType::Double,
        DataType::String,
        DataType::Row,
        DataType::Object,
    ];

    /// Returns the uppercase wire name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            DataType::Bytes => "BYTES",
            DataType::Boolean => "BOOLEAN",
            DataType::Byte => "BYTE",
            DataType::Short => "SHORT",
            DataType::Int => "INT",
            DataType::Long => "LONG",
            DataType::Float => "FLOAT",
            DataType::Double => "DOUBLE",
            DataType::String => "STRING",
            DataType::Row => "ROW",
            DataType::Object => "OBJECT",
        }
    }

    /// Parses a type name, ignoring case.
    pub fn parse(s: &str) -> Result<Self> {
        let upper = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|t| t.name() == upper)
            .ok_or_else(|| Error::invalid(format!("unknown data type: {s:?}")))
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DataType {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}
