//! Rows of named cells.
//!
//! A [`Row`] is what connectors produce and consume: an ordered list of
//! [`Cell`]s, each a name paired with an arbitrary JSON value, plus a list
//! of free-form tags. Cell names are unique within a row.

use crate::{Error, Result, require_non_empty};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named value inside a [`Row`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CellFields")]
pub struct Cell {
    name: String,
    value: serde_json::Value,
}

impl Cell {
    /// Creates a cell. The name must be non-empty.
    pub fn new(name: impl Into<String>, value: impl Into<serde_json::Value>) -> Result<Self> {
        let name = name.into();
        require_non_empty(&name, "cell name")?;
        Ok(Self {
            name,
            value: value.into(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }
}

#[derive(Deserialize)]
struct CellFields {
    name: String,
    value: serde_json::Value,
}

impl TryFrom<CellFields> for Cell {
    type Error = Error;

    fn try_from(fields: CellFields) -> Result<Self> {
        Cell::new(fields.name, fields.value)
    }
}

/// An ordered collection of uniquely named cells plus tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RowFields")]
pub struct Row {
    cells: Vec<Cell>,
    tags: Vec<String>,
}

impl Row {
    /// Creates an untagged row.
    pub fn of(cells: impl IntoIterator<Item = Cell>) -> Result<Self> {
        Self::with_tags(Vec::<String>::new(), cells)
    }

    /// Creates a row carrying `tags`. Fails if two cells share a name.
    pub fn with_tags<T: Into<String>>(
        tags: impl IntoIterator<Item = T>,
        cells: impl IntoIterator<Item = Cell>,
    ) -> Result<Self> {
        let cells: Vec<Cell> = cells.into_iter().collect();
        let mut seen = HashSet::with_capacity(cells.len());
        for cell in &cells {
            if !seen.insert(cell.name()) {
                return Err(Error::invalid(format!(
                    "duplicate cell name: {:?}",
                    cell.name()
                )));
            }
        }
        Ok(Self {
            cells,
            tags: tags.into_iter().map(Into::into).collect(),
        })
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at `index`.
    pub fn cell(&self, index: usize) -> Result<&Cell> {
        self.cells.get(index).ok_or(Error::OutOfBounds {
            index,
            size: self.cells.len(),
        })
    }

    /// Looks up a cell by name.
    #[must_use]
    pub fn cell_by_name(&self, name: &str) -> Option<&Cell> {
        self.cells.iter().find(|c| c.name() == name)
    }

    /// Returns the cell names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(Cell::name)
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[derive(Deserialize)]
struct RowFields {
    cells: Vec<Cell>,
    #[serde(default)]
    tags: Vec<String>,
}

impl TryFrom<RowFields> for Row {
    type Error = Error;

    fn try_from(fields: RowFields) -> Result<Self> {
        Row::with_tags(fields.tags, fields.cells)
    }
}
