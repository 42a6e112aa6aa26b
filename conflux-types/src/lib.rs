//! Core type definitions for Conflux.
//!
//! This crate defines the schema and row types shared by the setting,
//! connector and streams crates:
//! - [`DataType`] and [`Column`] describe one field of a row
//! - [`Cell`] and [`Row`] carry the structured data itself
//! - [`Error`] is the single error type surfaced by every value constructor
//!
//! Everything here is a plain value: constructed once, validated at
//! construction, never mutated afterwards.

mod column;
mod data_type;
mod row;

pub use column::{Column, ColumnBuilder};
pub use data_type::DataType;
pub use row::{Cell, Row};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing or reading value types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field is missing, empty, unparseable or of the wrong shape.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Text that should be JSON failed to parse.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// Index-based accessor called outside `[0, size)`.
    #[error("index {index} out of bounds (size {size})")]
    OutOfBounds { index: usize, size: usize },
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Returns `value` unchanged, or `InvalidArgument` naming `what` if it is empty.
pub fn require_non_empty<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(Error::invalid(format!("{what} cannot be empty")));
    }
    Ok(value)
}
