//! Setting values for Conflux.
//!
//! - [`PropGroup`]: an ordered list of string→string property mappings,
//!   the generic tabular payload of a setting
//! - [`keys`]: the canonical keys used when a property mapping encodes a
//!   [`Column`](conflux_types::Column)

pub mod keys;
mod prop_group;

pub use conflux_types::{Error, Result};
pub use prop_group::{PropGroup, Props, column_props};
