//! Record envelopes for Conflux connectors.
//!
//! - [`RowSourceRecord`]: a [`Row`](conflux_types::Row) produced by a source
//!   connector, addressed to a topic, with the source partition and offset
//!   the connector needs to resume from
//! - [`RowSinkRecord`]: a row delivered to a sink connector, with the broker
//!   coordinates it was read from
//!
//! Both are immutable once built. Construction goes through builders that
//! reject missing required fields.

mod sink;
mod source;

pub use conflux_types::{Error, Result};
pub use sink::{RowSinkRecord, RowSinkRecordBuilder, TimestampType};
pub use source::{RowSourceRecord, RowSourceRecordBuilder, SourceMap};
