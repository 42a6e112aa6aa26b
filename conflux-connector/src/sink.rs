use conflux_types::{Error, Result, Row, require_non_empty};
use serde::{Deserialize, Serialize};

/// How the broker assigned a record's timestamp.
///
/// Serializes under the broker's own names: `"NoTimestampType"`,
/// `"CreateTime"`, `"LogAppendTime"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimestampType {
    NoTimestampType,
    /// Set by the producer.
    CreateTime,
    /// Set by the broker when the record was appended to the log.
    LogAppendTime,
}

/// A row delivered to a sink connector, with its broker coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSinkRecord {
    topic_name: String,
    row: Row,
    partition: i32,
    offset: i64,
    timestamp: i64,
    timestamp_type: TimestampType,
}

impl RowSinkRecord {
    #[must_use]
    pub fn builder() -> RowSinkRecordBuilder {
        RowSinkRecordBuilder::default()
    }

    #[must_use]
    pub fn topic_name(&self) -> &str {
        &self.topic_name
    }

    #[must_use]
    pub fn row(&self) -> &Row {
        &self.row
    }

    #[must_use]
    pub fn partition(&self) -> i32 {
        self.partition
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset
    }

    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    #[must_use]
    pub fn timestamp_type(&self) -> TimestampType {
        self.timestamp_type
    }
}

/// Builder for [`RowSinkRecord`]. Every field is required.
#[derive(Debug, Clone, Default)]
pub struct RowSinkRecordBuilder {
    topic_name: Option<String>,
    row: Option<Row>,
    partition: Option<i32>,
    offset: Option<i64>,
    timestamp: Option<i64>,
    timestamp_type: Option<TimestampType>,
}

impl RowSinkRecordBuilder {
    pub fn topic_name(mut self, topic_name: impl Into<String>) -> Self {
        self.topic_name = Some(topic_name.into());
        self
    }

    pub fn row(mut self, row: Row) -> Self {
        self.row = Some(row);
        self
    }

    pub fn partition(mut self, partition: i32) -> Self {
        self.partition = Some(partition);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn timestamp_type(mut self, timestamp_type: TimestampType) -> Self {
        self.timestamp_type = Some(timestamp_type);
        self
    }

    pub fn build(self) -> Result<RowSinkRecord> {
        let topic_name = required(self.topic_name, "topic name")?;
        require_non_empty(&topic_name, "topic name")?;
        Ok(RowSinkRecord {
            topic_name,
            row: required(self.row, "row")?,
            partition: required(self.partition, "partition")?,
            offset: required(self.offset, "offset")?,
            timestamp: required(self.timestamp, "timestamp")?,
            timestamp_type: required(self.timestamp_type, "timestamp type")?,
        })
    }
}

fn required<T>(value: Option<T>, what: &str) -> Result<T> {
    value.ok_or_else(|| Error::invalid(format!("{what} is required")))
}
