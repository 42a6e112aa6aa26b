use conflux_types::{Error, Result, Row, require_non_empty};
use std::collections::BTreeMap;

/// Opaque connector bookkeeping: the source partition a record came from,
/// or the offset reached within it. Only the producing connector interprets
/// the values.
pub type SourceMap = BTreeMap<String, serde_json::Value>;

/// A row on its way from a source connector to the broker.
///
/// `partition` and `timestamp` are optional on purpose:
/// - no partition: the broker picks one by hashing
/// - no timestamp: the publisher stamps the current wall time
///
/// A timestamp of `0` is a real timestamp, distinct from `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSourceRecord {
    source_partition: SourceMap,
    source_offset: SourceMap,
    topic_name: String,
    partition: Option<i32>,
    row: Row,
    timestamp: Option<i64>,
}

impl RowSourceRecord {
    /// Creates a record for `topic` with no partition, no timestamp and
    /// empty source bookkeeping.
    pub fn of(topic: impl Into<String>, row: Row) -> Result<Self> {
        Self::builder().topic_name(topic).row(row).build()
    }

    #[must_use]
    pub fn builder() -> RowSourceRecordBuilder {
        RowSourceRecordBuilder::default()
    }

    #[must_use]
    pub fn source_partition(&self) -> &SourceMap {
        &self.source_partition
    }

    #[must_use]
    pub fn source_offset(&self) -> &SourceMap {
        &self.source_offset
    }

    #[must_use]
    pub fn topic_name(&self) -> &str {
        &self.topic_name
    }

    /// Target partition, or `None` to let the broker choose.
    #[must_use]
    pub fn partition(&self) -> Option<i32> {
        self.partition
    }

    #[must_use]
    pub fn row(&self) -> &Row {
        &self.row
    }

    /// Record timestamp in milliseconds, or `None` to use publish time.
    #[must_use]
    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }
}

/// Builder for [`RowSourceRecord`]. `topic_name` and `row` are required.
#[derive(Debug, Clone, Default)]
pub struct RowSourceRecordBuilder {
    source_partition: SourceMap,
    source_offset: SourceMap,
    topic_name: Option<String>,
    partition: Option<i32>,
    row: Option<Row>,
    timestamp: Option<i64>,
}

impl RowSourceRecordBuilder {
    /// Defaults to an empty map.
    pub fn source_partition(mut self, source_partition: SourceMap) -> Self {
        self.source_partition = source_partition;
        self
    }

    /// Defaults to an empty map.
    pub fn source_offset(mut self, source_offset: SourceMap) -> Self {
        self.source_offset = source_offset;
        self
    }

    pub fn topic_name(mut self, topic_name: impl Into<String>) -> Self {
        self.topic_name = Some(topic_name.into());
        self
    }

    /// Unset means the target partition is computed by hash.
    pub fn partition(mut self, partition: i32) -> Self {
        self.partition = Some(partition);
        self
    }

    pub fn row(mut self, row: Row) -> Self {
        self.row = Some(row);
        self
    }

    /// Unset means the current time at publish.
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn build(self) -> Result<RowSourceRecord> {
        let topic_name = self
            .topic_name
            .ok_or_else(|| Error::invalid("topic name is required"))?;
        require_non_empty(&topic_name, "topic name")?;
        let row = self.row.ok_or_else(|| Error::invalid("row is required"))?;
        Ok(RowSourceRecord {
            source_partition: self.source_partition,
            source_offset: self.source_offset,
            topic_name,
            partition: self.partition,
            row,
            timestamp: self.timestamp,
        })
    }
}
