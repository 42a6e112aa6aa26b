use conflux_types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role of a node in a stream topology.
///
/// Serializes as `"Source"`, `"Sink"` or `"Processor"`; parsing, including
/// through serde, ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum SteleKind {
    /// Reads records from a topic.
    Source,
    /// Writes records to a topic.
    Sink,
    Processor,
}

impl SteleKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SteleKind::Source => "Source",
            SteleKind::Sink => "Sink",
            SteleKind::Processor => "Processor",
        }
    }
}

impl fmt::Display for SteleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SteleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        [SteleKind::Source, SteleKind::Sink, SteleKind::Processor]
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid(format!("unknown stele kind: {s:?}")))
    }
}

impl TryFrom<String> for SteleKind {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// One node of a stream topology.
///
/// - `key`: the identifier the topology assigned to the node,
///   e.g. `KSTREAM-SOURCE-0000000000`
/// - `name`: the topic for sources and sinks, empty for processors
/// - `from`: keys of upstream nodes, empty for a source node
/// - `to`: keys of downstream nodes, empty for a terminal node
///
/// Serializes as
/// `{"kind":"Source","key":"K-1","name":"topic","from":[],"to":["K-2"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stele {
    kind: SteleKind,
    key: String,
    name: String,
    from: Vec<String>,
    to: Vec<String>,
}

impl Stele {
    #[must_use]
    pub fn new<F, T>(
        kind: SteleKind,
        key: impl Into<String>,
        name: impl Into<String>,
        from: impl IntoIterator<Item = F>,
        to: impl IntoIterator<Item = T>,
    ) -> Self
    where
        F: Into<String>,
        T: Into<String>,
    {
        Self {
            kind,
            key: key.into(),
            name: name.into(),
            from: from.into_iter().map(Into::into).collect(),
            to: to.into_iter().map(Into::into).collect(),
        }
    }

    /// A node reading `topic`, feeding the nodes in `to`.
    #[must_use]
    pub fn source<T: Into<String>>(
        key: impl Into<String>,
        topic: impl Into<String>,
        to: impl IntoIterator<Item = T>,
    ) -> Self {
        Self::new(SteleKind::Source, key, topic, Vec::<String>::new(), to)
    }

    /// A node writing to `topic`, fed by the nodes in `from`.
    #[must_use]
    pub fn sink<F: Into<String>>(
        key: impl Into<String>,
        topic: impl Into<String>,
        from: impl IntoIterator<Item = F>,
    ) -> Self {
        Self::new(SteleKind::Sink, key, topic, from, Vec::<String>::new())
    }

    #[must_use]
    pub fn processor<F, T>(
        key: impl Into<String>,
        from: impl IntoIterator<Item = F>,
        to: impl IntoIterator<Item = T>,
    ) -> Self
    where
        F: Into<String>,
        T: Into<String>,
    {
        Self::new(SteleKind::Processor, key, "", from, to)
    }

    #[must_use]
    pub fn kind(&self) -> SteleKind {
        self.kind
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn from(&self) -> &[String] {
        &self.from
    }

    #[must_use]
    pub fn to(&self) -> &[String] {
        &self.to
    }

    /// True if nothing feeds this node.
    #[must_use]
    pub fn is_source(&self) -> bool {
        self.from.is_empty()
    }

    /// True if this node feeds nothing.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.to.is_empty()
    }

    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Stele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
