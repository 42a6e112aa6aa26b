use crate::{Stele, SteleKind};
use conflux_types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// One connected sub-topology: the steles that exchange records directly.
///
/// Stele keys are unique within a poneglyph. Serializes as
/// `{"steles":[...]}` in the order given at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PoneglyphFields")]
pub struct Poneglyph {
    steles: Vec<Stele>,
}

impl Poneglyph {
    /// Groups `steles`. Fails if two steles share a key.
    pub fn new(steles: impl IntoIterator<Item = Stele>) -> Result<Self> {
        let steles: Vec<Stele> = steles.into_iter().collect();
        let mut keys = HashSet::with_capacity(steles.len());
        for stele in &steles {
            if !keys.insert(stele.key()) {
                return Err(Error::invalid(format!(
                    "duplicate stele key: {:?}",
                    stele.key()
                )));
            }
        }
        let dangling = steles
            .iter()
            .flat_map(|s| s.from().iter().chain(s.to()))
            .filter(|k| !keys.contains(k.as_str()))
            .count();
        if dangling > 0 {
            debug!(dangling, "Poneglyph links to steles outside itself");
        }
        Ok(Self { steles })
    }

    #[must_use]
    pub fn steles(&self) -> &[Stele] {
        &self.steles
    }

    /// Looks up a stele by key.
    #[must_use]
    pub fn stele(&self, key: &str) -> Option<&Stele> {
        self.steles.iter().find(|s| s.key() == key)
    }

    pub fn sources(&self) -> impl Iterator<Item = &Stele> {
        self.of_kind(SteleKind::Source)
    }

    pub fn sinks(&self) -> impl Iterator<Item = &Stele> {
        self.of_kind(SteleKind::Sink)
    }

    pub fn processors(&self) -> impl Iterator<Item = &Stele> {
        self.of_kind(SteleKind::Processor)
    }

    fn of_kind(&self, kind: SteleKind) -> impl Iterator<Item = &Stele> {
        self.steles.iter().filter(move |s| s.kind() == kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steles.is_empty()
    }

    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Poneglyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[derive(Deserialize)]
struct PoneglyphFields {
    steles: Vec<Stele>,
}

impl TryFrom<PoneglyphFields> for Poneglyph {
    type Error = Error;

    fn try_from(fields: PoneglyphFields) -> Result<Self> {
        Poneglyph::new(fields.steles)
    }
}
