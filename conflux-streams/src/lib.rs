//! Topology description values for Conflux stream applications.
//!
//! A running stream application is inspected into plain values:
//! - [`Stele`]: one node of the topology (a source, sink or processor)
//!   with the keys of the nodes it reads from and writes to
//! - [`Poneglyph`]: one connected sub-topology, an ordered set of steles
//!
//! Both serialize to stable JSON in which the inbound and outbound node keys
//! are always JSON arrays.

mod poneglyph;
mod stele;

pub use conflux_types::{Error, Result};
pub use poneglyph::Poneglyph;
pub use stele::{Stele, SteleKind};
