//! Reference node behaviors for the Skein dataflow engine.
//!
//! Five behaviors cover the canonical dataflow roles: a deterministic
//! generator ([`Source`]), a pass-through instrument ([`Meter`]), a
//! lossless fan-out ([`Splitter`]), a terminal accumulator ([`Depot`]),
//! and a pure element-wise transform ([`DeployerRunner`]).
//!
//! [`NodeKind`] is the closed enumeration tying type tags to these
//! behaviors; adding a node kind is a deliberate, reviewed extension of
//! that enum, not an open registry.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod depot;
pub mod deployer;
pub mod kind;
pub mod meter;
pub mod source;
pub mod splitter;

pub use depot::Depot;
pub use deployer::DeployerRunner;
pub use kind::NodeKind;
pub use meter::Meter;
pub use source::Source;
pub use splitter::Splitter;
