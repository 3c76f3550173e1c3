//! Core types for the Skein dataflow engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Skein workspace:
//! identifiers, the [`Value`] data model, error types, and the
//! contradiction [`Ledger`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod ledger;
pub mod value;

pub use error::{GraphError, NodeError, TickError};
pub use id::{NodeId, TickId};
pub use ledger::{Contradiction, Ledger};
pub use value::{Batch, Value, ValueMap};
