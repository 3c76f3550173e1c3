//! Graph model and deterministic scheduler for Skein dataflow graphs.
//!
//! [`Graph`] holds the node set, per-node port declarations, and the
//! edge set, and enforces structural validity at mutation time: edge
//! endpoints must exist, ports must be declared, and the edge set must
//! stay acyclic. [`schedule::topological_order`] produces the total
//! execution order the tick executor walks; the graph caches it and
//! recomputes lazily after structural mutations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod graph;
pub mod schedule;

pub use graph::{Edge, Graph, Node};
pub use schedule::topological_order;
