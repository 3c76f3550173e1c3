//! Skein: a deterministic node-graph dataflow engine.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Skein sub-crates. For most users, adding `skein` as a
//! single dependency is sufficient.
//!
//! A Skein graph is a set of typed nodes connected by directed,
//! port-to-port edges. Each engine tick runs every node exactly once in
//! dependency order; nodes read the values their upstream neighbors
//! emitted this tick, patch their own private state, and emit values
//! downstream. Logical inconsistencies a node detects go to the
//! contradiction ledger as data rather than interrupting execution.
//!
//! # Quick start
//!
//! ```rust
//! use skein::prelude::*;
//!
//! // A counter feeding a terminal store, built from the closed set of
//! // node kinds by type tag.
//! let mut engine = Engine::build(
//!     [
//!         NodeSpec::new("gen", "source"),
//!         NodeSpec::new("store", "depot"),
//!     ],
//!     [EdgeSpec::new("gen", "out", "store", "in")],
//! )
//! .unwrap();
//!
//! engine.tick().unwrap();
//! engine.tick().unwrap();
//!
//! assert_eq!(
//!     engine.node_state(&"store".into()).unwrap().get("stored"),
//!     Some(&Value::List(vec![Value::Int(0), Value::Int(1)]))
//! );
//! assert!(engine.contradictions().is_empty());
//! ```
//!
//! Custom behaviors implement [`node::Behavior`] and enter the engine
//! through a hand-built [`graph::Graph`] and [`Engine::new`].
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `skein-core` | IDs, values, errors, the contradiction ledger |
//! | [`node`] | `skein-node` | The `Behavior` trait, step context and output |
//! | [`graph`] | `skein-graph` | Graph model, validation, deterministic scheduling |
//! | [`nodes`] | `skein-nodes` | The built-in node kinds |
//! | [`engine`] | `skein-engine` | The engine and tick executor |
//!
//! [`Engine::new`]: engine::Engine::new

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, ids, errors, and the contradiction ledger (`skein-core`).
pub use skein_core as types;

/// The [`node::Behavior`] trait and its step contract (`skein-node`).
///
/// The main extension point for user-defined node logic.
pub use skein_node as node;

/// Graph model, structural validation, and deterministic scheduling
/// (`skein-graph`).
pub use skein_graph as graph;

/// The built-in node kinds (`skein-nodes`).
///
/// [`nodes::Source`], [`nodes::Meter`], [`nodes::Splitter`],
/// [`nodes::Depot`], and [`nodes::DeployerRunner`], enumerated by
/// [`nodes::NodeKind`].
pub use skein_nodes as nodes;

/// The engine and tick executor (`skein-engine`).
///
/// [`engine::Engine`] owns one graph, one ledger, and the tick counter.
pub use skein_engine as engine;

/// Common imports for typical Skein usage.
///
/// ```rust
/// use skein::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use skein_core::{Batch, Contradiction, Ledger, NodeId, TickId, Value, ValueMap};

    // Errors
    pub use skein_core::{GraphError, NodeError, TickError};

    // Behavior contract
    pub use skein_node::{Behavior, StepContext, StepOutput};

    // Graph
    pub use skein_graph::{Edge, Graph};

    // Built-in kinds
    pub use skein_nodes::NodeKind;

    // Engine
    pub use skein_engine::{EdgeSpec, Engine, NodeSpec, TickReport};
}
