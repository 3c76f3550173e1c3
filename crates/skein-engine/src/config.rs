//! Declarative graph construction: node and edge specs.
//!
//! Specs are the data-driven way to build a graph: each node names one
//! of the built-in kinds by type tag, and [`Engine::build`] resolves
//! tags through the closed [`NodeKind`] enumeration. Callers with a
//! hand-built behavior construct a [`Graph`](skein_graph::Graph)
//! directly and pass it to [`Engine::new`] instead.
//!
//! [`Engine::build`]: crate::Engine::build
//! [`Engine::new`]: crate::Engine::new
//! [`NodeKind`]: skein_nodes::NodeKind

use skein_core::{NodeId, Value, ValueMap};

/// Declarative description of one node: id, type tag, configuration.
#[derive(Clone, Debug)]
pub struct NodeSpec {
    /// Unique id of the node.
    pub id: NodeId,
    /// Type tag naming one of the built-in kinds, e.g. `"source"`.
    pub kind: String,
    /// Configuration handed to the node, fixed for its lifetime.
    pub config: ValueMap,
}

impl NodeSpec {
    /// Describe a node of the given kind with empty configuration.
    pub fn new(id: impl Into<NodeId>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            config: ValueMap::new(),
        }
    }

    /// Add a configuration entry.
    #[must_use]
    pub fn config(mut self, key: impl Into<String>, value: Value) -> Self {
        self.config.insert(key.into(), value);
        self
    }
}

/// Declarative description of one directed, port-to-port edge.
#[derive(Clone, Debug)]
pub struct EdgeSpec {
    /// Originating node.
    pub source: NodeId,
    /// Output port on the source node.
    pub source_port: String,
    /// Receiving node.
    pub target: NodeId,
    /// Input port on the target node.
    pub target_port: String,
}

impl EdgeSpec {
    /// Describe an edge from `(source, source_port)` to
    /// `(target, target_port)`.
    pub fn new(
        source: impl Into<NodeId>,
        source_port: impl Into<String>,
        target: impl Into<NodeId>,
        target_port: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            source_port: source_port.into(),
            target: target.into(),
            target_port: target_port.into(),
        }
    }
}
