//! Error types for the Skein dataflow engine.
//!
//! Organized by subsystem: graph construction, node behavior execution,
//! and tick execution. Construction errors are atomic — the failing
//! operation leaves the graph unchanged. Logical contradictions are not
//! errors at all; they are recorded in the [`Ledger`](crate::Ledger).

use std::error::Error;
use std::fmt;

use crate::id::NodeId;

/// Errors from graph construction and mutation.
///
/// Always surfaced synchronously from the mutating operation, which is
/// atomic: on error the node and edge sets are exactly as before the
/// call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// A node with this id is already present.
    DuplicateNodeId {
        /// The contested id.
        id: NodeId,
    },
    /// An operation referenced a node id that is not in the graph.
    UnknownNode {
        /// The missing id.
        id: NodeId,
    },
    /// An edge endpoint referenced a port the node's behavior does not
    /// declare.
    UnknownPort {
        /// The node whose declared port set was consulted.
        node: NodeId,
        /// The undeclared port name.
        port: String,
    },
    /// Adding the edge would create a cycle, or the graph is not
    /// acyclic at schedule time.
    CycleDetected,
    /// A node spec carried a type tag outside the closed kind set.
    UnknownNodeType {
        /// The unrecognized tag.
        tag: String,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNodeId { id } => write!(f, "node id '{id}' already present"),
            Self::UnknownNode { id } => write!(f, "unknown node '{id}'"),
            Self::UnknownPort { node, port } => {
                write!(f, "node '{node}' declares no port named '{port}'")
            }
            Self::CycleDetected => write!(f, "edge set is not acyclic"),
            Self::UnknownNodeType { tag } => write!(f, "unknown node type tag '{tag}'"),
        }
    }
}

impl Error for GraphError {}

/// Hard failures from individual node behavior execution.
///
/// Returned by `Behavior::step()` and wrapped in
/// [`TickError::NodeFailed`] by the tick executor. A hard failure
/// indicates a programming or configuration defect; simulated-world
/// conditions belong in the contradiction ledger instead.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeError {
    /// The behavior's step function failed.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// A configuration entry is missing or has the wrong shape.
    BadConfig {
        /// The offending configuration key.
        key: String,
        /// Description of the problem.
        reason: String,
    },
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
            Self::BadConfig { key, reason } => {
                write!(f, "bad config key '{key}': {reason}")
            }
        }
    }
}

impl Error for NodeError {}

/// Errors from tick execution.
///
/// State patches already applied by nodes earlier in the aborted tick
/// remain committed — partial-tick application is the documented
/// policy, not a rollback.
#[derive(Clone, Debug, PartialEq)]
pub enum TickError {
    /// A node behavior returned a hard error during execution.
    NodeFailed {
        /// The failing node.
        node: NodeId,
        /// The underlying behavior error.
        reason: NodeError,
    },
    /// Tick-time scheduling found the edge set cyclic.
    CycleDetected,
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeFailed { node, reason } => {
                write!(f, "node '{node}' failed: {reason}")
            }
            Self::CycleDetected => write!(f, "graph is not acyclic"),
        }
    }
}

impl Error for TickError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NodeFailed { reason, .. } => Some(reason),
            Self::CycleDetected => None,
        }
    }
}
