//! Strongly-typed identifiers for nodes and ticks.

use std::fmt;

/// Identifies a node within a graph.
///
/// Node ids are supplied by the caller at graph construction and are
/// stable for the lifetime of the graph. The `Ord` implementation is
/// lexicographic and drives the scheduler's tie-break rule: nodes with
/// no ordering constraint between them execute in ascending id order,
/// so the same graph always yields the same schedule regardless of
/// insertion history.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for NodeId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time the engine advances one tick. Not stored on
/// nodes; implicit in the sequence of state transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_ordering_is_lexicographic() {
        let a = NodeId::from("alpha");
        let b = NodeId::from("beta");
        assert!(a < b);
        assert_eq!(NodeId::from("x"), NodeId::new("x".to_string()));
    }

    #[test]
    fn tick_id_next_increments() {
        assert_eq!(TickId(0).next(), TickId(1));
        assert_eq!(TickId(41).next(), TickId(42));
    }
}
