//! The graph model: nodes, ports, edges, and structural validation.

use indexmap::IndexMap;
use skein_core::{GraphError, NodeId, ValueMap};
use skein_node::Behavior;

use crate::schedule::topological_order;

// ── Node ───────────────────────────────────────────────────────────

/// One graph vertex: a behavior, its immutable configuration, and its
/// exclusively-owned mutable state.
pub struct Node {
    behavior: Box<dyn Behavior>,
    config: ValueMap,
    state: ValueMap,
}

impl Node {
    /// The behavior implementing this node's per-tick logic.
    pub fn behavior(&self) -> &dyn Behavior {
        self.behavior.as_ref()
    }

    /// Configuration, fixed at graph-build time.
    pub fn config(&self) -> &ValueMap {
        &self.config
    }

    /// Persistent state as of the end of the last completed tick.
    ///
    /// Created empty at node-add time; replaced only by patch-merge
    /// through [`Graph::apply_patch`]. Safe to read between ticks.
    pub fn state(&self) -> &ValueMap {
        &self.state
    }
}

// ── Edge ───────────────────────────────────────────────────────────

/// A directed, port-to-port connection between two nodes.
///
/// Port names are the behavior-declared `&'static str` names, resolved
/// from caller-supplied strings during [`Graph::add_edge`] validation.
/// The position of an edge in [`Graph::edges`] is its insertion order,
/// which is the deterministic fan-in concatenation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Originating node.
    pub source: NodeId,
    /// Declared output port on the source node.
    pub source_port: &'static str,
    /// Receiving node.
    pub target: NodeId,
    /// Declared input port on the target node.
    pub target_port: &'static str,
}

// ── Graph ──────────────────────────────────────────────────────────

/// The node set, per-node port declarations, and edge set of one
/// dataflow graph.
///
/// Every mutating operation is atomic: on error the node and edge sets
/// are exactly as before the call. Structural mutations invalidate the
/// cached schedule, which is recomputed lazily on the next
/// [`schedule()`](Graph::schedule) call.
#[derive(Default)]
pub struct Graph {
    nodes: IndexMap<NodeId, Node>,
    edges: Vec<Edge>,
    cached_schedule: Option<Vec<NodeId>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with the given behavior and configuration.
    ///
    /// State starts empty. Fails with [`GraphError::DuplicateNodeId`]
    /// if the id is already present.
    pub fn add_node(
        &mut self,
        id: impl Into<NodeId>,
        behavior: Box<dyn Behavior>,
        config: ValueMap,
    ) -> Result<(), GraphError> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNodeId { id });
        }
        self.nodes.insert(
            id,
            Node {
                behavior,
                config,
                state: ValueMap::new(),
            },
        );
        self.cached_schedule = None;
        Ok(())
    }

    /// Connect `(source, source_port)` to `(target, target_port)`.
    ///
    /// Fails with [`GraphError::UnknownNode`] or
    /// [`GraphError::UnknownPort`] if either endpoint does not exist,
    /// and with [`GraphError::CycleDetected`] if the edge would make
    /// the graph cyclic. Fan-in and fan-out are permitted.
    pub fn add_edge(
        &mut self,
        source: impl Into<NodeId>,
        source_port: &str,
        target: impl Into<NodeId>,
        target_port: &str,
    ) -> Result<(), GraphError> {
        let source = source.into();
        let target = target.into();

        let source_port = Self::resolve_port(
            &self.nodes,
            &source,
            source_port,
            |behavior| behavior.output_ports(),
        )?;
        let target_port = Self::resolve_port(
            &self.nodes,
            &target,
            target_port,
            |behavior| behavior.input_ports(),
        )?;

        // The new edge source→target closes a cycle exactly when the
        // target already reaches the source (or the edge is a self-loop).
        if source == target || self.reaches(&target, &source) {
            return Err(GraphError::CycleDetected);
        }

        self.edges.push(Edge {
            source,
            source_port,
            target,
            target_port,
        });
        self.cached_schedule = None;
        Ok(())
    }

    /// Remove a node and every edge touching it.
    pub fn remove_node(&mut self, id: &NodeId) -> Result<(), GraphError> {
        if self.nodes.shift_remove(id).is_none() {
            return Err(GraphError::UnknownNode { id: id.clone() });
        }
        self.edges.retain(|e| e.source != *id && e.target != *id);
        self.cached_schedule = None;
        Ok(())
    }

    /// Look up a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Read-only snapshot of a node's persistent state.
    ///
    /// Safe to call only between ticks.
    pub fn node_state(&self, id: &NodeId) -> Result<&ValueMap, GraphError> {
        self.nodes
            .get(id)
            .map(Node::state)
            .ok_or_else(|| GraphError::UnknownNode { id: id.clone() })
    }

    /// Merge a state patch into a node's persistent state.
    ///
    /// Shallow key overwrite; keys absent from the patch are unchanged.
    /// Called by the tick executor after each behavior step.
    pub fn apply_patch(&mut self, id: &NodeId, patch: ValueMap) -> Result<(), GraphError> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::UnknownNode { id: id.clone() })?;
        for (key, value) in patch {
            node.state.insert(key, value);
        }
        Ok(())
    }

    /// Whether a node with this id is present.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The deterministic execution order, recomputing if a structural
    /// mutation invalidated the cache.
    pub fn schedule(&mut self) -> Result<&[NodeId], GraphError> {
        if self.cached_schedule.is_none() {
            let nodes: Vec<NodeId> = self.nodes.keys().cloned().collect();
            self.cached_schedule = Some(topological_order(&nodes, &self.edges)?);
        }
        Ok(self
            .cached_schedule
            .as_deref()
            .expect("cache populated above"))
    }

    /// Whether the next [`schedule()`](Graph::schedule) call will
    /// recompute.
    pub fn is_schedule_stale(&self) -> bool {
        self.cached_schedule.is_none()
    }

    /// Resolve a caller-supplied port name against a node's declared
    /// port set, returning the declared `&'static str`.
    fn resolve_port(
        nodes: &IndexMap<NodeId, Node>,
        id: &NodeId,
        port: &str,
        declared: impl Fn(&dyn Behavior) -> &'static [&'static str],
    ) -> Result<&'static str, GraphError> {
        let node = nodes
            .get(id)
            .ok_or_else(|| GraphError::UnknownNode { id: id.clone() })?;
        declared(node.behavior.as_ref())
            .iter()
            .find(|&&name| name == port)
            .copied()
            .ok_or_else(|| GraphError::UnknownPort {
                node: id.clone(),
                port: port.to_string(),
            })
    }

    /// Whether `from` reaches `to` over the current edge set.
    fn reaches(&self, from: &NodeId, to: &NodeId) -> bool {
        let mut stack = vec![from];
        let mut visited: Vec<&NodeId> = Vec::new();
        while let Some(id) = stack.pop() {
            if id == to {
                return true;
            }
            if visited.contains(&id) {
                continue;
            }
            visited.push(id);
            for edge in &self.edges {
                if edge.source == *id {
                    stack.push(&edge.target);
                }
            }
        }
        false
    }
}
