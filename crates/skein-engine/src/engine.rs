//! The engine: one graph, one ledger, one tick counter.

use skein_core::{Contradiction, GraphError, Ledger, NodeId, TickError, TickId, ValueMap};
use skein_graph::Graph;
use skein_nodes::NodeKind;

use crate::config::{EdgeSpec, NodeSpec};
use crate::tick::{execute_tick, TickReport};

/// Owns a dataflow graph and drives its tick-by-tick execution.
///
/// The engine is the unit of isolation: it holds the graph, the
/// contradiction [`Ledger`], and the monotonically increasing tick
/// counter. Two engines built from the same specs and ticked the same
/// number of times hold identical node states and identical ledgers.
///
/// # Examples
///
/// ```
/// use skein_core::Value;
/// use skein_engine::{EdgeSpec, Engine, NodeSpec};
///
/// let mut engine = Engine::build(
///     [
///         NodeSpec::new("counter", "source"),
///         NodeSpec::new("store", "depot"),
///     ],
///     [EdgeSpec::new("counter", "out", "store", "in")],
/// )?;
///
/// engine.tick()?;
/// engine.tick()?;
///
/// let stored = engine.node_state(&"store".into())?.get("stored");
/// assert_eq!(
///     stored,
///     Some(&Value::List(vec![Value::Int(0), Value::Int(1)]))
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Default)]
pub struct Engine {
    graph: Graph,
    ledger: Ledger,
    current_tick: TickId,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("current_tick", &self.current_tick)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Wrap an already-built graph.
    ///
    /// The entry point for graphs containing hand-built behaviors that
    /// are not part of the built-in kind set.
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            ledger: Ledger::new(),
            current_tick: TickId(0),
        }
    }

    /// Build an engine from declarative node and edge specs.
    ///
    /// Type tags resolve through [`NodeKind::from_tag`]; an unknown tag
    /// fails with [`GraphError::UnknownNodeType`]. Edge specs are
    /// applied in order after every node exists, so spec order fixes
    /// the deterministic fan-in order.
    pub fn build(
        nodes: impl IntoIterator<Item = NodeSpec>,
        edges: impl IntoIterator<Item = EdgeSpec>,
    ) -> Result<Self, GraphError> {
        let mut graph = Graph::new();
        for spec in nodes {
            let kind = NodeKind::from_tag(&spec.kind)?;
            graph.add_node(spec.id, kind.instantiate(), spec.config)?;
        }
        for spec in edges {
            graph.add_edge(spec.source, &spec.source_port, spec.target, &spec.target_port)?;
        }
        Ok(Self::new(graph))
    }

    /// Execute the next tick.
    ///
    /// The tick counter advances whether or not the tick completes:
    /// a failed tick consumed its number, and whatever it committed
    /// before the failure stays committed. Whether to keep ticking
    /// after a failure is the caller's decision.
    pub fn tick(&mut self) -> Result<TickReport, TickError> {
        self.current_tick = self.current_tick.next();
        execute_tick(&mut self.graph, &mut self.ledger, self.current_tick)
    }

    /// The id of the most recently started tick; `TickId(0)` before the
    /// first [`tick`](Engine::tick) call.
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// Add a node between ticks, resolving its kind by type tag.
    pub fn add_node(&mut self, spec: NodeSpec) -> Result<(), GraphError> {
        let kind = NodeKind::from_tag(&spec.kind)?;
        self.graph.add_node(spec.id, kind.instantiate(), spec.config)
    }

    /// Add an edge between ticks.
    pub fn add_edge(&mut self, spec: EdgeSpec) -> Result<(), GraphError> {
        self.graph
            .add_edge(spec.source, &spec.source_port, spec.target, &spec.target_port)
    }

    /// Remove a node and every edge touching it.
    ///
    /// The node's state disappears with it; ledger entries it logged
    /// remain.
    pub fn remove_node(&mut self, id: &NodeId) -> Result<(), GraphError> {
        self.graph.remove_node(id)
    }

    /// Read-only view of a node's persistent state.
    pub fn node_state(&self, id: &NodeId) -> Result<&ValueMap, GraphError> {
        self.graph.node_state(id)
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Every contradiction logged since construction or the last
    /// [`reset_contradictions`](Engine::reset_contradictions), in
    /// logging order.
    pub fn contradictions(&self) -> &[Contradiction] {
        self.ledger.all()
    }

    /// The full ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Empty the ledger. Node state and the tick counter are untouched.
    pub fn reset_contradictions(&mut self) {
        self.ledger.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skein_core::Value;
    use skein_node::Behavior;
    use skein_test_utils::ContradictingBehavior;

    fn counter_into_depot() -> Engine {
        Engine::build(
            [
                NodeSpec::new("src", "source"),
                NodeSpec::new("store", "depot"),
            ],
            [EdgeSpec::new("src", "out", "store", "in")],
        )
        .unwrap()
    }

    #[test]
    fn build_rejects_unknown_type_tag() {
        let err = Engine::build([NodeSpec::new("x", "portal")], []).unwrap_err();
        assert_eq!(err, GraphError::UnknownNodeType { tag: "portal".into() });
    }

    #[test]
    fn build_rejects_bad_edges() {
        let err = Engine::build(
            [NodeSpec::new("src", "source")],
            [EdgeSpec::new("src", "out", "ghost", "in")],
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode { .. }));
    }

    #[test]
    fn tick_counter_starts_at_zero_and_advances() {
        let mut engine = counter_into_depot();
        assert_eq!(engine.current_tick(), TickId(0));

        let report = engine.tick().unwrap();
        assert_eq!(report.tick, TickId(1));
        assert_eq!(engine.current_tick(), TickId(1));

        engine.tick().unwrap();
        assert_eq!(engine.current_tick(), TickId(2));
    }

    #[test]
    fn config_flows_from_spec_to_behavior() {
        let mut engine = Engine::build(
            [
                NodeSpec::new("src", "source").config("value", Value::Text("ping".into())),
                NodeSpec::new("store", "depot"),
            ],
            [EdgeSpec::new("src", "out", "store", "in")],
        )
        .unwrap();

        engine.tick().unwrap();
        assert_eq!(
            engine.node_state(&"store".into()).unwrap().get("stored"),
            Some(&Value::List(vec![Value::Text("ping".into())]))
        );
    }

    #[test]
    fn graph_can_grow_between_ticks() {
        let mut engine = counter_into_depot();
        engine.tick().unwrap();

        engine
            .add_node(NodeSpec::new("audit", "meter"))
            .unwrap();
        engine
            .add_edge(EdgeSpec::new("src", "out", "audit", "in"))
            .unwrap();
        engine.tick().unwrap();

        // The meter only saw the tick after it was added.
        assert_eq!(
            engine.node_state(&"audit".into()).unwrap().get("count"),
            Some(&Value::Int(1))
        );
    }

    #[test]
    fn remove_node_keeps_its_ledger_entries() {
        let mut graph = Graph::new();
        let grumbler: Box<dyn Behavior> = Box::new(ContradictingBehavior::new("stale"));
        graph.add_node("g", grumbler, ValueMap::new()).unwrap();
        let mut engine = Engine::new(graph);

        engine.tick().unwrap();
        engine.remove_node(&"g".into()).unwrap();

        assert!(!engine.graph().contains(&"g".into()));
        assert_eq!(engine.contradictions().len(), 1);
    }

    #[test]
    fn reset_contradictions_leaves_state_and_tick_counter() {
        let mut graph = Graph::new();
        let grumbler: Box<dyn Behavior> = Box::new(ContradictingBehavior::new("stale"));
        graph.add_node("g", grumbler, ValueMap::new()).unwrap();
        let mut engine = Engine::new(graph);

        engine.tick().unwrap();
        assert_eq!(engine.contradictions().len(), 1);

        engine.reset_contradictions();
        assert!(engine.contradictions().is_empty());
        assert_eq!(engine.current_tick(), TickId(1));

        engine.tick().unwrap();
        assert_eq!(engine.current_tick(), TickId(2));
    }
}
