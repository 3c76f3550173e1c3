//! Execution context passed to behaviors during tick execution.
//!
//! [`StepContext`] is the read side of the node contract: the node's
//! configuration (immutable), the state snapshot as of the end of the
//! previous tick, and the inbound values gathered from upstream edges
//! this tick. It also carries the contradiction sink.

use indexmap::IndexMap;
use skein_core::{Batch, Contradiction, NodeId, TickId, Value, ValueMap};

/// Execution context passed to each behavior's `step()` method.
///
/// All reads are snapshots for the duration of the tick: a behavior
/// cannot observe its own patch, another node's state, or values staged
/// later in the same tick. Contradictions logged through
/// [`contradict`](StepContext::contradict) are drained into the
/// engine's ledger in call order after the step returns.
pub struct StepContext<'a> {
    node: &'a NodeId,
    tick: TickId,
    config: &'a ValueMap,
    state: &'a ValueMap,
    inputs: &'a IndexMap<&'static str, Batch>,
    contradictions: &'a mut Vec<Contradiction>,
}

impl<'a> StepContext<'a> {
    /// Construct a new step context.
    ///
    /// Typically called by the tick executor, not by behaviors.
    /// Tests construct one directly around plain maps.
    pub fn new(
        node: &'a NodeId,
        tick: TickId,
        config: &'a ValueMap,
        state: &'a ValueMap,
        inputs: &'a IndexMap<&'static str, Batch>,
        contradictions: &'a mut Vec<Contradiction>,
    ) -> Self {
        Self {
            node,
            tick,
            config,
            state,
            inputs,
            contradictions,
        }
    }

    /// The id of the node being stepped.
    pub fn node(&self) -> &NodeId {
        self.node
    }

    /// The tick being executed.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// The values that arrived on `port` this tick, in deterministic
    /// fan-in order.
    ///
    /// Empty when no edge delivered anything this tick or the node has
    /// no inbound edges on that port.
    pub fn input(&self, port: &str) -> &[Value] {
        self.inputs.get(port).map_or(&[], |batch| batch.as_slice())
    }

    /// The full inbound map, keyed by declared input port name.
    pub fn inputs(&self) -> &IndexMap<&'static str, Batch> {
        self.inputs
    }

    /// A configuration value, fixed at graph-build time.
    pub fn config(&self, key: &str) -> Option<&Value> {
        self.config.get(key)
    }

    /// A state value as of the end of the previous tick.
    pub fn state(&self, key: &str) -> Option<&Value> {
        self.state.get(key)
    }

    /// Integer state accessor; `None` when absent or not an `Int`.
    pub fn state_int(&self, key: &str) -> Option<i64> {
        self.state.get(key).and_then(Value::as_int)
    }

    /// Record a contradiction without interrupting execution.
    ///
    /// This is the third, non-authoritative output channel: entries
    /// are appended to the engine ledger in call order and carry this
    /// node's id.
    pub fn contradict(&mut self, code: impl Into<String>, detail: Option<String>) {
        self.contradictions.push(Contradiction {
            node: self.node.clone(),
            code: code.into(),
            detail,
        });
    }
}
