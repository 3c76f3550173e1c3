//! Test utilities and mock behaviors for Skein development.
//!
//! Provides small [`Behavior`] implementations for constructing test
//! graphs: a fixed-value emitter, a pass-through relay, a behavior
//! that hard-fails on cue, and a behavior that logs contradictions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use indexmap::IndexMap;
use skein_core::{Batch, Contradiction, NodeError, NodeId, TickId, Value, ValueMap};
use skein_node::{Behavior, StepContext, StepOutput};

/// Drive one behavior step outside an engine.
///
/// Builds a [`StepContext`] around plain maps, invokes the behavior,
/// and returns the step result together with any contradictions it
/// logged. The workhorse of behavior unit tests.
pub fn step_once(
    behavior: &dyn Behavior,
    node: &str,
    tick: u64,
    config: ValueMap,
    state: ValueMap,
    inputs: &[(&'static str, Vec<Value>)],
) -> (Result<StepOutput, NodeError>, Vec<Contradiction>) {
    let node = NodeId::from(node);
    let inputs: IndexMap<&'static str, Batch> = inputs
        .iter()
        .map(|(port, values)| (*port, values.iter().cloned().collect()))
        .collect();
    let mut contradictions = Vec::new();
    let result = {
        let mut ctx = StepContext::new(
            &node,
            TickId(tick),
            &config,
            &state,
            &inputs,
            &mut contradictions,
        );
        behavior.step(&mut ctx)
    };
    (result, contradictions)
}

/// Build a [`ValueMap`] from key/value pairs.
pub fn value_map(pairs: &[(&str, Value)]) -> ValueMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Emits a fixed batch of values on `out` every tick. No inputs.
pub struct EmitBehavior {
    values: Vec<Value>,
}

impl EmitBehavior {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl Behavior for EmitBehavior {
    fn input_ports(&self) -> &'static [&'static str] {
        &[]
    }

    fn output_ports(&self) -> &'static [&'static str] {
        &["out"]
    }

    fn step(&self, _ctx: &mut StepContext<'_>) -> Result<StepOutput, NodeError> {
        Ok(StepOutput::new().emit("out", self.values.iter().cloned()))
    }
}

/// Passes its `in` sequence through to `out` verbatim. Stateless.
pub struct RelayBehavior;

impl Behavior for RelayBehavior {
    fn input_ports(&self) -> &'static [&'static str] {
        &["in"]
    }

    fn output_ports(&self) -> &'static [&'static str] {
        &["out"]
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepOutput, NodeError> {
        let seen = ctx.input("in").to_vec();
        Ok(StepOutput::new().emit("out", seen))
    }
}

/// Relays until the configured tick, then hard-fails every tick.
///
/// Used to exercise the partial-tick failure policy: nodes scheduled
/// before this one keep their applied patches, nodes after it never
/// run.
pub struct FailingBehavior {
    fail_from: u64,
}

impl FailingBehavior {
    /// Fail on tick `fail_from` and every tick after it.
    pub fn from_tick(fail_from: u64) -> Self {
        Self { fail_from }
    }

    /// Fail on the very first tick.
    pub fn always() -> Self {
        Self::from_tick(1)
    }
}

impl Behavior for FailingBehavior {
    fn input_ports(&self) -> &'static [&'static str] {
        &["in"]
    }

    fn output_ports(&self) -> &'static [&'static str] {
        &["out"]
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepOutput, NodeError> {
        if ctx.tick().0 >= self.fail_from {
            return Err(NodeError::ExecutionFailed {
                reason: format!("injected failure at tick {}", ctx.tick()),
            });
        }
        let seen = ctx.input("in").to_vec();
        Ok(StepOutput::new().emit("out", seen))
    }
}

/// Relays its input and logs one contradiction per tick.
///
/// Used to verify ledger ordering and the non-authoritative channel.
pub struct ContradictingBehavior {
    code: String,
}

impl ContradictingBehavior {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl Behavior for ContradictingBehavior {
    fn input_ports(&self) -> &'static [&'static str] {
        &["in"]
    }

    fn output_ports(&self) -> &'static [&'static str] {
        &["out"]
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepOutput, NodeError> {
        ctx.contradict(self.code.clone(), Some(format!("tick {}", ctx.tick())));
        let seen = ctx.input("in").to_vec();
        Ok(StepOutput::new().emit("out", seen))
    }
}
