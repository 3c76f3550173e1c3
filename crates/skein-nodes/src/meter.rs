//! Pass-through instrumentation: counts what flows through it.

use skein_core::{NodeError, Value};
use skein_node::{Behavior, StepContext, StepOutput};

/// A node that passes its `in` sequence through to `out` unchanged and
/// keeps a running count of every value it has ever seen.
///
/// The count lives in state under `"count"` (default 0) and grows by
/// the number of inbound values each tick, including zero on null-op
/// ticks.
#[derive(Debug, Default)]
pub struct Meter;

impl Meter {
    /// Create a meter.
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for Meter {
    fn input_ports(&self) -> &'static [&'static str] {
        &["in"]
    }

    fn output_ports(&self) -> &'static [&'static str] {
        &["out"]
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepOutput, NodeError> {
        let seen = ctx.input("in").to_vec();
        let count = ctx.state_int("count").unwrap_or(0) + seen.len() as i64;
        Ok(StepOutput::new()
            .patch("count", Value::Int(count))
            .emit("out", seen))
    }
}
