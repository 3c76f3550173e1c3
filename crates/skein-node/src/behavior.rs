//! The [`Behavior`] trait: one node kind's per-tick logic.

use crate::context::StepContext;
use crate::output::StepOutput;
use skein_core::NodeError;

/// Per-tick logic for one node kind.
///
/// # Contract
///
/// - `step()` MUST be deterministic: same (config, state, inputs)
///   produce identical outputs and identical contradiction entries.
/// - `&self` — behaviors are stateless objects; persistent node state
///   flows through the context snapshot and the returned patch.
/// - `input_ports()` and `output_ports()` are structural declarations,
///   consulted at graph construction, not per-tick.
/// - No observable side effects outside the returned [`StepOutput`]
///   and contradictions logged via
///   [`StepContext::contradict`](crate::StepContext::contradict).
///
/// # Object safety
///
/// This trait is object-safe; graphs store behaviors as
/// `Box<dyn Behavior>`.
///
/// # Examples
///
/// A minimal behavior that echoes its input and counts ticks:
///
/// ```
/// use skein_node::{Behavior, StepContext, StepOutput};
/// use skein_core::{NodeError, Value};
///
/// struct Echo;
///
/// impl Behavior for Echo {
///     fn input_ports(&self) -> &'static [&'static str] { &["in"] }
///     fn output_ports(&self) -> &'static [&'static str] { &["out"] }
///
///     fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepOutput, NodeError> {
///         let seen = ctx.input("in").to_vec();
///         let ticks = ctx.state_int("ticks").unwrap_or(0);
///         Ok(StepOutput::new()
///             .patch("ticks", Value::Int(ticks + 1))
///             .emit("out", seen))
///     }
/// }
///
/// let echo = Echo;
/// assert_eq!(echo.input_ports(), &["in"]);
/// ```
pub trait Behavior: Send + 'static {
    /// Names of the input ports this behavior accepts values on.
    ///
    /// Edges targeting any other port name are rejected at graph
    /// construction.
    fn input_ports(&self) -> &'static [&'static str];

    /// Names of the output ports this behavior may emit on.
    ///
    /// Edges originating from any other port name are rejected at
    /// graph construction. Emissions on undeclared ports are dropped.
    fn output_ports(&self) -> &'static [&'static str];

    /// Execute the behavior for one tick.
    ///
    /// Called at most once per tick, strictly after every node feeding
    /// any of this node's input ports has executed in the same tick.
    /// A hard error aborts the remainder of the tick; soft failures
    /// should be logged as contradictions instead.
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepOutput, NodeError>;
}
