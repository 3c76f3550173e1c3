//! Pure element-wise transform: every input becomes the same token.

use skein_core::{NodeError, Value};
use skein_node::{Behavior, StepContext, StepOutput};

/// A transformer that maps each inbound value independently to a fixed
/// result token, preserving the input sequence's length and order.
///
/// The token comes from the `"token"` config entry; without one,
/// `Text("deployed")` is emitted. Stateless.
#[derive(Debug, Default)]
pub struct DeployerRunner;

impl DeployerRunner {
    /// Create a deployer-runner.
    pub fn new() -> Self {
        Self
    }

    /// The token emitted when no `"token"` config entry is set.
    pub fn default_token() -> Value {
        Value::Text("deployed".into())
    }
}

impl Behavior for DeployerRunner {
    fn input_ports(&self) -> &'static [&'static str] {
        &["in"]
    }

    fn output_ports(&self) -> &'static [&'static str] {
        &["out"]
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepOutput, NodeError> {
        let token = ctx
            .config("token")
            .cloned()
            .unwrap_or_else(Self::default_token);
        let count = ctx.input("in").len();
        Ok(StepOutput::new().emit("out", std::iter::repeat(token).take(count)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skein_core::ValueMap;
    use skein_test_utils::{step_once, value_map};

    #[test]
    fn length_and_order_preserved() {
        let runner = DeployerRunner::new();
        let (result, _) = step_once(
            &runner,
            "dr",
            1,
            ValueMap::new(),
            ValueMap::new(),
            &[("in", vec![Value::Int(1), Value::Int(2), Value::Int(3)])],
        );
        let out = result.unwrap();
        assert_eq!(
            out.emits.get("out").unwrap().as_slice(),
            &[
                DeployerRunner::default_token(),
                DeployerRunner::default_token(),
                DeployerRunner::default_token(),
            ]
        );
        assert!(out.patch.is_empty());
    }

    #[test]
    fn configured_token_replaces_default() {
        let runner = DeployerRunner::new();
        let config = value_map(&[("token", Value::Int(0))]);
        let (result, _) = step_once(
            &runner,
            "dr",
            1,
            config,
            ValueMap::new(),
            &[("in", vec![Value::Text("job".into())])],
        );
        let out = result.unwrap();
        assert_eq!(out.emits.get("out").unwrap().as_slice(), &[Value::Int(0)]);
    }

    #[test]
    fn empty_input_emits_nothing() {
        let runner = DeployerRunner::new();
        let (result, _) =
            step_once(&runner, "dr", 1, ValueMap::new(), ValueMap::new(), &[]);
        let out = result.unwrap();
        assert!(out.emits.get("out").unwrap().is_empty());
    }
}
