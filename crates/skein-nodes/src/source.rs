//! Deterministic generator: emits one value per tick, forever.

use skein_core::{NodeError, Value};
use skein_node::{Behavior, StepContext, StepOutput};

/// A node that emits one value on `out` every tick and ignores all
/// inbound values.
///
/// With a `"value"` config entry the emitted value is that fixed value;
/// without one, the running counter is emitted, so N ticks from empty
/// state produce the sequence `0, 1, 2, ..., N-1`. The counter lives in
/// state under `"counter"` (default 0) and advances by `"stride"`
/// (config, default 1) whether or not a fixed value is configured.
///
/// # State
///
/// | key | type | meaning |
/// |-----|------|---------|
/// | `counter` | `Int` | ticks-elapsed counter, next value to emit |
#[derive(Debug, Default)]
pub struct Source;

impl Source {
    /// Create a source. Configuration is read from the node config at
    /// step time, not captured here.
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for Source {
    fn input_ports(&self) -> &'static [&'static str] {
        &[]
    }

    fn output_ports(&self) -> &'static [&'static str] {
        &["out"]
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepOutput, NodeError> {
        let counter = ctx.state_int("counter").unwrap_or(0);
        let stride = match ctx.config("stride") {
            None => 1,
            Some(Value::Int(s)) => *s,
            Some(other) => {
                return Err(NodeError::BadConfig {
                    key: "stride".into(),
                    reason: format!("expected Int, got {other:?}"),
                })
            }
        };

        let emitted = match ctx.config("value") {
            Some(fixed) => fixed.clone(),
            None => Value::Int(counter),
        };

        Ok(StepOutput::new()
            .patch("counter", Value::Int(counter + stride))
            .emit_one("out", emitted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skein_core::ValueMap;
    use skein_test_utils::{step_once, value_map};

    #[test]
    fn counts_from_zero_without_configured_value() {
        let source = Source::new();
        let mut state = ValueMap::new();
        let mut emitted = Vec::new();

        for tick in 1..=4 {
            let (result, _) =
                step_once(&source, "src", tick, ValueMap::new(), state.clone(), &[]);
            let out = result.unwrap();
            emitted.extend(out.emits.get("out").unwrap().iter().cloned());
            for (k, v) in out.patch {
                state.insert(k, v);
            }
        }

        assert_eq!(
            emitted,
            vec![Value::Int(0), Value::Int(1), Value::Int(2), Value::Int(3)]
        );
        assert_eq!(state.get("counter"), Some(&Value::Int(4)));
    }

    #[test]
    fn configured_value_repeats_but_counter_still_advances() {
        let source = Source::new();
        let config = value_map(&[("value", Value::Text("pulse".into()))]);
        let state = value_map(&[("counter", Value::Int(7))]);

        let (result, _) = step_once(&source, "src", 8, config, state, &[]);
        let out = result.unwrap();
        assert_eq!(
            out.emits.get("out").unwrap().as_slice(),
            &[Value::Text("pulse".into())]
        );
        assert_eq!(out.patch.get("counter"), Some(&Value::Int(8)));
    }

    #[test]
    fn stride_controls_counter_advance() {
        let source = Source::new();
        let config = value_map(&[("stride", Value::Int(10))]);
        let (result, _) = step_once(&source, "src", 1, config, ValueMap::new(), &[]);
        let out = result.unwrap();
        assert_eq!(out.emits.get("out").unwrap().as_slice(), &[Value::Int(0)]);
        assert_eq!(out.patch.get("counter"), Some(&Value::Int(10)));
    }

    #[test]
    fn non_int_stride_is_a_config_defect() {
        let source = Source::new();
        let config = value_map(&[("stride", Value::Text("fast".into()))]);
        let (result, _) = step_once(&source, "src", 1, config, ValueMap::new(), &[]);
        assert!(matches!(
            result,
            Err(NodeError::BadConfig { key, .. }) if key == "stride"
        ));
    }

    #[test]
    fn inbound_values_are_ignored() {
        let source = Source::new();
        let (result, _) = step_once(
            &source,
            "src",
            1,
            ValueMap::new(),
            ValueMap::new(),
            &[("out", vec![Value::Int(99)])],
        );
        let out = result.unwrap();
        assert_eq!(out.emits.get("out").unwrap().as_slice(), &[Value::Int(0)]);
    }
}
