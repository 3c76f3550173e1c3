//! Terminal accumulator: stores everything, emits nothing.

use skein_core::{NodeError, Value};
use skein_node::{Behavior, StepContext, StepOutput};

/// A sink that appends every inbound value, in arrival order, to a
/// persistent ordered list and never emits.
///
/// The accumulated list lives in state under `"stored"` as a
/// [`Value::List`]. An optional `"capacity"` config entry (Int) marks
/// the intended ceiling: values beyond it are still stored — a depot
/// never drops data — but each overflowing tick logs an
/// `over_capacity` contradiction for operators to inspect.
#[derive(Debug, Default)]
pub struct Depot;

impl Depot {
    /// Create a depot.
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for Depot {
    fn input_ports(&self) -> &'static [&'static str] {
        &["in"]
    }

    fn output_ports(&self) -> &'static [&'static str] {
        &[]
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepOutput, NodeError> {
        let mut stored: Vec<Value> = match ctx.state("stored") {
            Some(Value::List(items)) => items.clone(),
            _ => Vec::new(),
        };
        stored.extend(ctx.input("in").iter().cloned());

        if let Some(Value::Int(capacity)) = ctx.config("capacity") {
            if stored.len() as i64 > *capacity {
                ctx.contradict(
                    "over_capacity",
                    Some(format!("{} stored, capacity {capacity}", stored.len())),
                );
            }
        }

        Ok(StepOutput::new().patch("stored", Value::List(stored)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skein_core::ValueMap;
    use skein_test_utils::{step_once, value_map};

    #[test]
    fn accumulates_in_arrival_order_across_ticks() {
        // Inbound sequences [x], [], [y, z] → stored [x, y, z].
        let depot = Depot::new();
        let mut state = ValueMap::new();
        let batches: Vec<Vec<Value>> = vec![
            vec![Value::Text("x".into())],
            vec![],
            vec![Value::Text("y".into()), Value::Text("z".into())],
        ];

        for (i, batch) in batches.into_iter().enumerate() {
            let (result, _) = step_once(
                &depot,
                "d",
                i as u64 + 1,
                ValueMap::new(),
                state.clone(),
                &[("in", batch)],
            );
            let out = result.unwrap();
            // A depot has no output ports and emits on none.
            assert!(out.emits.is_empty());
            for (k, v) in out.patch {
                state.insert(k, v);
            }
        }

        assert_eq!(
            state.get("stored"),
            Some(&Value::List(vec![
                Value::Text("x".into()),
                Value::Text("y".into()),
                Value::Text("z".into()),
            ]))
        );
    }

    #[test]
    fn over_capacity_contradicts_but_still_stores() {
        let depot = Depot::new();
        let config = value_map(&[("capacity", Value::Int(1))]);
        let (result, contradictions) = step_once(
            &depot,
            "d",
            1,
            config,
            ValueMap::new(),
            &[("in", vec![Value::Int(1), Value::Int(2)])],
        );

        let out = result.unwrap();
        // Both values stored despite the breach.
        assert_eq!(
            out.patch.get("stored"),
            Some(&Value::List(vec![Value::Int(1), Value::Int(2)]))
        );
        assert_eq!(contradictions.len(), 1);
        assert_eq!(contradictions[0].code, "over_capacity");
    }

    #[test]
    fn within_capacity_logs_nothing() {
        let depot = Depot::new();
        let config = value_map(&[("capacity", Value::Int(5))]);
        let (result, contradictions) = step_once(
            &depot,
            "d",
            1,
            config,
            ValueMap::new(),
            &[("in", vec![Value::Int(1)])],
        );
        result.unwrap();
        assert!(contradictions.is_empty());
    }
}
