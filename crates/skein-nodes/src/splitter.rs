//! Lossless fan-out: duplicates one inbound stream onto two ports.

use skein_core::NodeError;
use skein_node::{Behavior, StepContext, StepOutput};

/// A node that duplicates its `in` sequence verbatim onto both `left`
/// and `right`.
///
/// Stateless. The two emitted sequences are independent copies with
/// identical order and length; downstream mutation of one cannot be
/// observed through the other.
#[derive(Debug, Default)]
pub struct Splitter;

impl Splitter {
    /// Create a splitter.
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for Splitter {
    fn input_ports(&self) -> &'static [&'static str] {
        &["in"]
    }

    fn output_ports(&self) -> &'static [&'static str] {
        &["left", "right"]
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepOutput, NodeError> {
        let seen = ctx.input("in").to_vec();
        Ok(StepOutput::new()
            .emit("left", seen.iter().cloned())
            .emit("right", seen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skein_core::{Value, ValueMap};
    use skein_test_utils::step_once;

    #[test]
    fn both_ports_receive_identical_copies() {
        let splitter = Splitter::new();
        let batch = vec![Value::Text("a".into()), Value::Text("b".into())];
        let (result, _) = step_once(
            &splitter,
            "split",
            1,
            ValueMap::new(),
            ValueMap::new(),
            &[("in", batch.clone())],
        );
        let out = result.unwrap();
        assert_eq!(out.emits.get("left").unwrap().as_slice(), batch.as_slice());
        assert_eq!(out.emits.get("right").unwrap().as_slice(), batch.as_slice());
        assert!(out.patch.is_empty());
    }

    #[test]
    fn empty_input_emits_empty_on_both_ports() {
        let splitter = Splitter::new();
        let (result, _) = step_once(
            &splitter,
            "split",
            1,
            ValueMap::new(),
            ValueMap::new(),
            &[],
        );
        let out = result.unwrap();
        assert!(out.emits.get("left").unwrap().is_empty());
        assert!(out.emits.get("right").unwrap().is_empty());
    }
}
