//! The [`StepOutput`] returned by behaviors: state patch + emissions.

use indexmap::IndexMap;
use skein_core::{Batch, Value, ValueMap};

/// The two authoritative outputs of one behavior step.
///
/// Both are optional in effect: an empty patch leaves persistent state
/// byte-for-byte unchanged, and an absent port entry means the port
/// emits an empty sequence this tick. The patch-merge contract is
/// explicit and total — every state key not present in the patch is
/// defined to be unchanged.
#[derive(Debug, Default)]
pub struct StepOutput {
    /// Keys to merge shallowly into persistent state.
    pub patch: ValueMap,
    /// Outbound value sequences, keyed by declared output port name.
    pub emits: IndexMap<&'static str, Batch>,
}

impl StepOutput {
    /// An output with no patch and no emissions (a null-op tick).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one key to the state patch, replacing any earlier value for
    /// the same key within this output.
    #[must_use]
    pub fn patch(mut self, key: impl Into<String>, value: Value) -> Self {
        self.patch.insert(key.into(), value);
        self
    }

    /// Append values to the sequence emitted on `port` this tick.
    #[must_use]
    pub fn emit(mut self, port: &'static str, values: impl IntoIterator<Item = Value>) -> Self {
        self.emits.entry(port).or_default().extend(values);
        self
    }

    /// Append a single value to the sequence emitted on `port`.
    #[must_use]
    pub fn emit_one(self, port: &'static str, value: Value) -> Self {
        self.emit(port, [value])
    }

    /// Whether this output patches nothing and emits nothing.
    pub fn is_noop(&self) -> bool {
        self.patch.is_empty() && self.emits.values().all(Batch::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_patch_and_emissions() {
        let out = StepOutput::new()
            .patch("count", Value::Int(5))
            .emit("out", [Value::Int(1), Value::Int(2)])
            .emit_one("out", Value::Int(3));

        assert_eq!(out.patch.get("count"), Some(&Value::Int(5)));
        assert_eq!(
            out.emits.get("out").unwrap().as_slice(),
            &[Value::Int(1), Value::Int(2), Value::Int(3)]
        );
        assert!(!out.is_noop());
    }

    #[test]
    fn empty_output_is_noop() {
        assert!(StepOutput::new().is_noop());
        // Emitting an empty sequence is still a no-op.
        let out = StepOutput::new().emit("out", []);
        assert!(out.is_noop());
    }

    #[test]
    fn later_patch_value_wins_within_one_output() {
        let out = StepOutput::new()
            .patch("k", Value::Int(1))
            .patch("k", Value::Int(2));
        assert_eq!(out.patch.get("k"), Some(&Value::Int(2)));
        assert_eq!(out.patch.len(), 1);
    }
}
