//! The contradiction ledger: detected inconsistencies as data.
//!
//! Node logic reports logical inconsistencies it discovers mid-tick
//! without interrupting execution. Contradictions are successful-path
//! data inspected after the fact — a caller that wants "contradiction
//! found" to be fatal checks the ledger itself and decides.

use std::fmt;

use crate::id::NodeId;

/// An immutable record of a detected logical inconsistency.
///
/// Appended in the order logging occurs within a tick; never mutated
/// after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contradiction {
    /// The node whose logic detected the inconsistency.
    pub node: NodeId,
    /// Stable machine-readable code, e.g. `"negative_inventory"`.
    pub code: String,
    /// Optional human-readable elaboration.
    pub detail: Option<String>,
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.node, self.code)?;
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}

/// Append-only, clearable log of [`Contradiction`] records.
///
/// No deduplication and no capacity limit — callers needing capping
/// implement it above this layer.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<Contradiction>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn log(&mut self, node: NodeId, code: impl Into<String>, detail: Option<String>) {
        self.entries.push(Contradiction {
            node,
            code: code.into(),
            detail,
        });
    }

    /// Append an already-built record, preserving its field values.
    pub fn push(&mut self, entry: Contradiction) {
        self.entries.push(entry);
    }

    /// All records since the last [`clear`](Ledger::clear), in logging order.
    pub fn all(&self) -> &[Contradiction] {
        &self.entries
    }

    /// Iterate over the records in logging order.
    pub fn iter(&self) -> impl Iterator<Item = &Contradiction> {
        self.entries.iter()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the ledger. Does not affect node state.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_preserves_order_and_duplicates() {
        let mut ledger = Ledger::new();
        ledger.log(NodeId::from("a"), "over_capacity", None);
        ledger.log(NodeId::from("b"), "over_capacity", Some("93 > 90".into()));
        ledger.log(NodeId::from("a"), "over_capacity", None);

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.all()[0].node, NodeId::from("a"));
        assert_eq!(ledger.all()[1].detail.as_deref(), Some("93 > 90"));
        // No deduplication: identical records coexist.
        assert_eq!(ledger.all()[0], ledger.all()[2]);
    }

    #[test]
    fn clear_empties_without_resetting_anything_else() {
        let mut ledger = Ledger::new();
        ledger.log(NodeId::from("a"), "stale", None);
        assert!(!ledger.is_empty());
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.all(), &[]);
    }

    #[test]
    fn display_includes_detail_when_present() {
        let c = Contradiction {
            node: NodeId::from("depot-1"),
            code: "unexpected_emit".into(),
            detail: Some("sink produced output".into()),
        };
        assert_eq!(c.to_string(), "depot-1: unexpected_emit (sink produced output)");
    }
}
