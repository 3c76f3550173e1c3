//! Single-pass tick execution.
//!
//! A tick visits every node exactly once, in the deterministic schedule
//! order, so each node sees the values its upstream neighbors emitted
//! earlier in the same tick. There is no fixed-point iteration and no
//! intra-tick re-execution.

use skein_core::{Batch, Ledger, NodeId, TickError, TickId};
use skein_graph::Graph;
use skein_node::StepContext;

/// What a completed tick did: which tick it was and the order nodes ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// The tick that was executed.
    pub tick: TickId,
    /// Every node id, in the order stepped.
    pub order: Vec<NodeId>,
}

/// Execute one tick over the graph, draining contradictions into the
/// ledger.
///
/// Nodes run in schedule order. For each node the executor gathers the
/// batches staged on its inbound edges (concatenated per port in edge
/// insertion order), steps the behavior, merges the returned patch into
/// the node's state, and stages an independent copy of each emitted
/// batch onto every matching outbound edge.
///
/// On a behavior error the tick stops at the failing node and returns
/// [`TickError::NodeFailed`]. Everything committed up to that point
/// stays committed: earlier nodes keep their patched state, the ledger
/// keeps every entry logged so far (including the failing node's own),
/// and nodes after the failure are untouched this tick. Values staged
/// on edges whose target never ran are discarded.
pub fn execute_tick(
    graph: &mut Graph,
    ledger: &mut Ledger,
    tick: TickId,
) -> Result<TickReport, TickError> {
    let order: Vec<NodeId> = graph
        .schedule()
        .map_err(|_| TickError::CycleDetected)?
        .to_vec();

    // One staging slot per edge, indexed in edge insertion order.
    let mut staged: Vec<Batch> = vec![Batch::new(); graph.edge_count()];

    for id in &order {
        let inputs = gather_inputs(graph, &mut staged, id);

        let mut sink = Vec::new();
        let stepped = {
            let node = graph.node(id).expect("scheduled node exists");
            let mut ctx =
                StepContext::new(id, tick, node.config(), node.state(), &inputs, &mut sink);
            node.behavior().step(&mut ctx)
        };
        for entry in sink {
            ledger.push(entry);
        }

        let output = match stepped {
            Ok(output) => output,
            Err(reason) => {
                return Err(TickError::NodeFailed {
                    node: id.clone(),
                    reason,
                })
            }
        };

        graph
            .apply_patch(id, output.patch)
            .expect("scheduled node exists");

        for (port, batch) in output.emits {
            for (idx, edge) in graph.edges().iter().enumerate() {
                if edge.source == *id && edge.source_port == port {
                    staged[idx].extend(batch.iter().cloned());
                }
            }
        }
    }

    Ok(TickReport { tick, order })
}

/// Collect the batches staged on `id`'s inbound edges, keyed by declared
/// input port, concatenating multiple edges into one port in edge
/// insertion order. Consumes the staged slots.
fn gather_inputs(
    graph: &Graph,
    staged: &mut [Batch],
    id: &NodeId,
) -> indexmap::IndexMap<&'static str, Batch> {
    let node = graph.node(id).expect("scheduled node exists");
    let mut inputs = indexmap::IndexMap::new();
    for port in node.behavior().input_ports() {
        inputs.insert(*port, Batch::new());
    }
    for (idx, edge) in graph.edges().iter().enumerate() {
        if edge.target == *id {
            let batch = std::mem::take(&mut staged[idx]);
            if let Some(slot) = inputs.get_mut(edge.target_port) {
                slot.extend(batch);
            }
        }
    }
    inputs
}
