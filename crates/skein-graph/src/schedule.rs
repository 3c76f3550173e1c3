//! Deterministic topological scheduling.
//!
//! Kahn's algorithm with a min-heap ready set ordered by ascending
//! [`NodeId`], so nodes with no ordering constraint between them always
//! execute in id order. This determinism is load-bearing: behaviors
//! have an observable side channel (the contradiction ledger) whose
//! entry order must be reproducible across runs and across graphs
//! built in different insertion orders.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use indexmap::IndexMap;
use skein_core::{GraphError, NodeId};

use crate::graph::Edge;

/// Compute a total execution order over `nodes` consistent with `edges`.
///
/// For every edge, the source precedes the target in the returned
/// order. Ties are broken by ascending node id.
///
/// Fails with [`GraphError::CycleDetected`] if the edge set is not
/// acyclic. Construction-time validation should have prevented this;
/// the re-check here guards the executor against any path that bypassed
/// it.
pub fn topological_order(nodes: &[NodeId], edges: &[Edge]) -> Result<Vec<NodeId>, GraphError> {
    let mut in_degree: IndexMap<&NodeId, usize> = nodes.iter().map(|id| (id, 0)).collect();
    for edge in edges {
        if let Some(deg) = in_degree.get_mut(&edge.target) {
            *deg += 1;
        }
    }

    let mut ready: BinaryHeap<Reverse<&NodeId>> = in_degree
        .iter()
        .filter(|(_, &deg)| deg == 0)
        .map(|(&id, _)| Reverse(id))
        .collect();

    let mut order = Vec::with_capacity(nodes.len());
    while let Some(Reverse(id)) = ready.pop() {
        order.push(id.clone());
        for edge in edges {
            if edge.source == *id {
                if let Some(deg) = in_degree.get_mut(&edge.target) {
                    *deg -= 1;
                    if *deg == 0 {
                        ready.push(Reverse(&edge.target));
                    }
                }
            }
        }
    }

    if order.len() != nodes.len() {
        return Err(GraphError::CycleDetected);
    }
    Ok(order)
}
