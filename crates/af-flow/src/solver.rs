//! Maximum-flow trait and the Edmonds–Karp implementation.
//!
//! # Pluggability
//!
//! The planner calls the solver through [`MaxFlowSolver`], so another
//! augmenting strategy can be dropped in without touching the decomposer or
//! the scheduler.  [`EdmondsKarp`] is the default and the only one shipped.
//!
//! # Why BFS
//!
//! Each augmentation follows a *shortest* (fewest-edges) residual path.  The
//! number of augmentations is then bounded by O(V·E) independently of the
//! capacities, which matters here because the start and end rooms carry
//! capacity equal to the ant count.

use std::collections::VecDeque;

use af_core::{EdgeId, VertexId};

use crate::network::{FlowNetwork, FlowStage};
use crate::{FlowError, FlowResult};

// ── MaxFlowSolver trait ───────────────────────────────────────────────────────

/// Pluggable maximum-flow algorithm.
pub trait MaxFlowSolver {
    /// Saturate `network` from `source` to `sink` and return the flow value.
    ///
    /// Implementations must leave the residual graph in `network` and mark
    /// it [`FlowStage::Solved`].  A value of zero is reported as
    /// [`FlowError::NoRoute`], never as `Ok(0)`.
    fn max_flow(
        &self,
        network: &mut FlowNetwork,
        source:  VertexId,
        sink:    VertexId,
    ) -> FlowResult<u32>;
}

// ── EdmondsKarp ───────────────────────────────────────────────────────────────

/// Repeated breadth-first augmenting-path search.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdmondsKarp;

impl EdmondsKarp {
    /// Push flow along one shortest augmenting path.
    ///
    /// Returns the bottleneck amount pushed, or `None` when the sink is no
    /// longer reachable in the residual graph.
    pub fn augment(network: &mut FlowNetwork, source: VertexId, sink: VertexId) -> Option<u32> {
        let prev_edge = shortest_augmenting_path(network, source, sink)?;

        let mut bottleneck = i32::MAX;
        let mut hops = 0usize;
        let mut v = sink;
        while v != source {
            let e = prev_edge[v.index()];
            bottleneck = bottleneck.min(network.residual(e));
            v = network.edge_from(e);
            hops += 1;
        }
        debug_assert!(bottleneck > 0);

        let mut v = sink;
        while v != source {
            let e = prev_edge[v.index()];
            network.push_flow(e, bottleneck);
            v = network.edge_from(e);
        }

        log::debug!("augmented {bottleneck} unit(s) along a {hops}-edge path");
        Some(bottleneck as u32)
    }
}

impl MaxFlowSolver for EdmondsKarp {
    fn max_flow(
        &self,
        network: &mut FlowNetwork,
        source:  VertexId,
        sink:    VertexId,
    ) -> FlowResult<u32> {
        if network.stage() != FlowStage::Fresh {
            return Err(FlowError::InvariantViolation(format!(
                "max flow requested on a network in stage {:?}",
                network.stage()
            )));
        }
        if source == sink {
            return Err(FlowError::NoRoute { from: source, to: sink });
        }

        let mut total: u32 = 0;
        let mut augmentations = 0usize;
        while let Some(pushed) = Self::augment(network, source, sink) {
            total += pushed;
            augmentations += 1;
        }

        log::info!("max flow {total} after {augmentations} augmentation(s)");
        if total == 0 {
            return Err(FlowError::NoRoute { from: source, to: sink });
        }
        network.set_stage(FlowStage::Solved(total));
        Ok(total)
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

/// Breadth-first search over edges with positive residual capacity.
///
/// Returns `prev_edge`, where `prev_edge[v]` is the edge that first reached
/// `v` (`EdgeId::INVALID` for unreached vertices and the source), or `None`
/// if the sink is unreachable.  The search stops as soon as the sink is
/// discovered.
fn shortest_augmenting_path(
    network: &FlowNetwork,
    source:  VertexId,
    sink:    VertexId,
) -> Option<Vec<EdgeId>> {
    let n = network.vertex_count();
    let mut prev_edge = vec![EdgeId::INVALID; n];
    let mut seen = vec![false; n];
    seen[source.index()] = true;

    let mut queue = VecDeque::from([source]);
    while let Some(u) = queue.pop_front() {
        for e in network.out_edges(u) {
            if network.residual(e) <= 0 {
                continue;
            }
            let v = network.edge_to(e);
            if seen[v.index()] {
                continue;
            }
            seen[v.index()] = true;
            prev_edge[v.index()] = e;
            if v == sink {
                return Some(prev_edge);
            }
            queue.push_back(v);
        }
    }
    None
}
