//! Extract room paths from a saturated flow network.
//!
//! Each round of extraction runs a BFS from the source over edges that still
//! carry positive flow and have not been consumed by an earlier path.  The
//! first path to reach the sink is peeled off: one unit of flow is removed
//! from each of its edges (mirrored on the reverse edges) and the edges are
//! marked consumed.  Vertices are folded back into rooms, so the `in`/`out`
//! halves of a room contribute a single entry.
//!
//! Every extracted path removes exactly one unit of source outflow, so the
//! path count must equal the max-flow value.  Anything else is reported as
//! [`FlowError::InvariantViolation`].

use std::collections::VecDeque;

use af_core::{EdgeId, RoomId, VertexId};

use crate::network::{FlowNetwork, FlowStage};
use crate::{FlowError, FlowResult, RoomPath};

/// One-shot path extractor over a solved network.
///
/// Borrowing the network mutably for the decomposer's whole lifetime, and
/// consuming the decomposer in [`decompose`](Self::decompose), means flows
/// cannot be read or changed by anything else mid-extraction.
pub struct PathDecomposer<'n> {
    network:  &'n mut FlowNetwork,
    consumed: Vec<bool>,
    expected: u32,
}

impl<'n> PathDecomposer<'n> {
    /// Wrap a network that a solver has brought to maximum flow.
    ///
    /// Fails if the network is fresh or has already been decomposed.
    pub fn new(network: &'n mut FlowNetwork) -> FlowResult<Self> {
        let FlowStage::Solved(expected) = network.stage() else {
            return Err(FlowError::InvariantViolation(format!(
                "decomposition requires a solved network, found stage {:?}",
                network.stage()
            )));
        };
        let consumed = vec![false; network.edge_count()];
        Ok(Self { network, consumed, expected })
    }

    /// Peel off paths until no positive-flow route from source to sink
    /// remains.
    pub fn decompose(mut self) -> FlowResult<Vec<RoomPath>> {
        let source = self.network.source();
        let sink   = self.network.sink();

        let mut paths = Vec::new();
        while let Some(vertices) = self.next_path(source, sink) {
            let path = fold_rooms(&vertices);
            log::debug!("extracted path #{} with {} rooms", paths.len(), path.len());
            paths.push(path);
        }

        self.network.set_stage(FlowStage::Decomposed);

        if paths.len() != self.expected as usize {
            return Err(FlowError::InvariantViolation(format!(
                "decomposition produced {} path(s) for a max flow of {}",
                paths.len(),
                self.expected
            )));
        }
        Ok(paths)
    }

    /// Find, consume, and return the vertex sequence of one path.
    fn next_path(&mut self, source: VertexId, sink: VertexId) -> Option<Vec<VertexId>> {
        let net = &*self.network;
        let n = net.vertex_count();
        let mut prev_edge = vec![EdgeId::INVALID; n];
        let mut seen = vec![false; n];
        seen[source.index()] = true;

        let mut queue = VecDeque::from([source]);
        let mut reached = false;
        'bfs: while let Some(u) = queue.pop_front() {
            for e in net.out_edges(u) {
                let v = net.edge_to(e);
                if net.flow(e) <= 0 || self.consumed[e.index()] || seen[v.index()] {
                    continue;
                }
                seen[v.index()] = true;
                prev_edge[v.index()] = e;
                if v == sink {
                    reached = true;
                    break 'bfs;
                }
                queue.push_back(v);
            }
        }
        if !reached {
            return None;
        }

        let mut vertices = vec![sink];
        let mut v = sink;
        while v != source {
            let e = prev_edge[v.index()];
            self.network.push_flow(e, -1);
            self.consumed[e.index()] = true;
            v = self.network.edge_from(e);
            vertices.push(v);
        }
        vertices.reverse();
        Some(vertices)
    }
}

/// Map vertices to rooms.  Only flow-carrying forward edges are walked, so
/// a room's in and out halves are always adjacent and collapse with `dedup`.
pub(crate) fn fold_rooms(vertices: &[VertexId]) -> RoomPath {
    let mut rooms: Vec<RoomId> = vertices.iter().map(|v| v.room()).collect();
    rooms.dedup();
    RoomPath::new(rooms)
}
