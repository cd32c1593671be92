//! Flow network representation and builder.
//!
//! # Room splitting
//!
//! Every room `r` becomes two vertices, `in = 2r` and `out = 2r + 1`,
//! joined by an internal edge `in → out`.  The internal edge has capacity 1,
//! which is what enforces single occupancy; the start and end rooms get the
//! configured endpoint capacity instead.  Every corridor `{a, b}` becomes
//! the two directed edges `a.out → b.in` and `b.out → a.in`, capacity 1 each.
//!
//! The source of the flow problem is `start.out`; the sink is `end.in`.
//!
//! # Edge arena
//!
//! Edges live in flat arrays indexed by `EdgeId`, sorted by tail vertex so
//! that the outgoing edges of a vertex form the contiguous CSR range
//!
//! ```text
//! out_start[v] .. out_start[v+1]
//! ```
//!
//! Each forward edge is paired with a capacity-0 reverse edge.  The pairing
//! is an `EdgeId` handle in `edge_rev`, not a reference; both directions
//! always satisfy `flow[e] == -flow[rev[e]]`.

use af_core::{EdgeId, PlanConfig, RoomId, VertexId};
use af_graph::RoomGraph;

use crate::{FlowError, FlowResult};

// ── FlowStage ─────────────────────────────────────────────────────────────────

/// How far a network has progressed through the pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlowStage {
    /// Built, all flows zero.
    Fresh,
    /// A solver reached maximum flow of the given value.
    Solved(u32),
    /// Paths have been extracted; flows along them were consumed.
    Decomposed,
}

// ── FlowNetwork ───────────────────────────────────────────────────────────────

/// Directed capacitated graph in CSR form with paired reverse edges.
///
/// Topology is fixed at construction; only flows change.  Construct with
/// [`FlowNetwork::from_graph`] or [`FlowNetworkBuilder`].
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    /// CSR row pointer.  Length = `vertex_count + 1`.
    out_start: Vec<u32>,

    // ── Edge arena (indexed by EdgeId) ────────────────────────────────────
    edge_from: Vec<VertexId>,
    edge_to:   Vec<VertexId>,
    edge_cap:  Vec<i32>,
    edge_flow: Vec<i32>,
    edge_rev:  Vec<EdgeId>,

    source: VertexId,
    sink:   VertexId,
    stage:  FlowStage,
}

impl FlowNetwork {
    /// Split every room of `graph` into an in/out pair and build the network.
    ///
    /// Pure construction: the graph is not modified and the result depends
    /// only on `graph` and `config`.
    pub fn from_graph(graph: &RoomGraph, config: &PlanConfig) -> FlowNetwork {
        let room_count = graph.room_count();
        let mut b = FlowNetworkBuilder::with_capacity(
            room_count * 2,
            room_count + graph.corridor_count() * 2,
        );

        let endpoint_cap = config.endpoint_cap();
        for room in graph.rooms() {
            let cap = if graph.is_endpoint(room) { endpoint_cap } else { 1 };
            b.add_edge(VertexId::room_in(room), VertexId::room_out(room), cap);
        }
        for &(a, c) in graph.corridors() {
            b.add_edge(VertexId::room_out(a), VertexId::room_in(c), 1);
            b.add_edge(VertexId::room_out(c), VertexId::room_in(a), 1);
        }

        b.build(VertexId::room_out(graph.start()), VertexId::room_in(graph.end()))
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.out_start.len() - 1
    }

    /// Number of arena edges, reverse edges included.
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    #[inline]
    pub fn source(&self) -> VertexId {
        self.source
    }

    #[inline]
    pub fn sink(&self) -> VertexId {
        self.sink
    }

    #[inline]
    pub fn stage(&self) -> FlowStage {
        self.stage
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Outgoing arena edges of `v` (forward and reverse) in insertion order.
    #[inline]
    pub fn out_edges(&self, v: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.out_start[v.index()];
        let end   = self.out_start[v.index() + 1];
        (start..end).map(EdgeId)
    }

    // ── Edge attributes ───────────────────────────────────────────────────

    #[inline]
    pub fn edge_from(&self, e: EdgeId) -> VertexId {
        self.edge_from[e.index()]
    }

    #[inline]
    pub fn edge_to(&self, e: EdgeId) -> VertexId {
        self.edge_to[e.index()]
    }

    #[inline]
    pub fn capacity(&self, e: EdgeId) -> i32 {
        self.edge_cap[e.index()]
    }

    #[inline]
    pub fn flow(&self, e: EdgeId) -> i32 {
        self.edge_flow[e.index()]
    }

    /// `capacity − flow`.  Positive on a reverse edge exactly when its
    /// forward partner carries flow.
    #[inline]
    pub fn residual(&self, e: EdgeId) -> i32 {
        self.edge_cap[e.index()] - self.edge_flow[e.index()]
    }

    #[inline]
    pub fn reverse(&self, e: EdgeId) -> EdgeId {
        self.edge_rev[e.index()]
    }

    /// `true` for edges created from a room or corridor; `false` for their
    /// residual partners.  Every forward edge has capacity ≥ 1.
    #[inline]
    pub fn is_forward(&self, e: EdgeId) -> bool {
        self.edge_cap[e.index()] > 0
    }

    /// The internal `in → out` edge of `room`.
    pub fn internal_edge(&self, room: RoomId) -> EdgeId {
        let vin  = VertexId::room_in(room);
        let vout = VertexId::room_out(room);
        self.out_edges(vin)
            .find(|&e| self.is_forward(e) && self.edge_to(e) == vout)
            .unwrap_or(EdgeId::INVALID)
    }

    /// Net flow leaving the source.
    pub fn flow_value(&self) -> i32 {
        self.out_edges(self.source).map(|e| self.flow(e)).sum()
    }

    // ── Mutation (solver / decomposer only) ───────────────────────────────

    /// Add `delta` to `e` and subtract it from its reverse edge.
    #[inline]
    pub(crate) fn push_flow(&mut self, e: EdgeId, delta: i32) {
        let rev = self.edge_rev[e.index()];
        self.edge_flow[e.index()]   += delta;
        self.edge_flow[rev.index()] -= delta;
    }

    pub(crate) fn set_stage(&mut self, stage: FlowStage) {
        self.stage = stage;
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Check every edge and vertex invariant:
    ///
    /// - `0 ≤ flow ≤ capacity` on forward edges (reverse edges mirror it),
    /// - `flow[e] == -flow[rev[e]]` and `rev[rev[e]] == e`,
    /// - net flow is zero at every vertex other than source and sink.
    pub fn check_invariants(&self) -> FlowResult<()> {
        for i in 0..self.edge_count() {
            let e   = EdgeId(i as u32);
            let rev = self.reverse(e);
            if self.reverse(rev) != e {
                return Err(violation(format!("{e} and {rev} are not mutually paired")));
            }
            if self.flow(e) != -self.flow(rev) {
                return Err(violation(format!(
                    "{e} flow {} is not the negation of {rev} flow {}",
                    self.flow(e),
                    self.flow(rev)
                )));
            }
            if self.is_forward(e) && !(0..=self.capacity(e)).contains(&self.flow(e)) {
                return Err(violation(format!(
                    "{e} ({} → {}) flow {} outside 0..={}",
                    self.edge_from(e),
                    self.edge_to(e),
                    self.flow(e),
                    self.capacity(e)
                )));
            }
        }
        for i in 0..self.vertex_count() {
            let v = VertexId(i as u32);
            if v == self.source || v == self.sink {
                continue;
            }
            let net: i32 = self.out_edges(v).map(|e| self.flow(e)).sum();
            if net != 0 {
                return Err(violation(format!("{v} has net outflow {net}")));
            }
        }
        Ok(())
    }
}

fn violation(msg: String) -> FlowError {
    FlowError::InvariantViolation(msg)
}

// ── FlowNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`FlowNetwork`] from explicit vertices and directed edges.
///
/// [`FlowNetwork::from_graph`] is the usual entry point; the builder is
/// public for callers (and tests) that need an arbitrary capacitated graph.
///
/// ```
/// use af_core::VertexId;
/// use af_flow::FlowNetworkBuilder;
///
/// let mut b = FlowNetworkBuilder::new(3);
/// b.add_edge(VertexId(0), VertexId(1), 2);
/// b.add_edge(VertexId(1), VertexId(2), 1);
/// let net = b.build(VertexId(0), VertexId(2));
/// assert_eq!(net.vertex_count(), 3);
/// assert_eq!(net.edge_count(), 4); // two forward + two reverse
/// ```
pub struct FlowNetworkBuilder {
    vertex_count: usize,
    raw:          Vec<RawEdge>,
}

struct RawEdge {
    from: VertexId,
    to:   VertexId,
    cap:  i32,
    /// Raw index of the partner edge.
    rev:  usize,
}

impl FlowNetworkBuilder {
    pub fn new(vertex_count: usize) -> Self {
        Self { vertex_count, raw: Vec::new() }
    }

    /// Pre-allocate for `forward_edges` forward edges (twice that many arena
    /// slots).
    pub fn with_capacity(vertex_count: usize, forward_edges: usize) -> Self {
        Self { vertex_count, raw: Vec::with_capacity(forward_edges * 2) }
    }

    /// Add a forward edge `from → to` and its capacity-0 reverse edge.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, cap: u32) {
        debug_assert!(from.index() < self.vertex_count && to.index() < self.vertex_count);
        debug_assert!(cap > 0, "forward edges need positive capacity");
        let fwd = self.raw.len();
        let cap = i32::try_from(cap).unwrap_or(i32::MAX);
        self.raw.push(RawEdge { from, to, cap, rev: fwd + 1 });
        self.raw.push(RawEdge { from: to, to: from, cap: 0, rev: fwd });
    }

    /// Consume the builder.  Edges are stably sorted by tail vertex, so each
    /// vertex keeps its edges in insertion order; reverse handles are
    /// remapped to the sorted positions.
    pub fn build(self, source: VertexId, sink: VertexId) -> FlowNetwork {
        let n = self.vertex_count;
        let m = self.raw.len();

        let mut order: Vec<usize> = (0..m).collect();
        order.sort_by_key(|&i| self.raw[i].from.0);

        let mut new_index = vec![0u32; m];
        for (new, &old) in order.iter().enumerate() {
            new_index[old] = new as u32;
        }

        let edge_from: Vec<VertexId> = order.iter().map(|&i| self.raw[i].from).collect();
        let edge_to:   Vec<VertexId> = order.iter().map(|&i| self.raw[i].to).collect();
        let edge_cap:  Vec<i32>      = order.iter().map(|&i| self.raw[i].cap).collect();
        let edge_rev:  Vec<EdgeId>   = order
            .iter()
            .map(|&i| EdgeId(new_index[self.raw[i].rev]))
            .collect();

        let mut out_start = vec![0u32; n + 1];
        for e in &self.raw {
            out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=n {
            out_start[i] += out_start[i - 1];
        }
        debug_assert_eq!(out_start[n] as usize, m);

        FlowNetwork {
            out_start,
            edge_from,
            edge_to,
            edge_cap,
            edge_flow: vec![0; m],
            edge_rev,
            source,
            sink,
            stage: FlowStage::Fresh,
        }
    }
}
