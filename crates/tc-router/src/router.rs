//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! [`TransportRouter`](crate::TransportRouter) calls routing through the
//! [`Router`] trait, so applications can swap in other engines (A*,
//! precomputed all-pairs tables) without touching graph construction.
//!
//! # Cost units
//!
//! Costs are edge weights, i.e. minutes, carried as `f64`.  All weights are
//! non-negative, which is what makes Dijkstra applicable.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use tc_core::{EdgeId, StopId};

use crate::graph::RouteGraph;

// ── RouteInfo ─────────────────────────────────────────────────────────────────

/// The result of a routing query: the edges of an optimal path in travel
/// order and their summed weight.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub total_weight: f64,
    pub edges: Vec<EdgeId>,
}

impl RouteInfo {
    /// The zero-cost route from a stop to itself.
    pub fn trivial() -> Self {
        Self { total_weight: 0.0, edges: Vec::new() }
    }

    /// `true` if the source and destination are the same stop.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine over a frozen [`RouteGraph`].
///
/// Every call is independent: the same graph and endpoints always give the
/// same answer.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one router can answer queries
/// from several threads at once.
pub trait Router: Send + Sync {
    /// Compute a minimum-weight route from `from` to `to`.
    ///
    /// Returns `None` if no path exists or either endpoint is not a vertex.
    /// `from == to` is the trivial route ([`RouteInfo::trivial`]), not
    /// `None`.
    fn route(&self, graph: &RouteGraph, from: StopId, to: StopId) -> Option<RouteInfo>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard point-to-point Dijkstra over the CSR graph, stopping as soon as
/// the target is settled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &RouteGraph, from: StopId, to: StopId) -> Option<RouteInfo> {
        if !graph.contains(from) || !graph.contains(to) {
            trace!(%from, %to, "route endpoint outside graph");
            return None;
        }
        dijkstra(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    stop: StopId,
}

impl Eq for State {}

// Min-heap by cost; ties broken by StopId so pop order is deterministic.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.stop.cmp(&self.stop))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra(graph: &RouteGraph, from: StopId, to: StopId) -> Option<RouteInfo> {
    if from == to {
        return Some(RouteInfo::trivial());
    }

    let n = graph.vertex_count();
    // dist[v] = best known cost to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached stops.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(State { cost: 0.0, stop: from });

    while let Some(State { cost, stop }) = heap.pop() {
        if stop == to {
            return Some(reconstruct(graph, &prev_edge, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[stop.index()] {
            continue;
        }

        for edge in graph.out_edges(stop) {
            let next = graph.edge_to[edge.index()];
            let new_cost = cost + graph.edge_weight[edge.index()];

            if new_cost < dist[next.index()] {
                dist[next.index()] = new_cost;
                prev_edge[next.index()] = edge;
                heap.push(State { cost: new_cost, stop: next });
            }
        }
    }

    None
}

fn reconstruct(graph: &RouteGraph, prev_edge: &[EdgeId], to: StopId, total_weight: f64) -> RouteInfo {
    let mut edges = Vec::new();
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        edges.push(e);
        cur = graph.edge_from[e.index()];
    }
    edges.reverse();
    RouteInfo { total_weight, edges }
}
