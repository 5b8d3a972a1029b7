//! Route graph representation and builder.
//!
//! # Data layout
//!
//! Vertices are catalogue `StopId`s.  Each edge means "board a bus at
//! `from`, ride it `span_count` stops, get off at `to`" and its weight is
//! the full cost of that option in minutes, boarding wait included.
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `StopId s`, its outgoing edges occupy the `EdgeId` range:
//!
//! ```text
//! vertex_out_start[s] .. vertex_out_start[s+1]
//! ```
//!
//! Parallel edges are kept: two buses (or two spans of one roundtrip bus)
//! connecting the same pair are distinct options with different weights.

use tc_core::{BusId, EdgeId, StopId};

// ── Edge ──────────────────────────────────────────────────────────────────────

/// One ride option, as added to a [`RouteGraphBuilder`] or read back with
/// [`RouteGraph::edge`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from:       StopId,
    pub to:         StopId,
    /// Wait plus ride time, minutes.  Never negative.
    pub weight:     f64,
    pub bus:        BusId,
    /// Number of consecutive stop-to-stop segments ridden.
    pub span_count: u32,
}

// ── RouteGraph ────────────────────────────────────────────────────────────────

/// Directed weighted multigraph in CSR format.
///
/// All fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`RouteGraphBuilder`].
#[derive(Debug, Clone)]
pub struct RouteGraph {
    /// CSR row pointer.  Length = `vertex_count + 1`.
    pub vertex_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source vertex of each edge.  Redundant with CSR but needed to walk a
    /// predecessor chain back to the source.
    pub edge_from: Vec<StopId>,

    pub edge_to: Vec<StopId>,

    /// Wait plus ride time in minutes.  Used as the Dijkstra cost.
    pub edge_weight: Vec<f64>,

    pub edge_bus: Vec<BusId>,

    pub edge_span: Vec<u32>,
}

impl RouteGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.vertex_out_start.len().saturating_sub(1)
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    #[inline]
    pub fn contains(&self, v: StopId) -> bool {
        v.index() < self.vertex_count()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `v`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, v: StopId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.vertex_out_start[v.index()] as usize;
        let end   = self.vertex_out_start[v.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    #[inline]
    pub fn out_degree(&self, v: StopId) -> usize {
        let start = self.vertex_out_start[v.index()] as usize;
        let end   = self.vertex_out_start[v.index() + 1] as usize;
        end - start
    }

    /// Gather the SoA columns of edge `e` back into an [`Edge`].
    pub fn edge(&self, e: EdgeId) -> Option<Edge> {
        let i = e.index();
        (i < self.edge_count()).then(|| Edge {
            from:       self.edge_from[i],
            to:         self.edge_to[i],
            weight:     self.edge_weight[i],
            bus:        self.edge_bus[i],
            span_count: self.edge_span[i],
        })
    }
}

// ── RouteGraphBuilder ─────────────────────────────────────────────────────────

/// Construct a [`RouteGraph`] incrementally, then call [`build`](Self::build).
///
/// Edges may be added in any order.  `build()` groups them by source vertex
/// with a stable sort, so edges leaving the same stop keep their insertion
/// order and the resulting `EdgeId`s are reproducible.
///
/// # Example
///
/// ```
/// use tc_core::{BusId, StopId};
/// use tc_router::{Edge, RouteGraphBuilder};
///
/// let mut b = RouteGraphBuilder::new(2);
/// b.add_edge(Edge { from: StopId(0), to: StopId(1), weight: 7.5, bus: BusId(0), span_count: 1 });
/// let g = b.build();
/// assert_eq!(g.vertex_count(), 2);
/// assert_eq!(g.edge_count(), 1);
/// ```
pub struct RouteGraphBuilder {
    vertex_count: usize,
    raw_edges:    Vec<Edge>,
}

impl RouteGraphBuilder {
    pub fn new(vertex_count: usize) -> Self {
        Self { vertex_count, raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of edges.
    pub fn with_capacity(vertex_count: usize, edges: usize) -> Self {
        Self { vertex_count, raw_edges: Vec::with_capacity(edges) }
    }

    /// Add a **directed** edge.  Both endpoints must be below `vertex_count`.
    pub fn add_edge(&mut self, edge: Edge) {
        debug_assert!(edge.from.index() < self.vertex_count && edge.to.index() < self.vertex_count);
        debug_assert!(edge.weight >= 0.0);
        self.raw_edges.push(edge);
    }

    pub fn vertex_count(&self) -> usize { self.vertex_count }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`RouteGraph`].
    ///
    /// Time complexity: O(E log E) for the edge sort.
    pub fn build(self) -> RouteGraph {
        let vertex_count = self.vertex_count;
        let edge_count = self.raw_edges.len();

        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:   Vec<StopId> = raw.iter().map(|e| e.from).collect();
        let edge_to:     Vec<StopId> = raw.iter().map(|e| e.to).collect();
        let edge_weight: Vec<f64>    = raw.iter().map(|e| e.weight).collect();
        let edge_bus:    Vec<BusId>  = raw.iter().map(|e| e.bus).collect();
        let edge_span:   Vec<u32>    = raw.iter().map(|e| e.span_count).collect();

        let mut vertex_out_start = vec![0u32; vertex_count + 1];
        for e in &raw {
            vertex_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=vertex_count {
            vertex_out_start[i] += vertex_out_start[i - 1];
        }
        debug_assert_eq!(vertex_out_start[vertex_count] as usize, edge_count);

        RouteGraph {
            vertex_out_start,
            edge_from,
            edge_to,
            edge_weight,
            edge_bus,
            edge_span,
        }
    }
}
