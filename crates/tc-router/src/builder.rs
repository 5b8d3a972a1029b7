//! Route-graph synthesis from a populated [`Catalogue`].
//!
//! For every bus, each board/alight pair of positions in its driven stop
//! sequence becomes one edge.  The ride distance of an edge is the sum of
//! road distances along the sequence between the two positions, never a
//! shortcut through the network, and its weight is
//!
//! ```text
//! wait_time + distance / speed
//! ```
//!
//! | Bus kind  | Pairs enumerated                   | Deduplication               |
//! |-----------|------------------------------------|-----------------------------|
//! | roundtrip | `i < j` (a loop only runs forward) | none                        |
//! | linear    | all `i != j` of the expanded route | per `(from, to)`, min weight |
//!
//! Both kinds use prefix sums over the sequence, so each edge costs O(1)
//! and a bus with `k` stops costs O(k²).

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use tc_catalogue::{Bus, Catalogue};
use tc_core::StopId;

use crate::graph::{Edge, RouteGraph, RouteGraphBuilder};
use crate::{RouterResult, RoutingSettings};

/// One-shot builder turning a catalogue into a [`RouteGraph`].
pub struct GraphBuilder<'a> {
    catalogue: &'a Catalogue,
    wait_time: f64,
    speed:     f64,
}

impl<'a> GraphBuilder<'a> {
    /// Fails if `settings` would produce invalid weights.
    pub fn new(catalogue: &'a Catalogue, settings: &RoutingSettings) -> RouterResult<Self> {
        settings.validate()?;
        Ok(Self {
            catalogue,
            wait_time: settings.wait_time(),
            speed:     settings.speed_m_per_min(),
        })
    }

    /// Build the graph over every bus in the catalogue.
    ///
    /// Fails with the catalogue's `MissingDistance` if two consecutive stops
    /// of some bus have no road distance in either direction.
    pub fn build(self) -> RouterResult<RouteGraph> {
        let edge_estimate: usize = self
            .catalogue
            .buses()
            .iter()
            .map(|b| b.stops.len() * b.stops.len().saturating_sub(1))
            .sum();
        let mut graph = RouteGraphBuilder::with_capacity(self.catalogue.stop_count(), edge_estimate);

        for bus in self.catalogue.buses() {
            let before = graph.edge_count();
            if bus.is_roundtrip {
                self.add_roundtrip_bus(&mut graph, bus)?;
            } else {
                self.add_linear_bus(&mut graph, bus)?;
            }
            debug!(bus = %bus.name, edges = graph.edge_count() - before, "bus added to route graph");
        }

        let graph = graph.build();
        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            buses = self.catalogue.bus_count(),
            "route graph built"
        );
        Ok(graph)
    }

    #[inline]
    fn weight(&self, meters: u64) -> f64 {
        self.wait_time + meters as f64 / self.speed
    }

    /// Cumulative road distance along `bus.stops`.
    ///
    /// `forward[p]` is the distance driven from position 0 to `p`;
    /// `backward[p]` is the same stretch measured in the opposite direction,
    /// i.e. the sum of `distance(s[q+1], s[q])` for `q < p`.
    fn prefix_sums(&self, bus: &Bus) -> RouterResult<(Vec<u64>, Vec<u64>)> {
        let n = bus.stops.len();
        let mut forward = Vec::with_capacity(n);
        let mut backward = Vec::with_capacity(n);
        forward.push(0u64);
        backward.push(0u64);
        for (p, (from, to)) in bus.legs().enumerate() {
            forward.push(forward[p] + u64::from(self.catalogue.distance(from, to)?));
            backward.push(backward[p] + u64::from(self.catalogue.distance(to, from)?));
        }
        Ok((forward, backward))
    }

    fn add_roundtrip_bus(&self, graph: &mut RouteGraphBuilder, bus: &Bus) -> RouterResult<()> {
        let (forward, _) = self.prefix_sums(bus)?;
        let stops = &bus.stops;

        for i in 0..stops.len() {
            for j in i + 1..stops.len() {
                graph.add_edge(Edge {
                    from:       stops[i],
                    to:         stops[j],
                    weight:     self.weight(forward[j] - forward[i]),
                    bus:        bus.id,
                    span_count: (j - i) as u32,
                });
            }
        }
        Ok(())
    }

    fn add_linear_bus(&self, graph: &mut RouteGraphBuilder, bus: &Bus) -> RouterResult<()> {
        let (forward, backward) = self.prefix_sums(bus)?;
        let stops = &bus.stops;

        // Position of each (from, to) pair's edge in `edges`; keeps the
        // first-seen order so the output does not depend on hashing.
        let mut best: FxHashMap<(StopId, StopId), usize> = FxHashMap::default();
        let mut edges: Vec<Edge> = Vec::new();

        for i in 0..stops.len() {
            for j in 0..stops.len() {
                if i == j {
                    continue;
                }
                let meters = if i < j {
                    forward[j] - forward[i]
                } else {
                    backward[i] - backward[j]
                };
                let candidate = Edge {
                    from:       stops[i],
                    to:         stops[j],
                    weight:     self.weight(meters),
                    bus:        bus.id,
                    span_count: i.abs_diff(j) as u32,
                };

                match best.get(&(candidate.from, candidate.to)) {
                    Some(&slot) if edges[slot].weight <= candidate.weight => {}
                    Some(&slot) => edges[slot] = candidate,
                    None => {
                        best.insert((candidate.from, candidate.to), edges.len());
                        edges.push(candidate);
                    }
                }
            }
        }

        for edge in edges {
            graph.add_edge(edge);
        }
        Ok(())
    }
}
