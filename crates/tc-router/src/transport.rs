//! Itinerary facade over catalogue, graph, and router.
//!
//! A [`TransportRouter`] builds its graph once from a finished catalogue and
//! then answers any number of stop-to-stop queries.  Each edge of the
//! winning path expands to a `Wait` at the boarding stop followed by a
//! `Ride` on the edge's bus:
//!
//! ```text
//! edge { from: A, bus: "14", span_count: 3, weight: 11.2 }   (wait_time = 6)
//!   ──▶ Wait { stop_name: "A", time: 6.0 }
//!       Ride { bus: "14", span_count: 3, time: 5.2 }
//! ```

use tracing::trace;

use tc_catalogue::Catalogue;
use tc_core::{StopId, TcError};

use crate::builder::GraphBuilder;
use crate::graph::RouteGraph;
use crate::router::{DijkstraRouter, RouteInfo, Router};
use crate::{RouterError, RouterResult, RoutingSettings};

// ── Itinerary ─────────────────────────────────────────────────────────────────

/// One step of an itinerary.  Times are minutes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteItem {
    Wait { stop_name: String, time: f64 },
    Ride { bus: String, span_count: u32, time: f64 },
}

/// A complete itinerary: alternating `Wait`/`Ride` items and their total.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

/// Outcome of a named route query.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteResult {
    Found(Itinerary),
    NotFound,
}

impl RouteResult {
    pub fn itinerary(&self) -> Option<&Itinerary> {
        match self {
            RouteResult::Found(it) => Some(it),
            RouteResult::NotFound => None,
        }
    }
}

// ── TransportRouter ───────────────────────────────────────────────────────────

/// Frozen route graph plus the catalogue it was built from.
///
/// Holds only shared borrows and immutable data, so it is `Sync` whenever
/// `R` is and can be queried from several threads at once.
pub struct TransportRouter<'a, R: Router = DijkstraRouter> {
    catalogue: &'a Catalogue,
    settings:  RoutingSettings,
    graph:     RouteGraph,
    router:    R,
}

impl<'a> TransportRouter<'a, DijkstraRouter> {
    /// Build the graph with the default [`DijkstraRouter`].
    pub fn new(catalogue: &'a Catalogue, settings: RoutingSettings) -> RouterResult<Self> {
        Self::with_router(catalogue, settings, DijkstraRouter)
    }
}

impl<'a, R: Router> TransportRouter<'a, R> {
    pub fn with_router(catalogue: &'a Catalogue, settings: RoutingSettings, router: R) -> RouterResult<Self> {
        let graph = GraphBuilder::new(catalogue, &settings)?.build()?;
        Ok(Self { catalogue, settings, graph, router })
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// Optimal path between two stop ids.
    ///
    /// Fails with [`TcError::StopNotFound`] for an id outside the catalogue
    /// and [`RouterError::NoRoute`] when the target is unreachable.
    pub fn route_between(&self, from: StopId, to: StopId) -> RouterResult<RouteInfo> {
        for id in [from, to] {
            if !self.graph.contains(id) {
                return Err(TcError::StopNotFound(id).into());
            }
        }
        self.router
            .route(&self.graph, from, to)
            .ok_or(RouterError::NoRoute { from, to })
    }

    /// Itinerary between two stops by name.
    ///
    /// Unknown names and unreachable targets both give
    /// [`RouteResult::NotFound`]; a stop to itself is an empty itinerary
    /// with `total_time == 0`.
    pub fn build_route(&self, from: &str, to: &str) -> RouteResult {
        let (Some(from_id), Some(to_id)) = (self.catalogue.stop_id(from), self.catalogue.stop_id(to)) else {
            trace!(from, to, "route endpoint not in catalogue");
            return RouteResult::NotFound;
        };
        match self.route_between(from_id, to_id) {
            Ok(info) => RouteResult::Found(self.itinerary(&info)),
            Err(err) => {
                trace!(from, to, %err, "no route");
                RouteResult::NotFound
            }
        }
    }

    /// Expand a [`RouteInfo`] into `Wait`/`Ride` items.
    ///
    /// `info` must come from this router: its edges index this graph, and
    /// every edge's stop and bus ids index the catalogue the graph was
    /// built from.
    pub fn itinerary(&self, info: &RouteInfo) -> Itinerary {
        let wait_time = self.settings.wait_time();
        let stops = self.catalogue.stops();
        let buses = self.catalogue.buses();
        let mut items = Vec::with_capacity(info.edges.len() * 2);

        for edge in info.edges.iter().filter_map(|&e| self.graph.edge(e)) {
            let stop_name = stops[edge.from.index()].name.clone();
            let bus = buses[edge.bus.index()].name.clone();

            items.push(RouteItem::Wait { stop_name, time: wait_time });
            items.push(RouteItem::Ride {
                bus,
                span_count: edge.span_count,
                time: edge.weight - wait_time,
            });
        }

        Itinerary { total_time: info.total_weight, items }
    }
}
