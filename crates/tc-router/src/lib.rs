//! `tc-router` — route graph, shortest paths, and itineraries.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`graph`]     | `RouteGraph` (CSR multigraph), `RouteGraphBuilder`, `Edge` |
//! | [`builder`]   | `GraphBuilder` — synthesises the graph from a `Catalogue` |
//! | [`router`]    | `Router` trait, `RouteInfo`, `DijkstraRouter`             |
//! | [`settings`]  | `RoutingSettings` (wait time, velocity)                   |
//! | [`transport`] | `TransportRouter`, `Itinerary`, `RouteItem`               |
//! | [`error`]     | `RouterError`, `RouterResult<T>`                          |
//!
//! # Flow
//!
//! ```text
//! Catalogue ──GraphBuilder (once)──▶ RouteGraph ──Router (per query)──▶ RouteInfo
//!                                                   │
//!                                    TransportRouter └──▶ Itinerary (Wait / Ride)
//! ```
//!
//! The graph is immutable once built and every query takes `&self`, so a
//! `TransportRouter` can serve concurrent readers without locking.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod builder;
pub mod error;
pub mod graph;
pub mod router;
pub mod settings;
pub mod transport;


pub use builder::GraphBuilder;
pub use error::{RouterError, RouterResult};
pub use graph::{Edge, RouteGraph, RouteGraphBuilder};
pub use router::{DijkstraRouter, RouteInfo, Router};
pub use settings::RoutingSettings;
pub use transport::{Itinerary, RouteItem, RouteResult, TransportRouter};
