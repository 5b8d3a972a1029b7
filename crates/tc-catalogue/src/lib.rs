//! `tc-catalogue` — the transit catalogue: stops, buses, and road distances.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`catalogue`] | `Catalogue`, `Stop`, `Bus`                             |
//! | [`stats`]     | `BusInfo`, `StopInfo`                                  |
//! | [`error`]     | `CatalogueError`, `CatalogueResult<T>`                 |
//!
//! # Lifecycle
//!
//! A catalogue is filled once during ingestion and only read afterwards.
//! There is no removal API, so `StopId`s stay dense and stable for the
//! lifetime of the value and can be used as graph vertices.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod catalogue;
pub mod error;
pub mod stats;

#[cfg(test)]
mod tests;

pub use catalogue::{Bus, Catalogue, Stop};
pub use error::{CatalogueError, CatalogueResult};
pub use stats::{BusInfo, StopInfo};
