//! `tc-core` — foundational types for the transit catalogue workspace.
//!
//! Every other `tc-*` crate depends on this one.  It has no `tc-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                       |
//! |-----------|------------------------------------------------|
//! | [`ids`]   | `StopId`, `BusId`, `EdgeId`                    |
//! | [`geo`]   | `GeoPoint`, great-circle distance              |
//! | [`number`]| `format_significant` (C++-style `%g` output)   |
//! | [`error`] | `TcError`, `TcResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod number;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TcError, TcResult};
pub use geo::GeoPoint;
pub use ids::{BusId, EdgeId, StopId};
pub use number::format_significant;
