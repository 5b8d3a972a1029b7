//! `tc-render` — SVG route maps.
//!
//! The renderer receives finished geometry (a [`MapScene`] of named route
//! polylines and stop positions) and owns no transit logic.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`scene`]     | `MapScene`, `RouteLine`, `StopMark`                     |
//! | [`projector`] | `SphereProjector` — lat/lng onto the padded canvas      |
//! | [`renderer`]  | `MapRenderer` — scene to layered SVG document           |
//! | [`settings`]  | `RenderSettings`                                        |
//! | [`svg`]       | `Document`, `Polyline`, `Circle`, `Text`, `Color`       |
//! | [`error`]     | `RenderError`, `RenderResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on settings and colours.   |

pub mod error;
pub mod projector;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod svg;


pub use error::{RenderError, RenderResult};
pub use projector::SphereProjector;
pub use renderer::MapRenderer;
pub use scene::{MapScene, RouteLine, StopMark};
pub use settings::RenderSettings;
pub use svg::{Color, Document};
