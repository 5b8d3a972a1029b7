//! Map requests: catalogue → scene → SVG.
//!
//! Every bus becomes a route line over its driven stop sequence; only
//! stops that some bus serves are drawn.

use tracing::info;

use tc_catalogue::Catalogue;
use tc_render::{MapRenderer, MapScene, RenderSettings, RouteLine, StopMark};

use crate::RequestResult;

/// Geometry of every bus and every served stop.
pub fn map_scene(catalogue: &Catalogue) -> MapScene {
    let stops = catalogue.stops();
    let mut served = vec![false; stops.len()];
    let mut routes = Vec::with_capacity(catalogue.bus_count());

    for bus in catalogue.buses() {
        for id in &bus.stops {
            served[id.index()] = true;
        }
        routes.push(RouteLine {
            name: bus.name.clone(),
            points: bus.stops.iter().map(|id| stops[id.index()].position).collect(),
            is_roundtrip: bus.is_roundtrip,
        });
    }

    let stops = stops
        .iter()
        .filter(|s| served[s.id.index()])
        .map(|s| StopMark { name: s.name.clone(), position: s.position })
        .collect();

    MapScene { routes, stops }
}

/// Render the whole catalogue to an SVG document string.
pub fn render_map(catalogue: &Catalogue, settings: RenderSettings) -> RequestResult<String> {
    let renderer = MapRenderer::new(settings)?;
    let svg = renderer.render(&map_scene(catalogue)).to_string();
    info!(bytes = svg.len(), "map rendered");
    Ok(svg)
}
