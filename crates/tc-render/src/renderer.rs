//! Scene → SVG document.
//!
//! Layers are painted in a fixed order so labels stay readable:
//!
//! 1. one polyline per route, in route-name order, coloured from the palette
//! 2. route name labels at each terminal (underlayer, then coloured text)
//! 3. a white circle per stop, in stop-name order
//! 4. stop name labels (underlayer, then black text)

use tracing::debug;

use crate::projector::SphereProjector;
use crate::scene::{MapScene, RouteLine, StopMark};
use crate::settings::RenderSettings;
use crate::svg::{Circle, Color, Document, LineCap, LineJoin, Polyline, Styled, Text};
use crate::RenderResult;

const FONT_FAMILY: &str = "Verdana";

pub struct MapRenderer {
    settings: RenderSettings,
}

impl MapRenderer {
    /// Validate `settings` once; rendering itself cannot fail.
    pub fn new(settings: RenderSettings) -> RenderResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn render(&self, scene: &MapScene) -> Document {
        let mut routes: Vec<&RouteLine> = scene.routes.iter().filter(|r| !r.points.is_empty()).collect();
        routes.sort_by(|a, b| a.name.cmp(&b.name));
        let mut stops: Vec<&StopMark> = scene.stops.iter().collect();
        stops.sort_by(|a, b| a.name.cmp(&b.name));

        let s = &self.settings;
        let projector = SphereProjector::new(
            routes.iter().flat_map(|r| r.points.iter().copied()),
            s.width,
            s.height,
            s.padding,
        );

        let mut doc = Document::new();

        for (i, route) in routes.iter().enumerate() {
            let points = route.points.iter().map(|&p| projector.project(p)).collect();
            doc.add(
                Polyline::new(points)
                    .fill(Color::None)
                    .stroke(s.bus_color(i))
                    .stroke_width(s.line_width)
                    .line_cap(LineCap::Round)
                    .line_join(LineJoin::Round),
            );
        }

        for (i, route) in routes.iter().enumerate() {
            for terminal in route.terminals() {
                let label = || {
                    Text::new(projector.project(terminal), route.name.as_str())
                        .offset(s.bus_label_offset())
                        .font_size(s.bus_label_font_size)
                        .font_family(FONT_FAMILY)
                        .font_weight("bold")
                };
                doc.add(self.underlayer(label()));
                doc.add(label().fill(s.bus_color(i)));
            }
        }

        for stop in &stops {
            doc.add(Circle::new(projector.project(stop.position), s.stop_radius).fill("white"));
        }

        for stop in &stops {
            let label = || {
                Text::new(projector.project(stop.position), stop.name.as_str())
                    .offset(s.stop_label_offset())
                    .font_size(s.stop_label_font_size)
                    .font_family(FONT_FAMILY)
            };
            doc.add(self.underlayer(label()));
            doc.add(label().fill("black"));
        }

        debug!(routes = routes.len(), stops = stops.len(), elements = doc.len(), "map rendered");
        doc
    }

    fn underlayer(&self, text: Text) -> Text {
        let color = self.settings.underlayer_color.clone();
        text.fill(color.clone())
            .stroke(color)
            .stroke_width(self.settings.underlayer_width)
            .line_cap(LineCap::Round)
            .line_join(LineJoin::Round)
    }
}
