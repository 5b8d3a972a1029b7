//! Map rendering configuration, read from a document's `render_settings`.

use crate::svg::{Color, Point};
use crate::{RenderError, RenderResult};

/// Canvas size, stroke widths, label styles, and the bus colour palette.
///
/// Buses take palette colours in name order, wrapping around when there
/// are more buses than colours.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSettings {
    pub width:                f64,
    pub height:               f64,
    pub padding:              f64,
    pub line_width:           f64,
    pub stop_radius:          f64,
    pub bus_label_font_size:  u32,
    pub bus_label_offset:     [f64; 2],
    pub stop_label_font_size: u32,
    pub stop_label_offset:    [f64; 2],
    pub underlayer_color:     Color,
    pub underlayer_width:     f64,
    pub color_palette:        Vec<Color>,
}

impl RenderSettings {
    pub fn validate(&self) -> RenderResult<()> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be a positive number, got {value}")));
            }
        }
        let max_padding = self.width.min(self.height) / 2.0;
        if !(self.padding >= 0.0 && self.padding <= max_padding) {
            return Err(invalid("padding", format!("must lie in [0, {max_padding}], got {}", self.padding)));
        }
        for (field, value) in [
            ("line_width", self.line_width),
            ("stop_radius", self.stop_radius),
            ("underlayer_width", self.underlayer_width),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, format!("must be a non-negative number, got {value}")));
            }
        }
        if self.color_palette.is_empty() {
            return Err(RenderError::EmptyPalette);
        }
        Ok(())
    }

    /// Palette colour for the `index`-th bus in name order.
    pub fn bus_color(&self, index: usize) -> Color {
        match self.color_palette.len() {
            0 => Color::None,
            n => self.color_palette[index % n].clone(),
        }
    }

    pub fn bus_label_offset(&self) -> Point {
        Point::new(self.bus_label_offset[0], self.bus_label_offset[1])
    }

    pub fn stop_label_offset(&self) -> Point {
        Point::new(self.stop_label_offset[0], self.stop_label_offset[1])
    }
}

fn invalid(field: &'static str, reason: String) -> RenderError {
    RenderError::InvalidSettings { field, reason }
}
