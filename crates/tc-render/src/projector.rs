//! Flat projection of geographic points onto the SVG canvas.
//!
//! Longitude maps linearly to `x` and latitude to `y` with north up.  One
//! zoom factor is used for both axes so shapes keep their aspect ratio; it
//! is the largest factor that fits every point inside the padded canvas.

use tc_core::GeoPoint;

use crate::svg::Point;

/// Spans narrower than this (degrees) are treated as zero.
const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereProjector {
    padding: f64,
    min_lng: f64,
    max_lat: f64,
    zoom:    f64,
}

impl SphereProjector {
    /// Fit `points` into a `width × height` canvas with `padding` on every
    /// side.  With no points, or all points in one place, every point maps
    /// to `(padding, padding)`.
    pub fn new<I>(points: I, width: f64, height: f64, padding: f64) -> Self
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut points = points.into_iter().peekable();
        if points.peek().is_none() {
            return Self { padding, min_lng: 0.0, max_lat: 0.0, zoom: 0.0 };
        }

        let (mut min_lng, mut max_lng) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in points {
            min_lng = min_lng.min(p.lng);
            max_lng = max_lng.max(p.lng);
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
        }

        let width_zoom = (max_lng - min_lng > EPSILON).then(|| (width - 2.0 * padding) / (max_lng - min_lng));
        let height_zoom = (max_lat - min_lat > EPSILON).then(|| (height - 2.0 * padding) / (max_lat - min_lat));
        let zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(z), None) | (None, Some(z)) => z,
            (None, None) => 0.0,
        };

        Self { padding, min_lng, max_lat, zoom }
    }

    pub fn project(&self, p: GeoPoint) -> Point {
        Point::new(
            (p.lng - self.min_lng) * self.zoom + self.padding,
            (self.max_lat - p.lat) * self.zoom + self.padding,
        )
    }
}
