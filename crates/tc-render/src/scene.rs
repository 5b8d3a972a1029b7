//! Finished map geometry handed to the renderer.
//!
//! A scene knows names and coordinates only.  Whoever builds it decides
//! which routes and stops appear; the renderer decides how they look.

use tc_core::GeoPoint;

/// One bus route as driven, stop by stop.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLine {
    pub name:         String,
    /// Driven sequence.  A linear route is stored out-and-back, so its far
    /// terminal sits in the middle.
    pub points:       Vec<GeoPoint>,
    pub is_roundtrip: bool,
}

impl RouteLine {
    /// Where the route's name labels go: the first stop, plus the far
    /// terminal of a linear route unless both sit at the same position.
    pub fn terminals(&self) -> Vec<GeoPoint> {
        let Some(&first) = self.points.first() else {
            return Vec::new();
        };
        let mut out = vec![first];
        if !self.is_roundtrip {
            let far = self.points[(self.points.len() - 1) / 2];
            if far != first {
                out.push(far);
            }
        }
        out
    }
}

/// A stop served by at least one drawn route.
#[derive(Debug, Clone, PartialEq)]
pub struct StopMark {
    pub name:     String,
    pub position: GeoPoint,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapScene {
    pub routes: Vec<RouteLine>,
    pub stops:  Vec<StopMark>,
}
