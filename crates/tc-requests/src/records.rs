//! Request records, as deserialised from a JSON request document.
//!
//! ```json
//! {
//!   "base_requests": [
//!     {"type": "Stop", "name": "A", "latitude": 55.6, "longitude": 37.2,
//!      "road_distances": {"B": 3900}},
//!     {"type": "Bus", "name": "14", "stops": ["A", "B"], "is_roundtrip": false}
//!   ],
//!   "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
//!   "render_settings": {"width": 600, "height": 400, "padding": 50, ...},
//!   "stat_requests": [
//!     {"id": 1, "type": "Bus", "name": "14"},
//!     {"id": 2, "type": "Stop", "name": "A"},
//!     {"id": 3, "type": "Route", "from": "A", "to": "B"},
//!     {"id": 4, "type": "Map"}
//!   ]
//! }
//! ```
//!
//! Unknown top-level keys are ignored.

use std::collections::BTreeMap;

use serde::Deserialize;

use tc_core::GeoPoint;
use tc_render::RenderSettings;
use tc_router::RoutingSettings;

/// A whole request document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestDocument {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,
    #[serde(default)]
    pub render_settings: Option<RenderSettings>,
}

impl RequestDocument {
    pub fn has_route_requests(&self) -> bool {
        self.stat_requests
            .iter()
            .any(|r| matches!(r, StatRequest::Route { .. }))
    }

    pub fn has_map_requests(&self) -> bool {
        self.stat_requests
            .iter()
            .any(|r| matches!(r, StatRequest::Map { .. }))
    }
}

/// One ingestion record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRecord),
    Bus(BusRecord),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Outgoing road distances, metres, keyed by destination stop name.
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

impl StopRecord {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusRecord {
    pub name: String,
    /// Stops as given: the full loop for a roundtrip, one direction otherwise.
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

/// One query.  `id` is echoed back as `request_id`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    Map { id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}
