//! Response records, serialised one per stat request.

use serde::Serialize;

use tc_catalogue::BusInfo;
use tc_router::{Itinerary, RouteItem};

pub const NOT_FOUND: &str = "not found";
pub const CURVATURE_UNDEFINED: &str = "curvature undefined: route has no geographic length";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Bus {
        request_id: i64,
        stop_count: usize,
        unique_stop_count: usize,
        route_length: u64,
        curvature: f64,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items: Vec<ResponseItem>,
    },
    Map {
        request_id: i64,
        map: String,
    },
    Error {
        request_id: i64,
        error_message: String,
    },
}

impl Response {
    /// Statistics of one bus.  A route with road length but no
    /// geographic length has no finite curvature and answers with an error.
    pub fn bus(request_id: i64, info: &BusInfo) -> Self {
        match info.curvature() {
            Some(curvature) => Response::Bus {
                request_id,
                stop_count: info.stop_count,
                unique_stop_count: info.unique_stop_count,
                route_length: info.physical_length,
                curvature,
            },
            None => Self::error(request_id, CURVATURE_UNDEFINED),
        }
    }

    pub fn route(request_id: i64, itinerary: Itinerary) -> Self {
        Response::Route {
            request_id,
            total_time: itinerary.total_time,
            items: itinerary.items.into_iter().map(ResponseItem::from).collect(),
        }
    }

    pub fn error(request_id: i64, message: impl Into<String>) -> Self {
        Response::Error { request_id, error_message: message.into() }
    }

    pub fn not_found(request_id: i64) -> Self {
        Self::error(request_id, NOT_FOUND)
    }

    pub fn request_id(&self) -> i64 {
        match self {
            Response::Bus { request_id, .. }
            | Response::Stop { request_id, .. }
            | Response::Route { request_id, .. }
            | Response::Map { request_id, .. }
            | Response::Error { request_id, .. } => *request_id,
        }
    }
}

/// Itinerary step as it appears in a `Route` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ResponseItem {
    Wait { stop_name: String, time: f64 },
    Bus { bus: String, span_count: u32, time: f64 },
}

impl From<RouteItem> for ResponseItem {
    fn from(item: RouteItem) -> Self {
        match item {
            RouteItem::Wait { stop_name, time } => ResponseItem::Wait { stop_name, time },
            RouteItem::Ride { bus, span_count, time } => ResponseItem::Bus { bus, span_count, time },
        }
    }
}
