//! Per-bus and per-stop statistics returned by catalogue queries.

use std::collections::BTreeSet;

/// Structural statistics of one bus route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusInfo {
    /// Stops in the driven sequence, counting repeats.
    pub stop_count: usize,
    /// Distinct stops on the route.
    pub unique_stop_count: usize,
    /// Sum of road distances over consecutive stops, metres.
    pub physical_length: u64,
    /// Sum of great-circle distances over the same pairs, metres.
    pub geo_length: f64,
}

impl BusInfo {
    /// Ratio of road length to straight-line length.
    ///
    /// A route whose stops all share one position has no geographic length:
    /// it reports `Some(1.0)` when its road length is also zero and `None`
    /// otherwise, since no finite ratio exists.
    pub fn curvature(&self) -> Option<f64> {
        if self.geo_length > 0.0 {
            Some(self.physical_length as f64 / self.geo_length)
        } else if self.physical_length == 0 {
            Some(1.0)
        } else {
            None
        }
    }
}

/// Buses serving one stop, in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopInfo<'a> {
    pub buses: BTreeSet<&'a str>,
}

impl StopInfo<'_> {
    pub fn is_served(&self) -> bool {
        !self.buses.is_empty()
    }
}
