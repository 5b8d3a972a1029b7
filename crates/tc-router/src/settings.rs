//! Routing configuration.
//!
//! Times are in minutes throughout the router: edge weights, route totals,
//! and itinerary items all share the unit of `bus_wait_time`.

use tc_core::{TcError, TcResult};

/// Wait time and bus velocity, as supplied by the request document.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingSettings {
    /// Minutes spent waiting at a stop before every boarding.
    pub bus_wait_time: u32,
    /// Bus speed, km/h.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        Self { bus_wait_time, bus_velocity }
    }

    /// Reject settings that would produce zero, negative, or non-finite
    /// edge weights.
    pub fn validate(&self) -> TcResult<()> {
        if self.bus_wait_time == 0 {
            return Err(TcError::Config("bus_wait_time must be positive".into()));
        }
        if !(self.bus_velocity.is_finite() && self.bus_velocity > 0.0) {
            return Err(TcError::Config(format!(
                "bus_velocity must be a positive number, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn wait_time(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Bus speed converted to metres per minute.
    #[inline]
    pub fn speed_m_per_min(&self) -> f64 {
        self.bus_velocity * 1000.0 / 60.0
    }
}
