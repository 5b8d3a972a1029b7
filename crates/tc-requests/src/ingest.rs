//! Feeding base requests into a [`Catalogue`].
//!
//! Records may reference stops declared later in the same batch, so a batch
//! is applied in three passes:
//!
//! 1. every `Stop` record → `add_stop`
//! 2. every stop's `road_distances` → `set_distance`
//! 3. every `Bus` record → `add_bus`
//!
//! The first failing record aborts ingestion; the error names it.

use tracing::{info, warn};

use tc_catalogue::{Catalogue, CatalogueError};

use crate::records::BaseRequest;
use crate::{RequestError, RequestResult};

/// Apply `requests` to `catalogue`.
pub fn ingest(catalogue: &mut Catalogue, requests: &[BaseRequest]) -> RequestResult<()> {
    let stops = || {
        requests.iter().filter_map(|r| match r {
            BaseRequest::Stop(s) => Some(s),
            BaseRequest::Bus(_) => None,
        })
    };
    let buses = || {
        requests.iter().filter_map(|r| match r {
            BaseRequest::Bus(b) => Some(b),
            BaseRequest::Stop(_) => None,
        })
    };

    for stop in stops() {
        catalogue.add_stop(stop.name.as_str(), stop.position()).inspect_err(|err| {
            warn!(stop = %stop.name, %err, "stop record rejected");
        })?;
    }

    for stop in stops() {
        for (to, &meters) in &stop.road_distances {
            catalogue
                .set_distance(&stop.name, to, meters)
                .map_err(|err| match err {
                    CatalogueError::UnknownStop(_) => RequestError::MalformedDistanceSpec {
                        from: stop.name.clone(),
                        to: to.clone(),
                    },
                    other => other.into(),
                })
                .inspect_err(|err| warn!(%err, "distance record rejected"))?;
        }
    }

    for bus in buses() {
        catalogue
            .add_bus(bus.name.as_str(), &bus.stops, bus.is_roundtrip)
            .inspect_err(|err| warn!(bus = %bus.name, %err, "bus record rejected"))?;
    }

    info!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        "catalogue ingested"
    );
    Ok(())
}
