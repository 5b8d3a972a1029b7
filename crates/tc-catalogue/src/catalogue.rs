//! Stop arena, bus routes, and the directed road-distance table.
//!
//! # Data layout
//!
//! Stops live in a dense `Vec` indexed by [`StopId`]; the n-th stop added
//! gets `StopId(n)`.  Everything else refers to stops by id only: bus stop
//! sequences, distance-table keys, and (downstream) graph vertices.  Names
//! are resolved through a single hash index at ingestion and query time.
//!
//! # Road distances
//!
//! Distances are directed and may differ per direction.  A lookup of
//! `(from, to)` falls back to `(to, from)` when the forward entry is absent;
//! a stop is always 0 m from itself unless an explicit entry says otherwise.

use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use tc_core::{BusId, GeoPoint, StopId, TcError};

use crate::stats::{BusInfo, StopInfo};
use crate::{CatalogueError, CatalogueResult};

// ── Stop / Bus ────────────────────────────────────────────────────────────────

/// A named location.  Owned by the [`Catalogue`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub id:       StopId,
    pub name:     String,
    pub position: GeoPoint,
}

/// A bus route.
///
/// `stops` is the sequence the bus actually drives.  For a linear route
/// given as `[S0 .. Sn]` it holds the out-and-back form
/// `[S0 .. Sn, Sn-1 .. S0]`; roundtrip routes are stored as given.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bus {
    pub id:           BusId,
    pub name:         String,
    pub stops:        Vec<StopId>,
    pub is_roundtrip: bool,
}

impl Bus {
    /// Consecutive `(from, to)` stop pairs along the driven sequence.
    pub fn legs(&self) -> impl Iterator<Item = (StopId, StopId)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }
}

// ── Catalogue ─────────────────────────────────────────────────────────────────

/// In-memory transit catalogue.
///
/// Populated through [`add_stop`](Self::add_stop),
/// [`set_distance`](Self::set_distance) and [`add_bus`](Self::add_bus);
/// every query method takes `&self`, so a finished catalogue can be shared
/// between any number of readers.
#[derive(Debug, Default)]
pub struct Catalogue {
    stops:      Vec<Stop>,
    buses:      Vec<Bus>,
    stop_index: FxHashMap<String, StopId>,
    bus_index:  FxHashMap<String, BusId>,
    distances:  FxHashMap<(StopId, StopId), u32>,
    /// Buses serving each stop, indexed by `StopId`, in insertion order.
    stop_buses: Vec<Vec<BusId>>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Ingestion ─────────────────────────────────────────────────────────

    /// Insert a stop and return its id (sequential from 0).
    ///
    /// Names are unique keys: a second stop with the same name is rejected
    /// with [`CatalogueError::DuplicateStop`] and leaves the catalogue
    /// unchanged.
    pub fn add_stop(&mut self, name: impl Into<String>, position: GeoPoint) -> CatalogueResult<StopId> {
        let name = name.into();
        if self.stop_index.contains_key(&name) {
            return Err(CatalogueError::DuplicateStop(name));
        }
        if !position.is_valid() {
            return Err(TcError::InvalidCoordinates { lat: position.lat, lng: position.lng }.into());
        }

        let id = StopId::try_from(self.stops.len())
            .map_err(|_| TcError::Config("stop id space exhausted".into()))?;
        debug!(stop = %name, %id, %position, "stop added");

        self.stop_index.insert(name.clone(), id);
        self.stops.push(Stop { id, name, position });
        self.stop_buses.push(Vec::new());
        Ok(id)
    }

    /// Insert a bus route through the named stops.
    ///
    /// Every name must already be a stop: an unknown name fails with
    /// [`CatalogueError::UnknownStop`] rather than being skipped, since a
    /// shortened route would silently change lengths and itineraries.
    /// Linear routes (`is_roundtrip == false`) are expanded to their
    /// out-and-back form before storage.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> CatalogueResult<BusId> {
        let name = name.into();
        if self.bus_index.contains_key(&name) {
            return Err(CatalogueError::DuplicateBus(name));
        }
        if stop_names.is_empty() {
            return Err(CatalogueError::EmptyRoute(name));
        }

        let mut stops = stop_names
            .iter()
            .map(|s| {
                let s = s.as_ref();
                self.stop_id(s).ok_or_else(|| CatalogueError::UnknownStop(s.to_owned()))
            })
            .collect::<CatalogueResult<Vec<StopId>>>()?;

        if !is_roundtrip {
            let back: Vec<StopId> = stops.iter().rev().skip(1).copied().collect();
            stops.extend(back);
        }

        let id = BusId::try_from(self.buses.len())
            .map_err(|_| TcError::Config("bus id space exhausted".into()))?;

        let mut seen = FxHashSet::default();
        for &stop in &stops {
            if seen.insert(stop) {
                self.stop_buses[stop.index()].push(id);
            }
        }

        debug!(bus = %name, %id, stops = stops.len(), is_roundtrip, "bus added");
        self.bus_index.insert(name.clone(), id);
        self.buses.push(Bus { id, name, stops, is_roundtrip });
        Ok(id)
    }

    /// Record the road distance from `from` to `to`, by stop name.
    ///
    /// Overwrites any earlier entry for the same direction; the reverse
    /// direction is untouched.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: u32) -> CatalogueResult<()> {
        let from_id = self.stop_id(from).ok_or_else(|| CatalogueError::UnknownStop(from.to_owned()))?;
        let to_id = self.stop_id(to).ok_or_else(|| CatalogueError::UnknownStop(to.to_owned()))?;
        self.set_distance_by_id(from_id, to_id, meters)
    }

    /// Like [`set_distance`](Self::set_distance) but keyed by id.  An id
    /// outside the catalogue fails with [`CatalogueError::UnknownStop`]
    /// naming the id.
    pub fn set_distance_by_id(&mut self, from: StopId, to: StopId, meters: u32) -> CatalogueResult<()> {
        for id in [from, to] {
            if id.index() >= self.stops.len() {
                return Err(CatalogueError::UnknownStop(id.to_string()));
            }
        }
        self.distances.insert((from, to), meters);
        Ok(())
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Road distance in metres from `from` to `to`.
    ///
    /// Uses the forward entry if present, else the reverse one.  With
    /// neither, a stop is 0 m from itself and any other pair fails with
    /// [`CatalogueError::MissingDistance`].
    pub fn distance(&self, from: StopId, to: StopId) -> CatalogueResult<u32> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .or((from == to).then_some(0))
            .ok_or(CatalogueError::MissingDistance { from, to })
    }

    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| &self.stops[id.index()])
    }

    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_index.get(name).map(|id| &self.buses[id.index()])
    }

    #[inline]
    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    #[inline]
    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.index())
    }

    #[inline]
    pub fn bus(&self, id: BusId) -> Option<&Bus> {
        self.buses.get(id.index())
    }

    /// All stops in id order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses in insertion order.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// Route statistics for the named bus.
    pub fn bus_info(&self, name: &str) -> CatalogueResult<BusInfo> {
        let bus = self.find_bus(name).ok_or_else(|| CatalogueError::UnknownBus(name.to_owned()))?;

        let unique_stop_count = bus.stops.iter().collect::<FxHashSet<_>>().len();

        let mut physical_length = 0u64;
        let mut geo_length = 0.0;
        for (from, to) in bus.legs() {
            physical_length += u64::from(self.distance(from, to)?);
            geo_length += self.stops[from.index()]
                .position
                .distance_m(self.stops[to.index()].position);
        }

        Ok(BusInfo {
            stop_count: bus.stops.len(),
            unique_stop_count,
            physical_length,
            geo_length,
        })
    }

    /// Names of the buses serving the named stop, sorted.
    pub fn stop_info(&self, name: &str) -> CatalogueResult<StopInfo<'_>> {
        let id = self.stop_id(name).ok_or_else(|| CatalogueError::UnknownStop(name.to_owned()))?;
        let buses: BTreeSet<&str> = self.stop_buses[id.index()]
            .iter()
            .map(|bus| self.buses[bus.index()].name.as_str())
            .collect();
        Ok(StopInfo { buses })
    }
}
