//! Unit tests for tc-catalogue.
//!
//! All tests build small catalogues by hand.

#[cfg(test)]
mod helpers {
    use tc_core::GeoPoint;
    use crate::Catalogue;

    /// Three stops on the equator, one degree of longitude apart:
    ///
    ///   A:(0,0)  B:(0,1)  C:(0,2)
    ///
    /// Road distances A→B 1000, B→C 1100, C→A 1200 (each one direction
    /// only; the reverse falls back).
    pub fn triangle() -> Catalogue {
        let mut c = Catalogue::new();
        c.add_stop("A", GeoPoint::new(0.0, 0.0)).unwrap();
        c.add_stop("B", GeoPoint::new(0.0, 1.0)).unwrap();
        c.add_stop("C", GeoPoint::new(0.0, 2.0)).unwrap();
        c.set_distance("A", "B", 1_000).unwrap();
        c.set_distance("B", "C", 1_100).unwrap();
        c.set_distance("C", "A", 1_200).unwrap();
        c
    }
}

// ── Stops ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stops {
    use tc_core::{GeoPoint, StopId};
    use crate::{Catalogue, CatalogueError};

    #[test]
    fn ids_are_dense_in_insertion_order() {
        let c = super::helpers::triangle();
        assert_eq!(c.stop_count(), 3);
        assert_eq!(c.stop_id("A"), Some(StopId(0)));
        assert_eq!(c.stop_id("B"), Some(StopId(1)));
        assert_eq!(c.stop_id("C"), Some(StopId(2)));
        for (i, stop) in c.stops().iter().enumerate() {
            assert_eq!(stop.id.index(), i);
        }
    }

    #[test]
    fn duplicate_stop_rejected_and_catalogue_unchanged() {
        let mut c = super::helpers::triangle();
        let err = c.add_stop("B", GeoPoint::new(5.0, 5.0)).unwrap_err();
        assert!(matches!(err, CatalogueError::DuplicateStop(ref n) if n == "B"));
        assert_eq!(c.stop_count(), 3);
        assert_eq!(c.find_stop("B").unwrap().position, GeoPoint::new(0.0, 1.0));
    }

    #[test]
    fn invalid_coordinates_rejected() {
        let mut c = Catalogue::new();
        assert!(c.add_stop("X", GeoPoint::new(f64::NAN, 0.0)).is_err());
        assert!(c.is_empty());
    }

    #[test]
    fn find_absent_is_none() {
        let c = super::helpers::triangle();
        assert!(c.find_stop("Z").is_none());
        assert!(c.find_bus("Z").is_none());
        assert!(c.stop(StopId(3)).is_none());
    }
}

// ── Distances ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod distances {
    use tc_core::{GeoPoint, StopId};
    use crate::{Catalogue, CatalogueError};

    #[test]
    fn forward_entry() {
        let c = super::helpers::triangle();
        assert_eq!(c.distance(StopId(0), StopId(1)).unwrap(), 1_000);
    }

    #[test]
    fn reverse_fallback() {
        let c = super::helpers::triangle();
        // Only A→B was set; B→A falls back to it.
        assert_eq!(c.distance(StopId(1), StopId(0)).unwrap(), 1_000);
    }

    #[test]
    fn asymmetric_entries_kept_per_direction() {
        let mut c = super::helpers::triangle();
        c.set_distance("B", "A", 900).unwrap();
        assert_eq!(c.distance(StopId(0), StopId(1)).unwrap(), 1_000);
        assert_eq!(c.distance(StopId(1), StopId(0)).unwrap(), 900);
    }

    #[test]
    fn self_distance_defaults_to_zero() {
        let c = super::helpers::triangle();
        assert_eq!(c.distance(StopId(2), StopId(2)).unwrap(), 0);
    }

    #[test]
    fn explicit_self_distance_wins() {
        let mut c = super::helpers::triangle();
        c.set_distance("A", "A", 50).unwrap();
        assert_eq!(c.distance(StopId(0), StopId(0)).unwrap(), 50);
    }

    #[test]
    fn missing_pair_errors() {
        let mut c = Catalogue::new();
        let a = c.add_stop("A", GeoPoint::new(0.0, 0.0)).unwrap();
        let b = c.add_stop("B", GeoPoint::new(0.0, 1.0)).unwrap();
        let err = c.distance(a, b).unwrap_err();
        assert!(matches!(err, CatalogueError::MissingDistance { from, to } if from == a && to == b));
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let mut c = super::helpers::triangle();
        let err = c.set_distance("A", "Nowhere", 10).unwrap_err();
        assert!(matches!(err, CatalogueError::UnknownStop(ref n) if n == "Nowhere"));
        let err = c.set_distance_by_id(StopId(0), StopId(9), 10).unwrap_err();
        assert!(matches!(err, CatalogueError::UnknownStop(ref n) if n == "StopId(9)"));
    }
}

// ── Buses ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod buses {
    use tc_core::{BusId, StopId};
    use crate::CatalogueError;

    #[test]
    fn roundtrip_stored_as_given() {
        let mut c = super::helpers::triangle();
        let id = c.add_bus("1", &["A", "B", "C", "A"], true).unwrap();
        assert_eq!(id, BusId(0));
        let bus = c.find_bus("1").unwrap();
        assert_eq!(bus.stops, vec![StopId(0), StopId(1), StopId(2), StopId(0)]);
        assert!(bus.is_roundtrip);
    }

    #[test]
    fn linear_expanded_out_and_back() {
        let mut c = super::helpers::triangle();
        c.add_bus("2", &["A", "B", "C"], false).unwrap();
        let bus = c.find_bus("2").unwrap();
        assert_eq!(
            bus.stops,
            vec![StopId(0), StopId(1), StopId(2), StopId(1), StopId(0)]
        );
        assert_eq!(bus.legs().count(), 4);
    }

    #[test]
    fn unknown_stop_is_hard_error() {
        let mut c = super::helpers::triangle();
        let err = c.add_bus("3", &["A", "Q", "C"], true).unwrap_err();
        assert!(matches!(err, CatalogueError::UnknownStop(ref n) if n == "Q"));
        assert_eq!(c.bus_count(), 0);
        assert!(!c.stop_info("A").unwrap().is_served());
    }

    #[test]
    fn duplicate_and_empty_rejected() {
        let mut c = super::helpers::triangle();
        c.add_bus("1", &["A", "B"], false).unwrap();
        assert!(matches!(
            c.add_bus("1", &["B", "C"], false),
            Err(CatalogueError::DuplicateBus(_))
        ));
        let empty: [&str; 0] = [];
        assert!(matches!(
            c.add_bus("4", &empty, true),
            Err(CatalogueError::EmptyRoute(_))
        ));
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use tc_core::GeoPoint;
    use crate::{BusInfo, Catalogue, CatalogueError};

    #[test]
    fn roundtrip_counts() {
        // N distinct stops, sequence closes the loop → N + 1 stops on route.
        let mut c = super::helpers::triangle();
        c.add_bus("1", &["A", "B", "C", "A"], true).unwrap();
        let info = c.bus_info("1").unwrap();
        assert_eq!(info.stop_count, 4);
        assert_eq!(info.unique_stop_count, 3);
        assert_eq!(info.physical_length, 1_000 + 1_100 + 1_200);
    }

    #[test]
    fn linear_lengths_use_both_directions() {
        let mut c = super::helpers::triangle();
        c.set_distance("C", "B", 1_500).unwrap();
        c.add_bus("2", &["A", "B", "C"], false).unwrap();
        let info = c.bus_info("2").unwrap();
        assert_eq!(info.stop_count, 5);
        assert_eq!(info.unique_stop_count, 3);
        // A→B 1000, B→C 1100, C→B 1500, B→A (fallback) 1000
        assert_eq!(info.physical_length, 4_600);
    }

    #[test]
    fn curvature_against_great_circle() {
        let mut c = super::helpers::triangle();
        c.add_bus("2", &["A", "B", "C"], false).unwrap();
        let info = c.bus_info("2").unwrap();
        let one_degree = GeoPoint::new(0.0, 0.0).distance_m(GeoPoint::new(0.0, 1.0));
        assert!((info.geo_length - 4.0 * one_degree).abs() < 1e-6);
        let expected = 4_200.0 / (4.0 * one_degree);
        assert!((info.curvature().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn degenerate_curvature() {
        let zero = BusInfo { stop_count: 1, unique_stop_count: 1, physical_length: 0, geo_length: 0.0 };
        assert_eq!(zero.curvature(), Some(1.0));
        let loop_only = BusInfo { physical_length: 40, ..zero };
        assert_eq!(loop_only.curvature(), None);
    }

    #[test]
    fn missing_distance_surfaces() {
        let mut c = Catalogue::new();
        c.add_stop("A", GeoPoint::new(0.0, 0.0)).unwrap();
        c.add_stop("B", GeoPoint::new(0.0, 1.0)).unwrap();
        c.add_bus("x", &["A", "B"], false).unwrap();
        assert!(matches!(c.bus_info("x"), Err(CatalogueError::MissingDistance { .. })));
    }

    #[test]
    fn unknown_names_are_not_found() {
        let c = super::helpers::triangle();
        assert!(c.bus_info("nope").unwrap_err().is_not_found());
        assert!(c.stop_info("nope").unwrap_err().is_not_found());
    }

    #[test]
    fn stop_info_sorted_and_deduplicated() {
        let mut c = super::helpers::triangle();
        c.add_bus("750", &["A", "B", "A"], true).unwrap();
        c.add_bus("256", &["A", "C"], false).unwrap();
        c.add_bus("14", &["B", "C"], false).unwrap();
        let info = c.stop_info("A").unwrap();
        assert_eq!(info.buses.into_iter().collect::<Vec<_>>(), vec!["256", "750"]);
        let info = c.stop_info("B").unwrap();
        assert_eq!(info.buses.into_iter().collect::<Vec<_>>(), vec!["14", "750"]);
    }

    #[test]
    fn stop_without_buses() {
        let mut c = super::helpers::triangle();
        c.add_stop("Lonely", GeoPoint::new(1.0, 1.0)).unwrap();
        let info = c.stop_info("Lonely").unwrap();
        assert!(!info.is_served());
    }
}
