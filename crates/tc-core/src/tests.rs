//! Unit tests for tc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BusId, EdgeId, StopId};

    #[test]
    fn index_roundtrip() {
        let id = StopId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StopId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(StopId(0) < StopId(1));
        assert!(BusId(100) > BusId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(StopId::INVALID.0, u32::MAX);
        assert_eq!(BusId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(StopId(7).to_string(), "StopId(7)");
        assert_eq!(EdgeId(3).to_string(), "EdgeId(3)");
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn try_from_overflow() {
        assert!(StopId::try_from(u32::MAX as usize + 1).is_err());
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(55.611087, 37.20829);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(55.595884, 37.209755);
        let b = GeoPoint::new(55.632761, 37.333324);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-6);
    }

    #[test]
    fn validity() {
        assert!(GeoPoint::new(0.0, 0.0).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::NAN).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    }
}

#[cfg(test)]
mod error {
    use crate::{StopId, TcError};

    #[test]
    fn messages() {
        assert_eq!(TcError::StopNotFound(StopId(2)).to_string(), "stop StopId(2) not found");
        assert_eq!(
            TcError::Config("bus_velocity must be positive".into()).to_string(),
            "configuration error: bus_velocity must be positive"
        );
    }
}

#[cfg(test)]
mod number {
    use crate::format_significant;

    #[test]
    fn fixed_range() {
        assert_eq!(format_significant(1.361239, 6), "1.36124");
        assert_eq!(format_significant(1.0, 6), "1");
        assert_eq!(format_significant(-2.5, 6), "-2.5");
        assert_eq!(format_significant(0.000123456789, 6), "0.000123457");
        assert_eq!(format_significant(123456.7, 6), "123457");
        assert_eq!(format_significant(0.0, 6), "0");
    }

    #[test]
    fn exponent_range() {
        assert_eq!(format_significant(1_234_567.0, 6), "1.23457e+06");
        assert_eq!(format_significant(1e6, 6), "1e+06");
        assert_eq!(format_significant(0.00001, 6), "1e-05");
        assert_eq!(format_significant(-0.0000123456789, 6), "-1.23457e-05");
        assert_eq!(format_significant(2.5e120, 6), "2.5e+120");
    }

    #[test]
    fn rounding_carries_into_next_decade() {
        assert_eq!(format_significant(999_999.7, 6), "1e+06");
        assert_eq!(format_significant(9.9999996, 6), "10");
    }

    #[test]
    fn non_finite() {
        assert_eq!(format_significant(f64::INFINITY, 6), "inf");
        assert_eq!(format_significant(f64::NEG_INFINITY, 6), "-inf");
        assert_eq!(format_significant(f64::NAN, 6), "nan");
    }
}
