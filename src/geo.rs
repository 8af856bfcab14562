//! Location error of the epicenter estimates, in kilometres.
//!
//! Uses a flat-Earth approximation that only holds over small regional
//! extents. The longitude correction uses the cosine of the *reference*
//! latitude for every row, not the row's own latitude.

use crate::data::model::EarthquakeRecord;

/// Kilometres per degree of latitude.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Ground-truth epicenter the benchmark runs were generated around.
pub const TRUE_EPICENTER: GeoPoint = GeoPoint {
    lat: 35.0,
    lon: -120.0,
};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Planar distance in km from `reference` to `self`.
    ///
    /// NaN inputs propagate into the result.
    pub fn planar_distance_km(&self, reference: &GeoPoint) -> f64 {
        let dx = (self.lat - reference.lat) * KM_PER_DEGREE;
        let dy = (self.lon - reference.lon) * KM_PER_DEGREE * reference.lat.to_radians().cos();
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<&EarthquakeRecord> for GeoPoint {
    fn from(record: &EarthquakeRecord) -> Self {
        GeoPoint {
            lat: record.location_x,
            lon: record.location_y,
        }
    }
}

/// Location error of every row against [`TRUE_EPICENTER`], in row order.
pub fn location_errors_km(records: &[EarthquakeRecord]) -> Vec<f64> {
    records
        .iter()
        .map(|r| GeoPoint::from(r).planar_distance_km(&TRUE_EPICENTER))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(location_x: f64, location_y: f64) -> EarthquakeRecord {
        EarthquakeRecord {
            stations: 10,
            time_ms: 1.0,
            location_x,
            location_y,
        }
    }

    #[rstest]
    #[case::at_epicenter(35.0, -120.0, 0.0)]
    #[case::one_degree_north(36.0, -120.0, 111.0)]
    #[case::one_degree_south(34.0, -120.0, 111.0)]
    fn distance_along_meridian(#[case] lat: f64, #[case] lon: f64, #[case] expected: f64) {
        let errors = location_errors_km(&[record(lat, lon)]);
        assert!((errors[0] - expected).abs() < 1e-9);
    }

    #[test]
    fn longitude_uses_reference_latitude() {
        // Same longitude offset at a different latitude must use cos(35°),
        // so the east-west component is identical in both rows.
        let near = GeoPoint {
            lat: 35.0,
            lon: -119.0,
        };
        let expected = KM_PER_DEGREE * 35.0f64.to_radians().cos();
        assert!((near.planar_distance_km(&TRUE_EPICENTER) - expected).abs() < 1e-9);

        let far = GeoPoint {
            lat: 36.0,
            lon: -119.0,
        };
        let combined = (KM_PER_DEGREE * KM_PER_DEGREE + expected * expected).sqrt();
        assert!((far.planar_distance_km(&TRUE_EPICENTER) - combined).abs() < 1e-9);
    }

    #[test]
    fn nan_propagates() {
        let errors = location_errors_km(&[record(f64::NAN, -120.0)]);
        assert!(errors[0].is_nan());
    }

    #[test]
    fn repeated_derivation_is_bit_identical() {
        let rows = vec![
            record(36.512, -118.301),
            record(36.47, -118.29),
            record(36.5, -118.35),
        ];
        let first = location_errors_km(&rows);
        let second = location_errors_km(&rows);
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first), bits(&second));
        assert_eq!(first.len(), rows.len());
    }
}
