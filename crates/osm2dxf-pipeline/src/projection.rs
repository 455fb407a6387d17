//! Conformal cylindrical (Web Mercator style) projection
//!
//! Only latitude is transformed; x stays linear in longitude.

use std::f64::consts::PI;

/// Project a latitude in degrees onto the Mercator y axis, in degree units.
///
/// Defined on the open interval (-90, 90); the poles map to infinity.
pub fn project_latitude(lat: f64) -> f64 {
    180.0 / PI * (PI / 4.0 + lat * (PI / 180.0) / 2.0).tan().ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_equator_maps_to_zero() {
        assert!(project_latitude(0.0).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric_about_equator() {
        for lat in [1.0, 23.5, 45.0, 66.5, 85.0] {
            assert!((project_latitude(lat) + project_latitude(-lat)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_known_value() {
        // ln(tan(67.5°)) * 180/π
        assert!((project_latitude(45.0) - 50.498_986_710_526_2).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_monotonic(a in -89.9f64..89.0, step in 1e-6f64..0.9) {
            prop_assert!(project_latitude(a) < project_latitude(a + step));
        }
    }
}
