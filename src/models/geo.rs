use serde::{Deserialize, Serialize};

use crate::error::TrustError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Rejects coordinates outside the valid latitude/longitude ranges.
    /// Distance math itself stays total; callers validate at the boundary.
    pub fn validate(&self) -> Result<(), TrustError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(TrustError::InvalidInput(format!(
                "latitude out of range: {}",
                self.lat
            )));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(TrustError::InvalidInput(format!(
                "longitude out of range: {}",
                self.lng
            )));
        }
        Ok(())
    }
}

/// Circular trusted work zone: center plus radius in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoFence {
    pub center: GeoPoint,
    pub radius_meters: f64,
}

impl GeoFence {
    /// A zero radius is legal (only the exact center qualifies, within
    /// GPS accuracy tolerance); a negative or non-finite radius is a
    /// configuration error and is rejected here.
    pub fn new(center: GeoPoint, radius_meters: f64) -> Result<Self, TrustError> {
        if !radius_meters.is_finite() || radius_meters < 0.0 {
            return Err(TrustError::InvalidRadius(radius_meters));
        }

        Ok(Self {
            center,
            radius_meters,
        })
    }
}

/// Outcome of a single geofence evaluation. Recomputed per call and
/// only logged by callers, never stored as ground truth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeofenceResult {
    pub is_within_zone: bool,
    pub distance_meters: f64,
    /// `distance - nominal radius`; negative means inside. Reported
    /// against the nominal radius so margins stay accuracy-independent.
    pub margin_meters: f64,
}

#[cfg(test)]
mod tests {
    use super::{GeoFence, GeoPoint};

    #[test]
    fn negative_radius_is_rejected() {
        let center = GeoPoint {
            lat: -6.2088,
            lng: 106.8456,
        };
        assert!(GeoFence::new(center, -1.0).is_err());
    }

    #[test]
    fn zero_radius_is_accepted() {
        let center = GeoPoint {
            lat: -6.2088,
            lng: 106.8456,
        };
        assert!(GeoFence::new(center, 0.0).is_ok());
    }

    #[test]
    fn out_of_range_latitude_fails_validation() {
        let point = GeoPoint {
            lat: 91.0,
            lng: 0.0,
        };
        assert!(point.validate().is_err());
    }

    #[test]
    fn boundary_coordinates_pass_validation() {
        let point = GeoPoint {
            lat: -90.0,
            lng: 180.0,
        };
        assert!(point.validate().is_ok());
    }
}
