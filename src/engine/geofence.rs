use crate::geo::haversine_meters;
use crate::models::geo::{GeoFence, GeoPoint, GeofenceResult};

/// GPS accuracy can widen the effective radius, but never by more than
/// this, so a poor fix cannot make an arbitrarily large zone valid.
pub const ACCURACY_TOLERANCE_CAP_METERS: f64 = 50.0;

pub fn evaluate(
    point: &GeoPoint,
    fence: &GeoFence,
    accuracy_meters: Option<f64>,
) -> GeofenceResult {
    let distance_meters = haversine_meters(point, &fence.center);

    let accuracy_tolerance = accuracy_meters
        .unwrap_or(0.0)
        .clamp(0.0, ACCURACY_TOLERANCE_CAP_METERS);
    let effective_radius = fence.radius_meters + accuracy_tolerance;

    GeofenceResult {
        is_within_zone: distance_meters <= effective_radius,
        distance_meters,
        margin_meters: distance_meters - fence.radius_meters,
    }
}
