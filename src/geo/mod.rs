use crate::models::geo::GeoPoint;

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

pub fn haversine_meters(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let sin_lat = (delta_lat / 2.0).sin();
    let sin_lng = (delta_lng / 2.0).sin();

    let h = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lng * sin_lng;
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * central_angle
}

#[cfg(test)]
mod tests {
    use super::haversine_meters;
    use crate::models::geo::GeoPoint;

    #[test]
    fn zero_distance_for_same_point() {
        let p = GeoPoint {
            lat: -6.2088,
            lng: 106.8456,
        };
        let distance = haversine_meters(&p, &p);
        assert!(distance < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let jakarta = GeoPoint {
            lat: -6.2088,
            lng: 106.8456,
        };
        let bandung = GeoPoint {
            lat: -6.9175,
            lng: 107.6191,
        };
        let forward = haversine_meters(&jakarta, &bandung);
        let backward = haversine_meters(&bandung, &jakarta);
        assert!((forward - backward).abs() < 1e-6);
    }

    #[test]
    fn jakarta_to_bandung_is_around_117_km() {
        let jakarta = GeoPoint {
            lat: -6.2088,
            lng: 106.8456,
        };
        let bandung = GeoPoint {
            lat: -6.9175,
            lng: 107.6191,
        };
        let distance = haversine_meters(&jakarta, &bandung);
        assert!(distance > 115_000.0 && distance < 120_000.0);
    }

    #[test]
    fn triangle_inequality_holds_within_tolerance() {
        let a = GeoPoint {
            lat: -6.2088,
            lng: 106.8456,
        };
        let b = GeoPoint {
            lat: -6.5,
            lng: 107.1,
        };
        let c = GeoPoint {
            lat: -6.9175,
            lng: 107.6191,
        };
        let direct = haversine_meters(&a, &c);
        let via_b = haversine_meters(&a, &b) + haversine_meters(&b, &c);
        assert!(direct <= via_b + 1e-6);
    }
}
