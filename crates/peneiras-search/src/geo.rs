//! Great-circle distance.

use peneiras_core::Coordinates;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance between two points in kilometers via the haversine formula.
///
/// Pure and total: any pair of finite coordinates produces a finite,
/// non-negative result.
#[must_use]
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * central_angle
}
