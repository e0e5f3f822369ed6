//! Great-circle distance between geographic coordinates.

use crate::domain::Coordinate;

/// Mean Earth radius, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance in kilometres.
///
/// Pure numeric formula: out-of-range inputs are not rejected, they simply
/// produce a number without geographic meaning.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lng = (b.longitude() - a.longitude()).to_radians();

    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();

    let h = (d_lat * 0.5).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng * 0.5).sin().powi(2);
    // rounding can push h a hair outside [0, 1] near antipodes
    let h = h.clamp(0.0, 1.0);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
