//! Circular geofence membership on a spherical Earth.

use crate::models::Coordinate;

/// Mean Earth radius in meters (IUGG), as used by common great-circle routines.
pub const EARTH_RADIUS_METERS: f64 = 6_371_009.0;

/// Great-circle distance between two coordinates, in meters (haversine).
pub fn great_circle_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt());
    EARTH_RADIUS_METERS * c
}

pub fn within_radius(point: Coordinate, center: Coordinate, radius_meters: f64) -> bool {
    great_circle_meters(point, center) <= radius_meters
}

/// A center and radius, the only fence shape the tool knows about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geofence {
    pub center: Coordinate,
    pub radius_meters: f64,
}

impl Geofence {
    pub fn new(center: Coordinate, radius_meters: f64) -> Self {
        Self {
            center,
            radius_meters,
        }
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        within_radius(point, self.center, self.radius_meters)
    }
}
