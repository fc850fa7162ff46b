mod common;
use common::center;
use geotimelog::core::geofence::{EARTH_RADIUS_METERS, great_circle_meters};
use geotimelog::core::{Geofence, within_radius};
use geotimelog::models::Coordinate;

fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).expect("valid coordinate")
}

/// Move `meters` north of `c` along its meridian.
fn north_of(c: Coordinate, meters: f64) -> Coordinate {
    coord(c.lat + (meters / EARTH_RADIUS_METERS).to_degrees(), c.lon)
}

#[test]
fn test_one_degree_of_longitude_at_equator() {
    let d = great_circle_meters(coord(0.0, 0.0), coord(0.0, 1.0));
    // ellipsoidal reference: 111 319 m; spherical: ~111 195 m
    assert!((d - 111_195.0).abs() < 5.0, "got {d}");
}

#[test]
fn test_same_point_is_zero_distance() {
    assert_eq!(great_circle_meters(center(), center()), 0.0);
    assert!(within_radius(center(), center(), 0.0));
}

#[test]
fn test_points_around_the_radius() {
    let c = center();
    assert!(within_radius(north_of(c, 250.0), c, 300.0));
    assert!(!within_radius(north_of(c, 350.0), c, 300.0));

    let fence = Geofence::new(c, 300.0);
    assert!(fence.contains(north_of(c, 299.0)));
    assert!(!fence.contains(north_of(c, 301.0)));
}

#[test]
fn test_radius_is_symmetric() {
    let pairs = [
        (coord(50.04615, 19.94114), coord(50.04700, 19.94500)),
        (coord(-33.8688, 151.2093), coord(-33.8700, 151.2110)),
        (coord(0.0, 179.9999), coord(0.0, -179.9999)),
        (coord(89.9999, 10.0), coord(89.9999, -170.0)),
        (coord(-90.0, 0.0), coord(-89.998, 45.0)),
    ];

    for (a, b) in pairs {
        assert_eq!(great_circle_meters(a, b), great_circle_meters(b, a));
        for r in [0.0, 10.0, 100.0, 300.0, 1_000.0, 50_000.0] {
            assert_eq!(within_radius(a, b, r), within_radius(b, a, r));
        }
    }
}

#[test]
fn test_antimeridian_is_short_distance() {
    let d = great_circle_meters(coord(0.0, 179.9999), coord(0.0, -179.9999));
    assert!(d < 30.0, "got {d}");
}

#[test]
fn test_coordinate_validation() {
    assert!(Coordinate::new(90.1, 0.0).is_err());
    assert!(Coordinate::new(0.0, -180.5).is_err());
    assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    let c = Coordinate::from_e7(500_461_563, 199_411_478).expect("valid e7");
    assert!((c.lat - 50.0461563).abs() < 1e-9);
    assert!((c.lon - 19.9411478).abs() < 1e-9);
}
