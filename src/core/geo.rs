use crate::core::constants::EARTH_RADIUS;
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are finite and within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat >= -90.0
            && self.lat <= 90.0
            && self.lng >= -180.0
            && self.lng <= 180.0
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Calculates the great-circle distance to another LatLng in meters,
    /// using the Haversine formula
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }

    /// Calculates the initial great-circle bearing towards another LatLng,
    /// in degrees [0, 360)
    pub fn bearing_to(&self, other: &LatLng) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let x = delta_lng.sin() * lat2_rad.cos();
        let y = lat1_rad.cos() * lat2_rad.sin()
            - lat1_rad.sin() * lat2_rad.cos() * delta_lng.cos();

        let bearing = x.atan2(y).to_degrees();
        (bearing + 360.0) % 360.0
    }

    /// Returns the coordinate reached by travelling `distance` meters from
    /// this point along the great circle with the given initial bearing
    /// (degrees, 0 = north, 90 = east)
    pub fn destination(&self, distance: f64, bearing: f64) -> LatLng {
        let lat_rad = self.lat.to_radians();
        let bearing_rad = bearing.to_radians();
        let angular = distance / EARTH_RADIUS;

        // Clamp guards against rounding carrying the sine past ±1
        let dest_lat = (lat_rad.sin() * angular.cos()
            + lat_rad.cos() * angular.sin() * bearing_rad.cos())
        .clamp(-1.0, 1.0)
        .asin();
        let dest_lng = self.lng.to_radians()
            + (bearing_rad.sin() * angular.sin() * lat_rad.cos())
                .atan2(angular.cos() - lat_rad.sin() * dest_lat.sin());

        LatLng::new(dest_lat.to_degrees(), Self::wrap_lng(dest_lng.to_degrees()))
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a point in viewport units (pixels/points)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A point in planar world coordinates (meters), the output of a map
/// projection. Intermediate between geographic and screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl WorldPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(40.7128, -74.0060);
        assert_eq!(coord.lat, 40.7128);
        assert_eq!(coord.lng, -74.0060);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_lat_lng_invalid() {
        assert!(!LatLng::new(91.0, 0.0).is_valid());
        assert!(!LatLng::new(0.0, 181.0).is_valid());
        assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_lat_lng_distance() {
        let nyc = LatLng::new(40.7128, -74.0060);
        let la = LatLng::new(34.0522, -118.2437);
        let distance = nyc.distance_to(&la);

        // Distance should be approximately 3944 km
        assert!((distance - 3_944_000.0).abs() < 10_000.0);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = LatLng::new(0.0, 0.0);

        let north = origin.bearing_to(&LatLng::new(1.0, 0.0));
        let east = origin.bearing_to(&LatLng::new(0.0, 1.0));
        let south = origin.bearing_to(&LatLng::new(-1.0, 0.0));
        let west = origin.bearing_to(&LatLng::new(0.0, -1.0));

        assert!((north - 0.0).abs() < 1e-9);
        assert!((east - 90.0).abs() < 1e-9);
        assert!((south - 180.0).abs() < 1e-9);
        assert!((west - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_destination_one_degree_north() {
        let origin = LatLng::new(0.0, 0.0);
        // One degree of latitude is about 111.32 km on the sphere
        let dest = origin.destination(111_320.0, 0.0);

        assert!((dest.lat - 1.0).abs() < 0.01);
        assert!(dest.lng.abs() < 0.01);
    }

    #[test]
    fn test_destination_distance_consistency() {
        let start = LatLng::new(43.9, 20.16);
        let dest = start.destination(50_000.0, 135.0);

        assert!((start.distance_to(&dest) - 50_000.0).abs() < 1.0);
        assert!((start.bearing_to(&dest) - 135.0).abs() < 0.1);
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(1.0, 2.0);

        assert_eq!(a.add(&b), Point::new(4.0, 6.0));
        assert_eq!(a.subtract(&b), Point::new(2.0, 2.0));
        assert_eq!(Point::default().distance_to(&a), 5.0);
    }

    #[test]
    fn test_wrap_lng() {
        assert_eq!(LatLng::wrap_lng(190.0), -170.0);
        assert_eq!(LatLng::wrap_lng(-190.0), 170.0);
        assert_eq!(LatLng::wrap_lng(45.0), 45.0);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = LatLngBounds::new(LatLng::new(40.0, -75.0), LatLng::new(41.0, -73.0));
        assert!(bounds.contains(&LatLng::new(40.5, -74.0)));
        assert!(!bounds.contains(&LatLng::new(42.0, -74.0)));
    }

    #[test]
    fn test_lat_lng_serde_round_trip() {
        let coord = LatLng::new(43.9, 20.16);
        let json = serde_json::to_string(&coord).unwrap();
        let back: LatLng = serde_json::from_str(&json).unwrap();
        assert_eq!(coord, back);
    }
}
