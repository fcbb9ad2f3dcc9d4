//! Map projections: geographic coordinates to planar meters and back.
//!
//! The viewport only ever talks to the [`Projection`] trait; the concrete
//! projections here are small, pure and synchronous. [`Mercator`] is the
//! common web-map choice, [`Stereographic`] is the family radar displays
//! are usually built on.

use crate::core::constants::{EARTH_RADIUS, MAX_LATITUDE};
use crate::core::geo::{LatLng, WorldPoint};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use thiserror::Error;

/// A projection cannot represent the given input
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProjectionError {
    #[error("coordinate ({lat}, {lng}) is outside the projection domain")]
    OutsideDomain { lat: f64, lng: f64 },

    #[error("coordinate has a non-finite component")]
    NotFinite,

    #[error("planar point ({x}, {y}) cannot be inverse projected")]
    Unprojectable { x: f64, y: f64 },
}

/// Forward and inverse map projection between geographic coordinates and
/// a planar, meters-based coordinate system
pub trait Projection {
    /// Projects a geographic coordinate to planar meters
    fn project(&self, coord: &LatLng) -> Result<WorldPoint, ProjectionError>;

    /// Inverse-projects planar meters back to a geographic coordinate
    fn unproject(&self, point: &WorldPoint) -> Result<LatLng, ProjectionError>;
}

/// Spherical Web Mercator (EPSG:3857) in meters.
///
/// Valid for latitudes within ±[`MAX_LATITUDE`]; the poles are singular.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mercator;

impl Projection for Mercator {
    fn project(&self, coord: &LatLng) -> Result<WorldPoint, ProjectionError> {
        if !coord.lat.is_finite() || !coord.lng.is_finite() {
            return Err(ProjectionError::NotFinite);
        }
        if !coord.is_valid() || coord.lat.abs() > MAX_LATITUDE {
            return Err(ProjectionError::OutsideDomain {
                lat: coord.lat,
                lng: coord.lng,
            });
        }

        let x = coord.lng.to_radians() * EARTH_RADIUS;
        let y = (FRAC_PI_4 + coord.lat.to_radians() / 2.0).tan().ln() * EARTH_RADIUS;
        Ok(WorldPoint::new(x, y))
    }

    fn unproject(&self, point: &WorldPoint) -> Result<LatLng, ProjectionError> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(ProjectionError::Unprojectable {
                x: point.x,
                y: point.y,
            });
        }

        let lng = (point.x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (point.y / EARTH_RADIUS).exp().atan() - FRAC_PI_2).to_degrees();
        Ok(LatLng::new(lat, LatLng::wrap_lng(lng)))
    }
}

/// Spherical oblique stereographic projection, tangent at a reference
/// coordinate.
///
/// Conformal and well behaved over continental ranges around the tangent
/// point, which is why en-route radar pictures use it. The single
/// out-of-domain input is the antipode of the tangent point.
#[derive(Debug, Clone, Copy)]
pub struct Stereographic {
    center: LatLng,
    sin_lat0: f64,
    cos_lat0: f64,
}

impl Stereographic {
    /// Creates a stereographic projection tangent at `center`
    pub fn new(center: LatLng) -> Self {
        let lat0 = center.lat.to_radians();
        Self {
            center,
            sin_lat0: lat0.sin(),
            cos_lat0: lat0.cos(),
        }
    }

    /// The tangent point of the projection
    pub fn center(&self) -> LatLng {
        self.center
    }
}

impl Projection for Stereographic {
    fn project(&self, coord: &LatLng) -> Result<WorldPoint, ProjectionError> {
        if !coord.lat.is_finite() || !coord.lng.is_finite() {
            return Err(ProjectionError::NotFinite);
        }
        if !coord.is_valid() {
            return Err(ProjectionError::OutsideDomain {
                lat: coord.lat,
                lng: coord.lng,
            });
        }

        let lat = coord.lat.to_radians();
        let dlng = (coord.lng - self.center.lng).to_radians();

        let denom = 1.0 + self.sin_lat0 * lat.sin() + self.cos_lat0 * lat.cos() * dlng.cos();
        // The antipode of the tangent point maps to infinity
        if denom < 1e-10 {
            return Err(ProjectionError::OutsideDomain {
                lat: coord.lat,
                lng: coord.lng,
            });
        }

        let k = 2.0 * EARTH_RADIUS / denom;
        let x = k * lat.cos() * dlng.sin();
        let y = k * (self.cos_lat0 * lat.sin() - self.sin_lat0 * lat.cos() * dlng.cos());
        Ok(WorldPoint::new(x, y))
    }

    fn unproject(&self, point: &WorldPoint) -> Result<LatLng, ProjectionError> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(ProjectionError::Unprojectable {
                x: point.x,
                y: point.y,
            });
        }

        let rho = (point.x * point.x + point.y * point.y).sqrt();
        if rho < 1e-10 {
            return Ok(self.center);
        }

        let c = 2.0 * (rho / (2.0 * EARTH_RADIUS)).atan();
        // Clamp guards against rounding carrying the sine past ±1
        let sin_lat = (c.cos() * self.sin_lat0 + point.y * c.sin() * self.cos_lat0 / rho)
            .clamp(-1.0, 1.0);
        let lat = sin_lat.asin();
        let lng = self.center.lng.to_radians()
            + (point.x * c.sin())
                .atan2(rho * self.cos_lat0 * c.cos() - point.y * self.sin_lat0 * c.sin());

        Ok(LatLng::new(
            lat.to_degrees(),
            LatLng::wrap_lng(lng.to_degrees()),
        ))
    }
}
