//! Fluent construction of viewports.
//!
//! Mirrors the builder idiom used across the engine: configure with
//! `with_*` calls, then `build()` for a validated [`Viewport`]. The
//! preset constructors cover the two pictures a controller working
//! position actually uses.

use crate::core::constants::{
    DEFAULT_CENTER, DEFAULT_RANGE, DEFAULT_ZOOM, METERS_PER_NAUTICAL_MILE,
};
use crate::core::geo::{LatLng, Point};
use crate::core::projection::{Mercator, Projection, Stereographic};
use crate::core::viewport::Viewport;
use crate::Result;

/// Builder for creating and configuring [`Viewport`] instances
pub struct ViewportBuilder<P: Projection = Mercator> {
    projection: P,
    center: LatLng,
    range: f64,
    zoom: f64,
    zoom_limits: Option<(f64, f64)>,
    size: Point,
    origin: Point,
}

impl ViewportBuilder<Mercator> {
    /// Creates a builder with the engine defaults
    pub fn new() -> Self {
        Self {
            projection: Mercator,
            center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            range: DEFAULT_RANGE,
            zoom: DEFAULT_ZOOM,
            zoom_limits: None,
            size: Point::new(800.0, 600.0),
            origin: Point::default(),
        }
    }
}

impl Default for ViewportBuilder<Mercator> {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportBuilder<Stereographic> {
    /// En-route picture: stereographic projection tangent at the sector
    /// center, default 350 NM range
    pub fn enroute(center: LatLng) -> Self {
        ViewportBuilder::new()
            .with_projection(Stereographic::new(center))
            .with_center(center)
    }

    /// Terminal-area picture: 60 NM around the field
    pub fn terminal_area(center: LatLng) -> Self {
        Self::enroute(center).with_range_nm(60.0)
    }
}

impl<P: Projection> ViewportBuilder<P> {
    /// Replaces the projection, keeping the rest of the configuration
    pub fn with_projection<Q: Projection>(self, projection: Q) -> ViewportBuilder<Q> {
        ViewportBuilder {
            projection,
            center: self.center,
            range: self.range,
            zoom: self.zoom,
            zoom_limits: self.zoom_limits,
            size: self.size,
            origin: self.origin,
        }
    }

    /// Sets the initial view center
    pub fn with_center(mut self, center: LatLng) -> Self {
        self.center = center;
        self
    }

    /// Sets the full visible span at zoom 1.0, in meters
    pub fn with_range(mut self, meters: f64) -> Self {
        self.range = meters;
        self
    }

    /// Sets the full visible span at zoom 1.0, in nautical miles
    pub fn with_range_nm(self, nautical_miles: f64) -> Self {
        self.with_range(nautical_miles * METERS_PER_NAUTICAL_MILE)
    }

    /// Sets the initial zoom factor (clamped at build time)
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// Sets the zoom clamp bounds
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.zoom_limits = Some((min_zoom, max_zoom));
        self
    }

    /// Sets the viewport size in pixels/points
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Point::new(width, height);
        self
    }

    /// Sets the viewport origin in pixels/points
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Builds the viewport with the configured options
    pub fn build(self) -> Result<Viewport<P>> {
        let mut viewport = Viewport::with_projection(self.projection, self.center, self.size)?;
        if let Some((min_zoom, max_zoom)) = self.zoom_limits {
            viewport.set_zoom_limits(min_zoom, max_zoom)?;
        }
        if self.range != DEFAULT_RANGE {
            viewport.set_range(self.range)?;
        }
        viewport.set_zoom(self.zoom)?;
        viewport.set_viewport_size(self.size.x, self.size.y, self.origin);
        Ok(viewport)
    }
}
