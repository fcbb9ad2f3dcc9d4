use crate::core::constants::{DEFAULT_RANGE, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use crate::core::geo::{LatLng, LatLngBounds, Point, WorldPoint};
use crate::core::interval::{Frame, Interval};
use crate::core::projection::{Mercator, Projection};
use crate::{Result, ScopeError};

/// Manages the current view of the display: center, range and zoom, and
/// the derived source/target coordinate frames.
///
/// The source frame is the visible world region in planar meters; the
/// target frame is the viewport square in pixels/points. Both are always
/// derived state: every mutation of center, range or zoom recomputes the
/// source frame synchronously, and a recomputation that fails leaves the
/// previous consistent view untouched.
///
/// Axis polarity: screen y grows northward (y-up). The source y interval
/// runs south to north and the target y interval runs from the viewport
/// origin upward, so a coordinate further north maps to a larger screen y.
#[derive(Debug, Clone)]
pub struct Viewport<P: Projection = Mercator> {
    center: LatLng,
    /// Full visible span at zoom 1.0, in meters
    range: f64,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    projection: P,
    /// Visible world region in planar meters
    source: Frame,
    /// Viewport bounds in pixels/points
    target: Frame,
}

impl Viewport<Mercator> {
    /// Creates a Mercator viewport with the default range and zoom
    pub fn new(center: LatLng, size: Point) -> Result<Self> {
        Self::with_projection(Mercator, center, size)
    }
}

impl<P: Projection> Viewport<P> {
    /// Creates a viewport over the given projection with the default
    /// range and zoom. The target frame is a square of side
    /// `min(size.x, size.y)` anchored at the viewport origin.
    pub fn with_projection(projection: P, center: LatLng, size: Point) -> Result<Self> {
        if !center.is_valid() {
            return Err(ScopeError::InvalidCoordinates(format!(
                "({}, {})",
                center.lat, center.lng
            )));
        }

        let source = Self::source_frame_for(&projection, center, DEFAULT_RANGE, DEFAULT_ZOOM)?;
        let target = Frame::square(Point::default(), size.x.min(size.y));

        Ok(Self {
            center,
            range: DEFAULT_RANGE,
            zoom: DEFAULT_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            projection,
            source,
            target,
        })
    }

    /// Computes the source frame for a candidate view state: destination
    /// points at the four cardinal bearings, each projected to planar
    /// meters. Bearing-based rather than a meters-per-degree box so the
    /// frame tracks projection distortion at the current latitude.
    fn source_frame_for(projection: &P, center: LatLng, range: f64, zoom: f64) -> Result<Frame> {
        let half_distance = (range / 2.0) * zoom;

        let west = center.destination(half_distance, 270.0);
        let east = center.destination(half_distance, 90.0);
        let south = center.destination(half_distance, 180.0);
        let north = center.destination(half_distance, 0.0);

        let xmin = projection.project(&west)?.x;
        let xmax = projection.project(&east)?.x;
        let ymin = projection.project(&south)?.y;
        let ymax = projection.project(&north)?.y;

        log::trace!(
            "source frame x: ({:.1}, {:.1}) y: ({:.1}, {:.1})",
            xmin,
            xmax,
            ymin,
            ymax
        );
        Ok(Frame::new(Interval::new(xmin, xmax), Interval::new(ymin, ymax)))
    }

    /// Sets the view center and recomputes the source frame.
    ///
    /// The new frame is computed from the candidate state first and the
    /// view is only committed when that succeeds.
    pub fn set_center(&mut self, center: LatLng) -> Result<()> {
        if !center.is_valid() {
            return Err(ScopeError::InvalidCoordinates(format!(
                "({}, {})",
                center.lat, center.lng
            )));
        }
        self.source = Self::source_frame_for(&self.projection, center, self.range, self.zoom)?;
        self.center = center;
        log::debug!("center set to ({:.4}, {:.4})", center.lat, center.lng);
        Ok(())
    }

    /// Sets the zoom factor, silently clamping into the configured range,
    /// and recomputes the source frame. Smaller zoom values mean a
    /// tighter view.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<()> {
        // f64::max/min discard a NaN operand, so a non-finite input
        // collapses to the clamp bounds instead of being stored
        let zoom = zoom.max(self.min_zoom).min(self.max_zoom);
        self.source = Self::source_frame_for(&self.projection, self.center, self.range, zoom)?;
        self.zoom = zoom;
        log::debug!("zoom set to {:.2}", zoom);
        Ok(())
    }

    /// Sets the zoom clamp bounds and re-clamps the current zoom.
    /// Callers pass `0 < min_zoom <= max_zoom`.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) -> Result<()> {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.set_zoom(self.zoom)
    }

    /// Sets the full visible span at zoom 1.0, in meters
    pub fn set_range(&mut self, range: f64) -> Result<()> {
        if !range.is_finite() || range <= 0.0 {
            return Err(ScopeError::InvalidRange(range));
        }
        self.source = Self::source_frame_for(&self.projection, self.center, range, self.zoom)?;
        self.range = range;
        Ok(())
    }

    /// Steps the zoom one notch tighter
    pub fn zoom_in(&mut self) -> Result<()> {
        self.set_zoom(self.zoom - ZOOM_STEP)
    }

    /// Steps the zoom one notch wider
    pub fn zoom_out(&mut self) -> Result<()> {
        self.set_zoom(self.zoom + ZOOM_STEP)
    }

    /// Sets the viewport size. The target frame becomes a square of side
    /// `min(width, height)` anchored at `origin`, preserving aspect ratio
    /// instead of stretching.
    ///
    /// A zero-sized viewport is stored as-is; conversions fail with a
    /// degenerate-interval error until a usable size arrives.
    pub fn set_viewport_size(&mut self, width: f64, height: f64, origin: Point) {
        self.target = Frame::square(origin, width.min(height));
    }

    /// Converts a geographic coordinate to viewport coordinates
    pub fn to_screen(&self, coord: &LatLng) -> Result<Point> {
        self.source.validate()?;
        self.target.validate()?;

        let world = self.projection.project(coord)?;
        let (x, y) = self.source.remap(world.x, world.y, &self.target);
        Ok(Point::new(x, y))
    }

    /// Converts viewport coordinates back to a geographic coordinate
    pub fn to_geo(&self, point: &Point) -> Result<LatLng> {
        self.source.validate()?;
        self.target.validate()?;

        let (x, y) = self.target.remap(point.x, point.y, &self.source);
        Ok(self.projection.unproject(&WorldPoint::new(x, y))?)
    }

    /// Moves the center by a great-circle distance and bearing. Pan
    /// gestures expressed as drag distance/bearing land here.
    pub fn recenter_by(&mut self, distance: f64, bearing: f64) -> Result<()> {
        let center = self.center.destination(distance, bearing);
        self.set_center(center)
    }

    /// Current view center
    pub fn center(&self) -> LatLng {
        self.center
    }

    /// Current zoom factor
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Full visible span at zoom 1.0, in meters
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Current zoom clamp bounds as (min, max)
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// The projection in use
    pub fn projection(&self) -> &P {
        &self.projection
    }

    /// Visible world region in planar meters
    pub fn source_frame(&self) -> &Frame {
        &self.source
    }

    /// Viewport bounds in pixels/points
    pub fn target_frame(&self) -> &Frame {
        &self.target
    }

    /// True if the coordinate converts and lands inside the viewport
    /// square. Renderers use this to cull offscreen symbols and labels.
    pub fn is_visible(&self, coord: &LatLng) -> bool {
        match self.to_screen(coord) {
            Ok(point) => self.target.contains(point.x, point.y),
            Err(_) => false,
        }
    }

    /// Geographic bounds covering the viewport square
    pub fn visible_bounds(&self) -> Result<LatLngBounds> {
        let south_west = self.to_geo(&Point::new(self.target.x.min, self.target.y.min))?;
        let north_east = self.to_geo(&Point::new(self.target.x.max, self.target.y.max))?;
        Ok(LatLngBounds::new(south_west, north_east))
    }

    /// Meters per viewport unit at the current zoom. Infinite for a
    /// zero-sized viewport.
    pub fn resolution(&self) -> f64 {
        (self.range * self.zoom) / self.target.x.length().abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interval::Axis;
    use crate::core::projection::Stereographic;

    fn test_viewport() -> Viewport {
        Viewport::new(LatLng::new(43.9, 20.16), Point::new(800.0, 600.0)).unwrap()
    }

    #[test]
    fn test_viewport_creation() {
        let viewport = test_viewport();

        assert_eq!(viewport.zoom(), 1.0);
        assert_eq!(viewport.center().lat, 43.9);
        // Target frame is the 600-point square, not the full 800x600 rect
        assert_eq!(viewport.target_frame().x.length(), 600.0);
        assert_eq!(viewport.target_frame().y.length(), 600.0);
    }

    #[test]
    fn test_center_maps_to_viewport_midpoint() {
        // At the stereographic tangent point the four-bearing frame is
        // exactly symmetric around the center
        let center = LatLng::new(43.9, 20.16);
        let viewport =
            Viewport::with_projection(Stereographic::new(center), center, Point::new(800.0, 600.0))
                .unwrap();
        let screen = viewport.to_screen(&center).unwrap();

        let (mid_x, mid_y) = viewport.target_frame().midpoint();
        assert!((screen.x - mid_x).abs() < 1e-6);
        assert!((screen.y - mid_y).abs() < 1e-6);

        // Mercator stretches northward at mid-latitudes, so there the
        // center sits near the middle but not exactly on it
        let mercator = test_viewport();
        let screen = mercator.to_screen(&mercator.center()).unwrap();
        let (mid_x, mid_y) = mercator.target_frame().midpoint();
        assert!((screen.x - mid_x).abs() < 1e-6);
        assert!((screen.y - mid_y).abs() < 15.0);
    }

    #[test]
    fn test_round_trip() {
        let viewport = test_viewport();
        let screen = Point::new(123.0, 456.0);

        let coord = viewport.to_geo(&screen).unwrap();
        let back = viewport.to_screen(&coord).unwrap();

        assert!((back.x - screen.x).abs() < 1e-6);
        assert!((back.y - screen.y).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_clamping() {
        let mut viewport = test_viewport();

        viewport.set_zoom(0.0).unwrap();
        assert_eq!(viewport.zoom(), 0.1);

        viewport.set_zoom(100.0).unwrap();
        assert_eq!(viewport.zoom(), 7.0);

        viewport.set_zoom(2.0).unwrap();
        assert_eq!(viewport.zoom(), 2.0);

        viewport.set_zoom(f64::NAN).unwrap();
        assert_eq!(viewport.zoom(), 0.1);
    }

    #[test]
    fn test_zoom_limits_reclamp() {
        let mut viewport = test_viewport();
        viewport.set_zoom(5.0).unwrap();

        viewport.set_zoom_limits(0.5, 3.0).unwrap();
        assert_eq!(viewport.zoom(), 3.0);
    }

    #[test]
    fn test_zoom_widens_source_frame() {
        let mut viewport = test_viewport();
        let narrow = viewport.source_frame().x.length().abs();

        viewport.set_zoom(2.0).unwrap();
        let wide = viewport.source_frame().x.length().abs();

        assert!(wide > narrow * 1.9);
    }

    #[test]
    fn test_zoom_in_steps_down() {
        let mut viewport = test_viewport();
        viewport.zoom_in().unwrap();
        assert!((viewport.zoom() - 0.85).abs() < 1e-12);
        viewport.zoom_out().unwrap();
        assert!((viewport.zoom() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_y_axis_grows_northward() {
        let viewport = test_viewport();
        let center = viewport.center();

        let north = viewport
            .to_screen(&LatLng::new(center.lat + 0.5, center.lng))
            .unwrap();
        let south = viewport
            .to_screen(&LatLng::new(center.lat - 0.5, center.lng))
            .unwrap();
        let east = viewport
            .to_screen(&LatLng::new(center.lat, center.lng + 0.5))
            .unwrap();
        let west = viewport
            .to_screen(&LatLng::new(center.lat, center.lng - 0.5))
            .unwrap();

        assert!(north.y > south.y);
        assert!(east.x > west.x);
    }

    #[test]
    fn test_degenerate_viewport_rejected() {
        let mut viewport = test_viewport();
        viewport.set_viewport_size(0.0, 0.0, Point::default());

        match viewport.to_screen(&viewport.center()) {
            Err(ScopeError::DegenerateInterval { axis }) => assert_eq!(axis, Axis::X),
            other => panic!("expected degenerate interval error, got {:?}", other),
        }
        assert!(viewport.to_geo(&Point::new(1.0, 1.0)).is_err());
    }

    #[test]
    fn test_recenter_by_one_degree_north() {
        let mut viewport = Viewport::new(LatLng::new(0.0, 0.0), Point::new(600.0, 600.0)).unwrap();
        viewport.recenter_by(111_320.0, 0.0).unwrap();

        assert!((viewport.center().lat - 1.0).abs() < 0.01);
        assert!(viewport.center().lng.abs() < 0.01);
    }

    #[test]
    fn test_failed_set_center_preserves_state() {
        let mut viewport = test_viewport();
        let center = viewport.center();
        let source = *viewport.source_frame();

        // Too close to the pole for the Mercator source frame
        assert!(viewport.set_center(LatLng::new(89.9, 0.0)).is_err());

        assert_eq!(viewport.center(), center);
        assert_eq!(*viewport.source_frame(), source);
    }

    #[test]
    fn test_invalid_center_rejected() {
        let mut viewport = test_viewport();
        assert!(matches!(
            viewport.set_center(LatLng::new(95.0, 0.0)),
            Err(ScopeError::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn test_set_range_rejects_nonpositive() {
        let mut viewport = test_viewport();
        assert!(matches!(
            viewport.set_range(0.0),
            Err(ScopeError::InvalidRange(_))
        ));
        assert!(viewport.set_range(100_000.0).is_ok());
    }

    #[test]
    fn test_is_visible() {
        let viewport = test_viewport();
        assert!(viewport.is_visible(&viewport.center()));
        // The far side of the planet is not on a 350 NM scope
        assert!(!viewport.is_visible(&LatLng::new(-43.9, -159.84)));
    }

    #[test]
    fn test_visible_bounds_contains_center() {
        let viewport = test_viewport();
        let bounds = viewport.visible_bounds().unwrap();
        assert!(bounds.contains(&viewport.center()));
        assert!(bounds.north_east.lat > bounds.south_west.lat);
    }

    #[test]
    fn test_resolution() {
        let viewport = test_viewport();
        // 350 NM over a 600-point square
        let expected = 350.0 * 1_852.0 / 600.0;
        assert!((viewport.resolution() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_stereographic_viewport_round_trip() {
        let center = LatLng::new(43.9, 20.16);
        let viewport =
            Viewport::with_projection(Stereographic::new(center), center, Point::new(512.0, 512.0))
                .unwrap();

        let screen = Point::new(100.0, 300.0);
        let coord = viewport.to_geo(&screen).unwrap();
        let back = viewport.to_screen(&coord).unwrap();

        assert!((back.x - screen.x).abs() < 1e-6);
        assert!((back.y - screen.y).abs() < 1e-6);
    }
}
