//! Engine-wide constants and defaults.
//! Keeping them in a single place makes it easier to tweak the magic numbers.

/// Spherical Earth radius in meters (the Web Mercator radius).
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitude limit of the Mercator projection domain.
pub const MAX_LATITUDE: f64 = 85.051_128_779_8;

/// Meters in one nautical mile.
pub const METERS_PER_NAUTICAL_MILE: f64 = 1_852.0;

/// Full visible span at zoom 1.0, in meters (350 NM).
pub const DEFAULT_RANGE: f64 = 350.0 * METERS_PER_NAUTICAL_MILE;

/// Default view center (latitude, longitude) in degrees.
pub const DEFAULT_CENTER: (f64, f64) = (30.0, 31.0);

/// Default zoom factor.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Lower zoom clamp bound. Smaller zoom values mean a tighter view.
pub const MIN_ZOOM: f64 = 0.1;

/// Upper zoom clamp bound.
pub const MAX_ZOOM: f64 = 7.0;

/// Programmatic zoom step for `zoom_in`/`zoom_out` and wheel notches.
pub const ZOOM_STEP: f64 = 0.15;
