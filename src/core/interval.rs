use crate::core::geo::Point;
use crate::{Result, ScopeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate axis, used to report which interval failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// An ordered (min, max) pair of real numbers along one axis.
///
/// Intervals describe one axis of a coordinate frame; remapping a value
/// between two intervals is the affine map sending min to min and max to
/// max. The map is undefined for a degenerate source interval, which is
/// why callers validate before remapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Signed length of the interval
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the interval
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// An interval is degenerate when the remap denominator `min - max`
    /// would be zero or the bounds are not finite
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max || !self.min.is_finite() || !self.max.is_finite()
    }

    /// Checks if a value lies within the interval, regardless of polarity
    pub fn contains(&self, v: f64) -> bool {
        (v - self.min) * (v - self.max) <= 0.0
    }

    /// Remaps `v` from this interval onto `to`: the unique affine map
    /// sending `self.min` to `to.min` and `self.max` to `to.max`.
    ///
    /// The source interval must not be degenerate; `Frame::validate`
    /// guards the division at the call sites.
    pub fn remap(&self, v: f64, to: &Interval) -> f64 {
        debug_assert!(!self.is_degenerate());
        let (s1, s2) = (self.min, self.max);
        let (t1, t2) = (to.min, to.max);

        let translate = (t2 * s1 - t1 * s2) / (s1 - s2);
        let scale = (t2 - t1) / (s2 - s1);

        translate + scale * v
    }
}

/// A rectangular coordinate frame: one interval per axis.
///
/// The viewport keeps two of these, the source frame (visible world
/// region in planar meters) and the target frame (viewport bounds in
/// pixels/points).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: Interval,
    pub y: Interval,
}

impl Frame {
    pub fn new(x: Interval, y: Interval) -> Self {
        Self { x, y }
    }

    /// A square frame of the given side, anchored at `origin`
    pub fn square(origin: Point, side: f64) -> Self {
        Self::new(
            Interval::new(origin.x, origin.x + side),
            Interval::new(origin.y, origin.y + side),
        )
    }

    /// Fails with a degenerate-interval error if either axis cannot be
    /// used as a remap source
    pub fn validate(&self) -> Result<()> {
        if self.x.is_degenerate() {
            return Err(ScopeError::DegenerateInterval { axis: Axis::X });
        }
        if self.y.is_degenerate() {
            return Err(ScopeError::DegenerateInterval { axis: Axis::Y });
        }
        Ok(())
    }

    /// Checks if an (x, y) pair lies within the frame
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x.contains(x) && self.y.contains(y)
    }

    /// Frame midpoint as an (x, y) pair
    pub fn midpoint(&self) -> (f64, f64) {
        (self.x.midpoint(), self.y.midpoint())
    }

    /// Remaps an (x, y) pair from this frame onto `to`, each axis
    /// independently
    pub fn remap(&self, x: f64, y: f64, to: &Frame) -> (f64, f64) {
        (self.x.remap(x, &to.x), self.y.remap(y, &to.y))
    }
}
