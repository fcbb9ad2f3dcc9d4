//! # Scopeview
//!
//! The geographic-to-screen transform engine for an air-traffic
//! situation display.
//!
//! A [`Viewport`] owns the view state (center coordinate, visible range,
//! zoom factor) and converts between geographic coordinates and viewport
//! pixel coordinates through a pluggable map [`Projection`]. The
//! windowing layer feeds it [`InputEvent`]s via an [`InputHandler`]; the
//! renderer consumes `to_screen`/`to_geo` and the visibility queries.
//! No drawing, windowing, or flight data lives here.

pub mod core;
pub mod input;
pub mod prelude;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::ViewportBuilder,
    geo::{LatLng, LatLngBounds, Point, WorldPoint},
    interval::{Axis, Frame, Interval},
    projection::{Mercator, Projection, ProjectionError, Stereographic},
    viewport::Viewport,
};

pub use crate::input::{events::EventResponse, events::InputEvent, handler::InputHandler};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, ScopeError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    #[error("projection failed: {0}")]
    Projection(#[from] ProjectionError),

    #[error("degenerate {axis} interval: min == max")]
    DegenerateInterval { axis: Axis },

    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("invalid range: {0} meters")]
    InvalidRange(f64),
}

/// Error type alias for convenience
pub type Error = ScopeError;
