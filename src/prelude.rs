//! Prelude module for common scopeview types
//!
//! This module re-exports the most commonly used types and functions
//! for easy importing with `use scopeview::prelude::*;`

pub use crate::core::{
    builder::ViewportBuilder,
    constants,
    geo::{LatLng, LatLngBounds, Point, WorldPoint},
    interval::{Axis, Frame, Interval},
    projection::{Mercator, Projection, ProjectionError, Stereographic},
    viewport::Viewport,
};

pub use crate::input::{
    events::{EventResponse, InputEvent, KeyCode, KeyModifiers},
    handler::InputHandler,
};

pub use crate::{Error as ScopeError, Result};
