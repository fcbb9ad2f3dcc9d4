use crate::core::geo::{LatLng, Point};
use crate::core::projection::Projection;
use crate::core::viewport::Viewport;
use crate::input::events::{EventResponse, InputEvent, KeyCode};
use crate::Result;

/// Translates input events into viewport mutations.
///
/// Dragging works in geographic space: the cursor's previous and current
/// positions are converted to coordinates, and the view recenters by
/// their great-circle distance and bearing so the map content follows
/// the cursor. Zoom gestures step or offset the zoom factor, and the
/// key bindings match the classic scope controls (`z`/`Z` zoom, `c`
/// center on cursor, `C` return to the home coordinate).
pub struct InputHandler {
    pub enabled: bool,
    pub pan_on_drag: bool,
    pub zoom_on_scroll: bool,
    pub keyboard: bool,
    home: LatLng,
    last_drag: Option<Point>,
}

impl InputHandler {
    /// Creates a handler with every gesture enabled and the given home
    /// coordinate for the `C` key
    pub fn new(home: LatLng) -> Self {
        Self {
            enabled: true,
            pan_on_drag: true,
            zoom_on_scroll: true,
            keyboard: true,
            home,
            last_drag: None,
        }
    }

    /// The home coordinate used by the `C` key
    pub fn home(&self) -> LatLng {
        self.home
    }

    pub fn set_home(&mut self, home: LatLng) {
        self.home = home;
    }

    /// Applies one event to the viewport.
    ///
    /// Conversion failures (degenerate viewport, coordinate outside the
    /// projection domain) propagate; the caller decides whether to drop
    /// the gesture or surface the problem.
    pub fn handle<P: Projection>(
        &mut self,
        viewport: &mut Viewport<P>,
        event: InputEvent,
    ) -> Result<EventResponse> {
        if !self.enabled {
            return Ok(EventResponse::Ignored);
        }

        match event {
            InputEvent::DragStart { position } => {
                if !self.pan_on_drag {
                    return Ok(EventResponse::Ignored);
                }
                self.last_drag = Some(position);
                Ok(EventResponse::Handled)
            }
            InputEvent::Drag { position } => {
                if !self.pan_on_drag {
                    return Ok(EventResponse::Ignored);
                }
                let Some(last) = self.last_drag else {
                    // Drag without a preceding DragStart; treat as the start
                    self.last_drag = Some(position);
                    return Ok(EventResponse::Ignored);
                };

                let current = viewport.to_geo(&position)?;
                let previous = viewport.to_geo(&last)?;

                let distance = current.distance_to(&previous);
                let bearing = current.bearing_to(&previous);
                viewport.recenter_by(distance, bearing)?;

                self.last_drag = Some(position);
                Ok(EventResponse::Handled)
            }
            InputEvent::DragEnd => {
                self.last_drag = None;
                Ok(EventResponse::Handled)
            }
            InputEvent::MouseMove { position } => {
                let coord = viewport.to_geo(&position)?;
                Ok(EventResponse::Position(coord))
            }
            InputEvent::Magnify { delta } => {
                viewport.set_zoom(viewport.zoom() - delta)?;
                Ok(EventResponse::Handled)
            }
            InputEvent::Scroll { delta } => {
                if !self.zoom_on_scroll || delta == 0.0 {
                    return Ok(EventResponse::Ignored);
                }
                if delta > 0.0 {
                    viewport.zoom_in()?;
                } else {
                    viewport.zoom_out()?;
                }
                Ok(EventResponse::Handled)
            }
            InputEvent::KeyPress { key, position, .. } => {
                if !self.keyboard {
                    return Ok(EventResponse::Ignored);
                }
                match key {
                    KeyCode::Char('z') => {
                        viewport.zoom_in()?;
                        Ok(EventResponse::Handled)
                    }
                    KeyCode::Char('Z') => {
                        viewport.zoom_out()?;
                        Ok(EventResponse::Handled)
                    }
                    KeyCode::Char('c') => match position {
                        Some(position) => {
                            let center = viewport.to_geo(&position)?;
                            viewport.set_center(center)?;
                            Ok(EventResponse::Handled)
                        }
                        None => Ok(EventResponse::Ignored),
                    },
                    KeyCode::Char('C') => {
                        viewport.set_center(self.home)?;
                        Ok(EventResponse::Handled)
                    }
                    _ => Ok(EventResponse::Ignored),
                }
            }
            InputEvent::Resize { width, height } => {
                let target = viewport.target_frame();
                let origin = Point::new(target.x.min, target.y.min);
                viewport.set_viewport_size(width, height, origin);
                Ok(EventResponse::Handled)
            }
        }
    }
}
