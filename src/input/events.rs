use crate::core::geo::{LatLng, Point};
use serde::{Deserialize, Serialize};

/// Toolkit-independent input events the handler can translate into
/// viewport mutations. The windowing layer maps its native events onto
/// these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Start of a drag operation
    DragStart { position: Point },
    /// Drag in progress; `position` is the current cursor location
    Drag { position: Point },
    /// End of a drag operation
    DragEnd,
    /// Mouse/finger move without a button held
    MouseMove { position: Point },
    /// Pinch/magnify gesture; a positive delta tightens the view
    Magnify { delta: f64 },
    /// Scroll wheel; positive notches tighten the view
    Scroll { delta: f64 },
    /// Keyboard input, with the cursor position at press time when the
    /// host can provide it
    KeyPress {
        key: KeyCode,
        modifiers: KeyModifiers,
        position: Option<Point>,
    },
    /// Viewport/window resize
    Resize { width: f64, height: f64 },
}

/// Keyboard key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Char(char),
    Escape,
    Other(u32),
}

/// Keyboard modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// What the handler did with an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventResponse {
    Handled,
    Ignored,
    /// The cursor moved; carries the geographic coordinate under it for
    /// a status readout
    Position(LatLng),
}
