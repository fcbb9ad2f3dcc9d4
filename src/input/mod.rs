pub mod events;
pub mod handler;

// Re-export the essential types
pub use events::{EventResponse, InputEvent, KeyCode, KeyModifiers};
pub use handler::InputHandler;
