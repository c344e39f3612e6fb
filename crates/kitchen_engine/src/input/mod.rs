//! Pointer input handling

pub mod picking;

pub use picking::{
    project_to_screen,
    try_unproject_pointer,
    unproject_ndc,
    unproject_pointer,
    Viewport,
};

/// Raw pointer events forwarded by the windowing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at client coordinates
    Down {
        /// Client X in pixels
        x: f32,
        /// Client Y in pixels
        y: f32,
    },
    /// Pointer moved to client coordinates
    Move {
        /// Client X in pixels
        x: f32,
        /// Client Y in pixels
        y: f32,
    },
    /// Primary button released
    Up,
}
