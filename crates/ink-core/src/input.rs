//! Input abstraction layer.
//!
//! Normalizes mouse, touch, and stylus events from the host page into a
//! unified `PointerEvent` enum consumed by the stroke recorder.

use crate::model::Point;

/// A normalized input event from any pointing device.
///
/// Coordinates are surface-local — the host subtracts the canvas origin
/// before crossing the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed (mouse down, touch start, pencil contact).
    Down { x: f32, y: f32 },

    /// Pointer moved over the surface.
    Move { x: f32, y: f32 },

    /// Pointer released.
    Up,

    /// Pointer left the surface. Ends a stroke exactly like `Up`.
    Leave,
}

impl PointerEvent {
    /// Extract position if this event carries one.
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::Down { x, y } | Self::Move { x, y } => Some(Point::new(x, y)),
            Self::Up | Self::Leave => None,
        }
    }
}
