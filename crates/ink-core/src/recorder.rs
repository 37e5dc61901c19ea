//! The stroke recorder: pointer events in, surface ops out.
//!
//! ## Event contract
//!
//! | Event | Idle | Drawing |
//! |-------|------|---------|
//! | `Down` | arm, remember the point | re-arm from the new point |
//! | `Move` | ignored | one segment from the last point |
//! | `Up` / `Leave` | ignored | disarm, forget the point |
//!
//! `Down` itself strokes nothing; a path begins without rendering a
//! zero-length segment. `clear` is a control request, not a pointer
//! event, and leaves the stroke state alone so a stroke in progress
//! resumes onto the blank surface.

use crate::input::PointerEvent;
use crate::model::{Color, Point, Segment, StrokeStyle};
use crate::surface::{OpList, SurfaceOp};
use smallvec::smallvec;

/// Translates pointer events into surface ops.
///
/// Invariant: a segment is only emitted while `drawing` is true and a
/// prior point exists.
#[derive(Debug, Clone)]
pub struct StrokeRecorder {
    drawing: bool,
    last_point: Option<Point>,
    style: StrokeStyle,
}

impl Default for StrokeRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeRecorder {
    /// Recorder with the host defaults: 3px black pen.
    pub fn new() -> Self {
        Self::with_style(StrokeStyle::default())
    }

    pub fn with_style(style: StrokeStyle) -> Self {
        Self {
            drawing: false,
            last_point: None,
            style,
        }
    }

    /// Handle one input event, returning the ops to apply to the surface.
    pub fn handle(&mut self, event: &PointerEvent) -> OpList {
        let mut ops = OpList::new();
        match *event {
            PointerEvent::Down { x, y } => {
                self.drawing = true;
                self.last_point = Some(Point::new(x, y));
                log::trace!("stroke begin at ({x}, {y})");
            }
            PointerEvent::Move { x, y } => {
                if self.drawing
                    && let Some(from) = self.last_point
                {
                    let to = Point::new(x, y);
                    ops.push(SurfaceOp::Segment(Segment {
                        from,
                        to,
                        style: self.style,
                    }));
                    self.last_point = Some(to);
                }
            }
            PointerEvent::Up | PointerEvent::Leave => {
                if self.drawing {
                    self.drawing = false;
                    self.last_point = None;
                    log::trace!("stroke end");
                }
            }
        }
        ops
    }

    /// Request a full erase. Stroke state is untouched.
    pub fn clear(&self) -> OpList {
        smallvec![SurfaceOp::Clear]
    }

    /// Set the pen width, clamped to the slider range.
    /// Applies to the next emitted segment, not retroactively.
    pub fn set_line_width(&mut self, width: f32) {
        self.style.set_width(width);
        log::trace!("pen width -> {}", self.style.width);
    }

    /// Set the pen color. Applies to the next emitted segment.
    pub fn set_line_color(&mut self, color: Color) {
        self.style.color = color;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }
}
