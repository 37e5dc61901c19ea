//! The drawing surface boundary.
//!
//! The recorder never draws directly; it emits `SurfaceOp` commands that
//! its owner applies to whatever `Surface` backs the canvas: the browser
//! 2D context in the wasm bridge, a pixel buffer in native tests.

use crate::model::Segment;
use smallvec::SmallVec;

/// Ops produced by one recorder call. A pointer event yields at most one
/// op, so the inline capacity keeps the per-move hot path allocation-free.
pub type OpList = SmallVec<[SurfaceOp; 1]>;

/// A command issued against the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceOp {
    /// Stroke one segment in its captured style.
    Segment(Segment),

    /// Erase the entire surface content.
    Clear,
}

/// An addressable 2D raster the recorder draws onto.
///
/// Exclusively owned by its controller for the component lifetime; all
/// calls arrive strictly serialized from the UI thread.
pub trait Surface {
    /// Stroke one segment with round caps.
    fn draw_segment(&mut self, segment: &Segment);

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Dispatch a single op.
    fn apply(&mut self, op: &SurfaceOp) {
        match op {
            SurfaceOp::Segment(segment) => self.draw_segment(segment),
            SurfaceOp::Clear => self.clear(),
        }
    }

    /// Apply a batch of ops in order.
    fn apply_all(&mut self, ops: &[SurfaceOp]) {
        for op in ops {
            self.apply(op);
        }
    }
}
