//! Canvas2D surface backend.
//!
//! Applies surface ops to an HTML `<canvas>` via `CanvasRenderingContext2d`.
//! Each segment is stroked as its own two-point path, so the style captured
//! in the segment applies to that segment alone. Restyling the pen never
//! repaints ink that is already down.

use ink_core::model::Segment;
use ink_core::surface::Surface;
use web_sys::CanvasRenderingContext2d;

/// The browser canvas as a stroke surface.
///
/// Owns the 2d context for the lifetime of the mounted component.
pub struct Canvas2dSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Canvas2dSurface {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }

    /// Track a host-driven element resize so `clear` keeps covering the
    /// whole surface.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

impl Surface for Canvas2dSurface {
    fn draw_segment(&mut self, segment: &Segment) {
        self.ctx.set_stroke_style_str(&segment.style.color.to_hex());
        self.ctx.set_line_width(f64::from(segment.style.width));
        self.ctx.set_line_cap("round");

        self.ctx.begin_path();
        self.ctx
            .move_to(f64::from(segment.from.x), f64::from(segment.from.y));
        self.ctx
            .line_to(f64::from(segment.to.x), f64::from(segment.to.y));
        self.ctx.stroke();
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }
}
