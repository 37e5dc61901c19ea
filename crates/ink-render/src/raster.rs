//! Software rasterizer for stroke segments.
//!
//! Backs the `Surface` trait where no browser canvas exists: native tests
//! and the replay example. A pixel is inked when its center lies within
//! half the pen width of the segment, which gives round caps and joins,
//! the same look `lineCap: "round"` produces on Canvas2D.

use ink_core::model::{Color, Segment};
use ink_core::surface::Surface;
use kurbo::{Line, ParamCurveNearest, Point};

/// Background of a fresh (or cleared) surface.
const BACKGROUND: Color = Color::WHITE;

/// Accuracy knob for kurbo's nearest-point query. Lines solve in closed
/// form, so any small value works.
const NEAREST_ACCURACY: f64 = 1e-6;

/// An in-memory RGB surface, row-major from the top-left.
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at (x, y), or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Number of pixels that differ from the background.
    pub fn inked_count(&self) -> usize {
        self.pixels.iter().filter(|p| **p != BACKGROUND).count()
    }

    pub fn is_blank(&self) -> bool {
        self.inked_count() == 0
    }
}

impl Surface for PixelSurface {
    fn draw_segment(&mut self, segment: &Segment) {
        let radius = f64::from(segment.style.width) / 2.0;
        let line = Line::new(
            Point::new(f64::from(segment.from.x), f64::from(segment.from.y)),
            Point::new(f64::from(segment.to.x), f64::from(segment.to.y)),
        );

        // Scan only the segment's bounding box, inflated by the pen radius
        // and clipped to the surface.
        let x0 = ((line.p0.x.min(line.p1.x) - radius).floor() as i64).max(0);
        let x1 = ((line.p0.x.max(line.p1.x) + radius).ceil() as i64).min(i64::from(self.width) - 1);
        let y0 = ((line.p0.y.min(line.p1.y) - radius).floor() as i64).max(0);
        let y1 =
            ((line.p0.y.max(line.p1.y) + radius).ceil() as i64).min(i64::from(self.height) - 1);
        if x0 > x1 || y0 > y1 {
            log::trace!("segment entirely off-surface, skipped");
            return;
        }

        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let nearest = line.nearest(center, NEAREST_ACCURACY);
                if nearest.distance_sq <= radius * radius {
                    self.pixels[(y * i64::from(self.width) + x) as usize] = segment.style.color;
                }
            }
        }
    }

    fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ink_core::model::StrokeStyle;

    fn segment(from: (f32, f32), to: (f32, f32), style: StrokeStyle) -> Segment {
        Segment {
            from: from.into(),
            to: to.into(),
            style,
        }
    }

    #[test]
    fn segment_inks_pixels_along_the_line() {
        let mut surface = PixelSurface::new(64, 64);
        let style = StrokeStyle::new(3.0, Color::rgb(10, 20, 30));
        surface.draw_segment(&segment((8.0, 8.0), (24.0, 8.0), style));

        assert_eq!(surface.pixel(16, 8), Some(Color::rgb(10, 20, 30)));
        // Well off the line stays background.
        assert_eq!(surface.pixel(16, 30), Some(Color::WHITE));
        assert!(surface.inked_count() > 0);
    }

    #[test]
    fn zero_length_segment_paints_a_dot() {
        let mut surface = PixelSurface::new(32, 32);
        let style = StrokeStyle::new(6.0, Color::BLACK);
        surface.draw_segment(&segment((16.0, 16.0), (16.0, 16.0), style));

        assert_eq!(surface.pixel(16, 16), Some(Color::BLACK));
        // Dot radius is 3px; a pixel 5px away stays background.
        assert_eq!(surface.pixel(21, 16), Some(Color::WHITE));
    }

    #[test]
    fn off_surface_segment_is_safe() {
        let mut surface = PixelSurface::new(16, 16);
        let style = StrokeStyle::default();
        surface.draw_segment(&segment((-50.0, -50.0), (-40.0, -40.0), style));
        surface.draw_segment(&segment((100.0, 100.0), (200.0, 200.0), style));
        assert!(surface.is_blank());
    }

    #[test]
    fn segment_crossing_the_edge_is_clipped() {
        let mut surface = PixelSurface::new(16, 16);
        let style = StrokeStyle::new(2.0, Color::BLACK);
        surface.draw_segment(&segment((-10.0, 8.0), (30.0, 8.0), style));

        assert_eq!(surface.pixel(0, 8), Some(Color::BLACK));
        assert_eq!(surface.pixel(15, 8), Some(Color::BLACK));
    }

    #[test]
    fn clear_wipes_everything() {
        let mut surface = PixelSurface::new(32, 32);
        surface.draw_segment(&segment((2.0, 2.0), (28.0, 28.0), StrokeStyle::default()));
        assert!(!surface.is_blank());

        surface.clear();
        assert!(surface.is_blank());
    }

    #[test]
    fn clear_on_blank_surface_is_idempotent() {
        let mut surface = PixelSurface::new(8, 8);
        surface.clear();
        surface.clear();
        assert!(surface.is_blank());
        assert_eq!(surface.pixel(0, 0), Some(Color::WHITE));
    }
}
