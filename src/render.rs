// Stroke renderer: turns the points of a gesture into ink on the raster surface.
// Curves are just the dense polyline the input events produce; every segment is straight.

use crate::config::PadConfig;
use crate::types::{FrameBuffer, Point};
use log::trace;

/// Fixed styling applied to every segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub line_width: f32, // full width; caps are round with radius width/2
    pub color: u32,      // 0xAARRGGBB
}

impl StrokeStyle {
    pub fn from_config(cfg: &PadConfig) -> Self {
        Self { line_width: cfg.line_width, color: cfg.stroke_color }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::from_config(&PadConfig::default())
    }
}

/// Path state for the current gesture: only the cursor is kept, pixels live in the surface.
#[derive(Debug)]
pub struct StrokeRenderer {
    style: StrokeStyle,
    cursor: Option<Point>,
}

impl StrokeRenderer {
    pub fn new(style: StrokeStyle) -> Self {
        Self { style, cursor: None }
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Start a new path at `at` without drawing anything.
    pub fn begin_path(&mut self, at: Point) {
        self.cursor = Some(at);
    }

    /// Draw cursor -> `to`, then advance the cursor.
    /// Returns true when a segment actually reached the surface. A missing or zero-sized
    /// surface skips the call entirely; a missing cursor behaves like `begin_path`.
    pub fn line_to(&mut self, surface: Option<&mut FrameBuffer>, to: Point) -> bool {
        // A zero-sized surface cannot hold ink; treat it like a missing one.
        let Some(fb) = surface.filter(|fb| fb.width > 0 && fb.height > 0) else {
            return false;
        };
        let Some(from) = self.cursor else {
            self.cursor = Some(to);
            return false;
        };
        stroke_segment(fb, from, to, self.style.line_width, self.style.color);
        trace!("segment ({:.1},{:.1}) -> ({:.1},{:.1})", from.x, from.y, to.x, to.y);
        self.cursor = Some(to);
        true
    }

    pub fn end_path(&mut self) {
        self.cursor = None;
    }
}

/// Rasterize a round-capped line segment of the given width.
/// A pixel is inked when its center lies within width/2 of the segment (a capsule), so the
/// caps and the joints between consecutive segments come out round without extra work.
pub fn stroke_segment(fb: &mut FrameBuffer, a: Point, b: Point, width: f32, color: u32) {
    let r = width * 0.5;
    if r <= 0.0 {
        return;
    }
    let r2 = r * r;

    // Scan just the bounding box of the capsule
    let x0 = (a.x.min(b.x) - r).floor() as i32;
    let x1 = (a.x.max(b.x) + r).ceil() as i32;
    let y0 = (a.y.min(b.y) - r).floor() as i32;
    let y1 = (a.y.max(b.y) + r).ceil() as i32;

    for y in y0.max(0)..=y1.min(fb.height as i32 - 1) {
        for x in x0.max(0)..=x1.min(fb.width as i32 - 1) {
            let c = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            if dist2_to_segment(c, a, b) <= r2 {
                fb.put_pixel(x, y, color);
            }
        }
    }
}

#[inline]
fn dist2_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let len2 = abx * abx + aby * aby;
    let t = if len2 > 0.0 {
        (((p.x - a.x) * abx + (p.y - a.y) * aby) / len2).clamp(0.0, 1.0)
    } else {
        0.0 // degenerate segment: a dot
    };
    let (cx, cy) = (a.x + t * abx, a.y + t * aby);
    let (dx, dy) = (p.x - cx, p.y - cy);
    dx * dx + dy * dy
}
