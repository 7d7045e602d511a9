// Core types shared by the capture engine and the demo window.

/// Fully transparent pixel; what an untouched surface holds everywhere.
pub const EMPTY: u32 = 0x00_00_00_00;

/// Opaque black, the default ink.
pub const INK_BLACK: u32 = 0xFF_00_00_00;

/// The raster surface the signature is drawn into.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // surface width in pixels (== container width at last resize)
    pub height: usize,     // surface height in pixels
    pub pixels: Vec<u32>,  // each entry is 0xAARRGGBB; alpha 0 = nothing drawn
}

impl FrameBuffer {
    /// Allocate an empty (transparent) surface.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![EMPTY; width * height] }
    }

    /// Pixel at (x,y), or None when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Put a pixel if (x,y) is inside bounds; out-of-bounds writes are dropped.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y * self.width + x;
        self.pixels[idx] = color;
    }

    /// Wipe every pixel back to transparent.
    pub fn clear(&mut self) {
        for p in &mut self.pixels { *p = EMPTY; }
    }

    /// True when at least one pixel carries ink (non-zero alpha).
    pub fn has_ink(&self) -> bool {
        self.pixels.iter().any(|p| p >> 24 != 0)
    }
}

/// A position in either client (window) or surface-local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Where the surface sits inside the client area (its bounding-box origin).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
}

impl SurfaceRect {
    /// Client coordinates -> surface-local coordinates.
    /// Only translates; any scaling between display and pixel size is ignored.
    pub fn to_local(&self, client: Point) -> Point {
        Point::new(client.x - self.left, client.y - self.top)
    }
}
