// Window + software drawing for the demo.
// 1) A resizable window that shows the signature card.
// 2) The pad surface composited over a white card with a dashed border.
// 3) A tiny 5x7 bitmap font for the "Sign Here" hint and the key help line.
//
// Screen buffers use 0x00RRGGBB (what minifb wants); the pad surface uses 0xAARRGGBB.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use signature_pad::{Error, FrameBuffer, Result};

pub const CARD_WHITE: u32 = 0x00_FF_FF_FF;
pub const BORDER_GRAY: u32 = 0x00_D1_D5_DB;
pub const HINT_GRAY: u32 = 0x00_9C_A3_AF;

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a resizable window; its client area is the pad's container.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let opts = WindowOptions { resize: true, ..WindowOptions::default() };
        let window = Window::new(title, width, height, opts)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<()> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down.
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current client size; this is what the pad measures as its container.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Mouse position in client coordinates, None while outside the window.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    /// True while the primary button is held; the loop turns edges into down/up events.
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// One press of C (no key repeat): clear the signature.
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// One press of S (no key repeat): save the latest signature.
    pub fn s_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }
}

/* ---------- Compositing ---------- */

/// Fill the whole screen with one color.
pub fn fill(fb: &mut FrameBuffer, color: u32) {
    for p in &mut fb.pixels { *p = color; }
}

/// Paint the pad surface onto the screen at (left, top), ink over a white card.
pub fn composite_surface(screen: &mut FrameBuffer, surface: &FrameBuffer, left: i32, top: i32) {
    for sy in 0..surface.height {
        for sx in 0..surface.width {
            let px = surface.pixels[sy * surface.width + sx];
            screen.put_pixel(left + sx as i32, top + sy as i32, over_white(px));
        }
    }
}

/// Source-over of an 0xAARRGGBB pixel on white, returned as 0x00RRGGBB.
#[inline]
fn over_white(px: u32) -> u32 {
    let a = (px >> 24) & 0xFF;
    if a == 0 {
        return CARD_WHITE;
    }
    let mix = |c: u32| (c * a + 255 * (255 - a)) / 255;
    let r = mix((px >> 16) & 0xFF);
    let g = mix((px >> 8) & 0xFF);
    let b = mix(px & 0xFF);
    (r << 16) | (g << 8) | b
}

/// Dashed rectangle outline (4 on, 3 off), like the card's border.
pub fn draw_dashed_frame(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    let on = |i: i32| i % 7 < 4;
    for i in 0..w {
        if on(i) {
            fb.put_pixel(x + i, y, color);
            fb.put_pixel(x + i, y + h - 1, color);
        }
    }
    for i in 0..h {
        if on(i) {
            fb.put_pixel(x, y + i, color);
            fb.put_pixel(x + w - 1, y + i, color);
        }
    }
}

/* ---------- 5x7 bitmap font (uppercase subset for the hint + help line) ---------- */

/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),

        _ => None,
    }
}

fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    fb.put_pixel(x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Width in pixels of `text` at 5x7 with 1-pixel spacing.
pub fn text_width_5x7(text: &str) -> i32 {
    text.chars().count() as i32 * 6
}

pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}
