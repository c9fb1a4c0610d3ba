//! Pixel buffer and compositing primitives
//!
//! The canvas is a plain row-major RGBA grid. Every write is an overwrite of
//! the destination pixel; "transparency" in the shadow pass comes from the
//! source color's alpha channel, not from blending with what is already on
//! the canvas. Border and crosshair passes likewise clobber whatever was
//! drawn underneath, so they have to run after the text passes.

/// An RGBA color, 8 bits per channel. Alpha 0 is fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent black, the canvas background.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Opaque red used by the debug crosshair.
    pub const DEBUG_RED: Color = Color::rgb(255, 0, 0);

    /// Same color with the alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// A width x height pixel grid, row-major, created fully transparent.
///
/// Owned exclusively by one render; it is never shared between requests.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Allocate a transparent canvas. Dimensions are clamped to at least 1
    /// so a degenerate measurement can never produce an empty buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixels, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Read a pixel, or `None` if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(self.pixels[(y as u32 * self.width + x as u32) as usize])
    }

    /// Overwrite a pixel. Out-of-bounds writes are silently dropped; callers
    /// are expected to pre-clip, but stray writes are tolerated.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        self.pixels[(y as u32 * self.width + x as u32) as usize] = color;
    }

    /// Overwrite every pixel within `width` pixels of any edge.
    ///
    /// Each edge is an independent half-plane test, first match wins. No
    /// blending, so this must run after the text passes if the border is
    /// meant to sit on top.
    pub fn draw_border(&mut self, width: u32, color: Color) {
        for x in 0..self.width {
            for y in 0..self.height {
                let on_border = x < width
                    || x >= self.width.saturating_sub(width)
                    || y < width
                    || y >= self.height.saturating_sub(width);
                if on_border {
                    self.set_pixel(x as i32, y as i32, color);
                }
            }
        }
    }

    /// Overwrite the exact middle row and middle column with red, for
    /// eyeballing text placement. Debug only, disabled by default.
    pub fn draw_crosshair(&mut self) {
        let mid_y = (self.height / 2) as i32;
        let mid_x = (self.width / 2) as i32;
        for x in 0..self.width as i32 {
            self.set_pixel(x, mid_y, Color::DEBUG_RED);
        }
        for y in 0..self.height as i32 {
            self.set_pixel(mid_x, y, Color::DEBUG_RED);
        }
    }
}
