//! Font faces: a parsed outline font, or the built-in bitmap fallback
//!
//! A `FontFace` is loaded once at startup and shared read-only by every
//! render thread. It is never mutated after construction, so concurrent
//! renders need no locking around it.

use std::path::Path;

use fontdue::{Font, FontSettings};
use noto_sans_mono_bitmap::{get_raster, get_raster_width, FontWeight, RasterHeight, RasterizedChar};

use crate::error::{Error, Result};

/// The immutable font resource behind all renders.
///
/// `Outline` wraps a parsed TTF/OTF; `Bitmap` is the built-in fixed-width
/// face used when no font file is configured or the configured one fails
/// to load.
pub enum FontFace {
    Outline(Font),
    Bitmap(BitmapFace),
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontFace::Outline(_) => f.write_str("FontFace::Outline"),
            FontFace::Bitmap(_) => f.write_str("FontFace::Bitmap"),
        }
    }
}

impl FontFace {
    /// Parse an outline font from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| Error::Font(format!("parsing font: {}", e)))?;
        Ok(FontFace::Outline(font))
    }

    /// Read and parse an outline font file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| Error::Font(format!("reading {}: {}", path.display(), e)))?;
        Self::from_bytes(&bytes)
    }

    /// The built-in fixed-width bitmap face. Always available.
    pub fn bitmap_fallback() -> Self {
        FontFace::Bitmap(BitmapFace::default())
    }

    pub fn is_outline(&self) -> bool {
        matches!(self, FontFace::Outline(_))
    }

    /// Whether the face has a real glyph for `ch` (not the missing-glyph box).
    pub fn has_glyph(&self, ch: char) -> bool {
        match self {
            FontFace::Outline(font) => font.lookup_glyph_index(ch) != 0,
            FontFace::Bitmap(face) => face.raster(ch).is_some(),
        }
    }
}

/// The fixed-width fallback face, backed by pre-rasterized Noto Sans Mono
/// glyphs at a 16 px line height.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFace;

impl BitmapFace {
    /// Rows of the glyph cell that sit above the baseline. Calibrated
    /// visually for `RasterHeight::Size16`, not derived from font tables.
    pub const ASCENT: i32 = 12;

    /// Fixed advance of every glyph cell, in pixels.
    pub fn char_width(&self) -> u32 {
        get_raster_width(FontWeight::Regular, RasterHeight::Size16) as u32
    }

    /// Glyph cell height, in pixels.
    pub fn height(&self) -> u32 {
        16
    }

    /// Pre-rasterized coverage rows for `ch`, or `None` if the face has no
    /// such glyph.
    pub fn raster(&self, ch: char) -> Option<RasterizedChar> {
        get_raster(ch, FontWeight::Regular, RasterHeight::Size16)
    }
}
