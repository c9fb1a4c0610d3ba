//! Width estimation and baseline placement
//!
//! The measurement here is deliberately crude: the advance of a single
//! reference glyph is taken as the width of every character, so the canvas
//! comes out "big enough" for the whole label without walking the text. The
//! constants are calibrations for the font/size combination in use, not
//! universal truths, so they live in [`MetricsCfg`] where a deployment can
//! override them.

use crate::font::FontFace;

/// Rendering DPI. Fixed so glyph shapes do not depend on host display
/// settings: at 72 DPI one point is exactly one pixel.
pub const DPI: f32 = 72.0;

/// Calibration knobs for the width/baseline heuristics.
#[derive(Debug, Clone)]
pub struct MetricsCfg {
    /// Glyph whose advance stands in for every character ('M', the widest
    /// common Latin glyph, so the estimate errs wide).
    pub reference_glyph: char,
    /// Divisor converting 26.6 fixed-point advance units to pixels. The
    /// exact conversion is 64; the default sits just under it to leave a
    /// little slack per character.
    pub advance_divisor: f32,
    /// Pixels subtracted from the point size to land the visual baseline.
    /// Calibrated for the reference font at size 72, not a true ascent.
    pub baseline_pull: i32,
    /// Per-character width used when the reference glyph cannot be looked
    /// up. Matches the fallback bitmap face's fixed glyph cell.
    pub fallback_char_width: u32,
}

impl Default for MetricsCfg {
    fn default() -> Self {
        Self {
            reference_glyph: 'M',
            advance_divisor: 63.0,
            baseline_pull: 10,
            fallback_char_width: crate::font::BitmapFace.char_width(),
        }
    }
}

impl MetricsCfg {
    /// Estimated pixel width of `text` at `point_size`.
    ///
    /// `len(text) * advance_units / advance_divisor`, where the advance is
    /// the reference glyph's. Falls back to the fixed per-character width if
    /// the glyph cannot be looked up; never fails.
    pub fn measure_width(&self, face: &FontFace, point_size: f32, text: &str) -> u32 {
        let chars = text.chars().count() as f32;
        let per_char = match face {
            FontFace::Outline(font) if face.has_glyph(self.reference_glyph) => {
                let advance = font.metrics(self.reference_glyph, point_size).advance_width;
                // fontdue reports pixels; scale up to 26.6 units before the
                // calibrated divisor so the slack stays comparable.
                advance * 64.0 / self.advance_divisor
            }
            _ => self.fallback_char_width as f32,
        };
        (chars * per_char).ceil() as u32
    }

    /// Baseline row for a single line at `point_size` and `dpi`.
    pub fn baseline(&self, point_size: f32, dpi: f32) -> i32 {
        (point_size * dpi / 72.0).floor() as i32 - self.baseline_pull
    }
}
