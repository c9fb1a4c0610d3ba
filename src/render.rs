//! Glyph rasterization onto the canvas
//!
//! Glyph coverage scales the SOURCE color's alpha, and each covered pixel is
//! then written outright; nothing is blended with what the canvas already
//! holds. That keeps the compositing model identical to the border and
//! crosshair passes, and lets a shadow pass get its translucency purely from
//! a low-alpha source color.

use crate::canvas::{Canvas, Color};
use crate::font::{BitmapFace, FontFace};
use crate::error::{Error, Result};

/// Rasterize `text` starting at `(x, baseline_y)` in `color`, clipped to the
/// canvas bounds.
///
/// Glyphs the face cannot supply are skipped (the pen still advances so the
/// rest of the line keeps its spacing) and reported in the returned error,
/// so callers decide whether a partial line is acceptable. Hinting is not
/// applied; output depends only on the face, size, and anchor.
pub fn draw_text(
    canvas: &mut Canvas,
    face: &FontFace,
    point_size: f32,
    x: i32,
    baseline_y: i32,
    text: &str,
    color: Color,
) -> Result<()> {
    let mut missing: Vec<char> = Vec::new();

    match face {
        FontFace::Outline(font) => {
            let mut pen = x as f32;
            for ch in text.chars() {
                let (metrics, coverage) = font.rasterize(ch, point_size);
                if font.lookup_glyph_index(ch) == 0 {
                    missing.push(ch);
                    pen += metrics.advance_width;
                    continue;
                }
                let left = pen.round() as i32 + metrics.xmin;
                let top = baseline_y - metrics.height as i32 - metrics.ymin;
                blit_coverage(
                    canvas,
                    left,
                    top,
                    metrics.width,
                    &coverage,
                    color,
                );
                pen += metrics.advance_width;
            }
        }
        FontFace::Bitmap(bitmap) => {
            let cell = bitmap.char_width() as i32;
            let top = baseline_y - BitmapFace::ASCENT;
            for (i, ch) in text.chars().enumerate() {
                let Some(raster) = bitmap.raster(ch).or_else(|| bitmap.raster('?')) else {
                    missing.push(ch);
                    continue;
                };
                let left = x + i as i32 * cell;
                let width = raster.width();
                for (row, columns) in raster.raster().iter().enumerate() {
                    for (col, &intensity) in columns.iter().take(width).enumerate() {
                        write_covered(canvas, left + col as i32, top + row as i32, intensity, color);
                    }
                }
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        missing.sort_unstable();
        missing.dedup();
        Err(Error::Raster(format!(
            "face has no glyph for {:?}",
            missing.into_iter().collect::<String>()
        )))
    }
}

/// Write one glyph's coverage bitmap with its top-left corner at `(left, top)`.
fn blit_coverage(
    canvas: &mut Canvas,
    left: i32,
    top: i32,
    width: usize,
    coverage: &[u8],
    color: Color,
) {
    for (idx, &cov) in coverage.iter().enumerate() {
        let col = (idx % width.max(1)) as i32;
        let row = (idx / width.max(1)) as i32;
        write_covered(canvas, left + col, top + row, cov, color);
    }
}

/// Overwrite a pixel with `color` at coverage-scaled alpha. Zero coverage
/// leaves the destination alone.
fn write_covered(canvas: &mut Canvas, x: i32, y: i32, coverage: u8, color: Color) {
    if coverage == 0 {
        return;
    }
    let alpha = ((color.a as u16 * coverage as u16) / 255) as u8;
    canvas.set_pixel(x, y, color.with_alpha(alpha));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmap_text_marks_pixels() {
        let mut canvas = Canvas::new(64, 20);
        let face = FontFace::bitmap_fallback();
        draw_text(&mut canvas, &face, 72.0, 2, 14, "M", Color::rgb(10, 20, 30)).unwrap();
        let touched = canvas
            .pixels()
            .iter()
            .filter(|&&p| p != Color::TRANSPARENT)
            .count();
        assert!(touched > 0, "expected the glyph to cover some pixels");
    }

    #[test]
    fn coverage_scales_source_alpha_only() {
        let mut canvas = Canvas::new(64, 20);
        let face = FontFace::bitmap_fallback();
        let src = Color::rgba(10, 20, 30, 60);
        draw_text(&mut canvas, &face, 72.0, 2, 14, "M", src).unwrap();
        for &p in canvas.pixels() {
            if p == Color::TRANSPARENT {
                continue;
            }
            assert_eq!((p.r, p.g, p.b), (10, 20, 30));
            assert!(p.a <= 60, "alpha {} exceeds the source alpha", p.a);
        }
    }

    #[test]
    fn out_of_bounds_anchor_is_clipped_not_fatal() {
        let mut canvas = Canvas::new(8, 8);
        let face = FontFace::bitmap_fallback();
        draw_text(&mut canvas, &face, 72.0, -100, -100, "Hi", Color::rgb(1, 1, 1)).unwrap();
        draw_text(&mut canvas, &face, 72.0, 100, 100, "Hi", Color::rgb(1, 1, 1)).unwrap();
    }

    #[test]
    fn foreground_overwrites_shadow_where_they_overlap() {
        let mut canvas = Canvas::new(64, 20);
        let face = FontFace::bitmap_fallback();
        let shadow = Color::rgba(0, 0, 0, 60);
        let green = Color::rgb(60, 128, 60);
        draw_text(&mut canvas, &face, 72.0, 3, 15, "M", shadow).unwrap();
        draw_text(&mut canvas, &face, 72.0, 2, 14, "M", green).unwrap();
        let has_green = canvas
            .pixels()
            .iter()
            .any(|&p| (p.r, p.g, p.b) == (60, 128, 60));
        assert!(has_green);
    }
}
