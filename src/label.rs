//! Label orchestration: measure, allocate, composite, decorate
//!
//! The builder owns nothing shared: it borrows the process-wide font face
//! (injected at construction, never ambient) and allocates a fresh canvas
//! per render, so any number of renders can run concurrently.

use std::sync::Arc;

use log::debug;

use crate::canvas::{Canvas, Color};
use crate::error::Result;
use crate::font::FontFace;
use crate::metrics::{MetricsCfg, DPI};
use crate::render::draw_text;

/// Substituted when sanitization leaves nothing to render.
pub const FALLBACK_TEXT: &str = "User error";

/// Canvas height for measured-mode renders; tall enough for one line at the
/// default point size.
pub const LINE_HEIGHT: u32 = 72;

/// Point size used when none is configured.
pub const DEFAULT_POINT_SIZE: f32 = 72.0;

/// Left edge of the foreground text in measured mode.
pub const ANCHOR_X: i32 = 5;

/// Border width applied when a style enables the border without picking one.
pub const DEFAULT_BORDER_WIDTH: u32 = 3;

/// Canvas rectangle for fixed-size renders when the caller does not supply
/// one.
pub const DEFAULT_FIXED_SIZE: (u32, u32) = (192, 64);

/// Rows added below the vertical midpoint to place the fixed-mode baseline.
/// A visual calibration for the bitmap face, like the offsets in
/// [`MetricsCfg`].
const FIXED_BASELINE_DROP: i32 = 6;

/// Default foreground: a medium green.
pub const DEFAULT_FOREGROUND: Color = Color::rgb(60, 128, 60);

/// Default shadow: black at roughly 24% opacity.
pub const DEFAULT_SHADOW_COLOR: Color = Color::rgba(0, 0, 0, 60);

/// A drop shadow: color plus pixel offset from the foreground anchor.
#[derive(Debug, Clone)]
pub struct Shadow {
    pub color: Color,
    pub dx: i32,
    pub dy: i32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: DEFAULT_SHADOW_COLOR,
            dx: 1,
            dy: 1,
        }
    }
}

/// An edge border drawn over the finished text.
#[derive(Debug, Clone)]
pub struct Border {
    pub width: u32,
    pub color: Color,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            width: DEFAULT_BORDER_WIDTH,
            color: DEFAULT_FOREGROUND,
        }
    }
}

/// Everything that styles one label render.
#[derive(Debug, Clone)]
pub struct LabelStyle {
    pub foreground: Color,
    pub shadow: Option<Shadow>,
    pub border: Option<Border>,
    pub crosshair: bool,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            foreground: DEFAULT_FOREGROUND,
            shadow: Some(Shadow::default()),
            border: None,
            crosshair: false,
        }
    }
}

/// Renders label canvases against one injected font face.
pub struct LabelBuilder {
    face: Arc<FontFace>,
    fallback: FontFace,
    metrics: MetricsCfg,
    point_size: f32,
}

impl LabelBuilder {
    pub fn new(face: Arc<FontFace>) -> Self {
        Self {
            face,
            fallback: FontFace::bitmap_fallback(),
            metrics: MetricsCfg::default(),
            point_size: DEFAULT_POINT_SIZE,
        }
    }

    pub fn with_point_size(mut self, point_size: f32) -> Self {
        self.point_size = point_size;
        self
    }

    pub fn with_metrics(mut self, metrics: MetricsCfg) -> Self {
        self.metrics = metrics;
        self
    }

    /// The injected font face.
    pub fn face(&self) -> &FontFace {
        &self.face
    }

    /// Empty input never reaches the renderer.
    fn sanitize<'a>(&self, text: &'a str) -> &'a str {
        if text.trim().is_empty() {
            FALLBACK_TEXT
        } else {
            text
        }
    }

    /// Measured mode: canvas width from the text estimate, height fixed at
    /// [`LINE_HEIGHT`]. Shadow first, then foreground, then decorations.
    pub fn render(&self, text: &str, style: &LabelStyle) -> Result<Canvas> {
        let text = self.sanitize(text);
        let width = self.metrics.measure_width(&self.face, self.point_size, text);
        let baseline = self.metrics.baseline(self.point_size, DPI);
        debug!(
            "Rendering {:?}: width {}, baseline {}",
            text, width, baseline
        );

        let mut canvas = Canvas::new(width, LINE_HEIGHT);
        if let Some(shadow) = &style.shadow {
            draw_text(
                &mut canvas,
                &self.face,
                self.point_size,
                ANCHOR_X + shadow.dx,
                baseline + shadow.dy,
                text,
                shadow.color,
            )?;
        }
        draw_text(
            &mut canvas,
            &self.face,
            self.point_size,
            ANCHOR_X,
            baseline,
            text,
            style.foreground,
        )?;

        self.decorate(&mut canvas, style);
        Ok(canvas)
    }

    /// Fixed-size mode: a caller-supplied rectangle and the fixed-width
    /// bitmap face, with text centered by the half-length heuristic instead
    /// of real metrics. Used when no outline font is available.
    pub fn render_fixed(&self, size: (u32, u32), text: &str, style: &LabelStyle) -> Result<Canvas> {
        let text = self.sanitize(text);
        let (width, height) = size;
        let mut canvas = Canvas::new(width, height);

        let cell = self.metrics.fallback_char_width as i32;
        let offset = (text.chars().count() / 2) as i32 * cell;
        let x = canvas.width() as i32 / 2 - offset;
        let baseline = canvas.height() as i32 / 2 + FIXED_BASELINE_DROP;
        debug!("Rendering {:?} fixed at {}x{}", text, width, height);

        if let Some(shadow) = &style.shadow {
            draw_text(
                &mut canvas,
                &self.fallback,
                self.point_size,
                x + shadow.dx,
                baseline + shadow.dy,
                text,
                shadow.color,
            )?;
        }
        draw_text(
            &mut canvas,
            &self.fallback,
            self.point_size,
            x,
            baseline,
            text,
            style.foreground,
        )?;

        self.decorate(&mut canvas, style);
        Ok(canvas)
    }

    /// Border then crosshair, both drawn over the text.
    fn decorate(&self, canvas: &mut Canvas, style: &LabelStyle) {
        if let Some(border) = &style.border {
            canvas.draw_border(border.width, border.color);
        }
        if style.crosshair {
            canvas.draw_crosshair();
        }
    }
}
