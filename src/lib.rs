//! labeld
//!
//! A small HTTP service that turns a request path into a transparent PNG
//! label, for use as a lightweight dynamic badge or placeholder image.
//!
//! The interesting part is the rendering engine: approximate font metrics
//! from a single reference glyph, a canvas sized to fit, a translucent
//! shadow pass under a solid foreground pass, and optional border/crosshair
//! overlays. The HTTP front end, font loading, and PNG encoding are thin
//! glue around it.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use labeld::{FontFace, LabelBuilder, LabelStyle};
//!
//! # fn main() -> labeld::Result<()> {
//! let face = Arc::new(FontFace::bitmap_fallback());
//! let builder = LabelBuilder::new(face);
//! let canvas = builder.render("Hello World", &LabelStyle::default())?;
//! let png = labeld::encode_png(&canvas)?;
//! assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use serde::Deserialize;

pub mod error;
pub use error::{Error, Result};

pub mod canvas;
pub mod encode;
pub mod font;
pub mod label;
pub mod metrics;
pub mod render;
pub mod server;

pub use canvas::{Canvas, Color};
pub use encode::encode_png;
pub use font::FontFace;
pub use label::{Border, LabelBuilder, LabelStyle, Shadow};

use label::{
    DEFAULT_BORDER_WIDTH, DEFAULT_FIXED_SIZE, DEFAULT_FOREGROUND, DEFAULT_POINT_SIZE,
    DEFAULT_SHADOW_COLOR,
};

/// Service configuration, deserializable from a JSON file.
///
/// Every field has a default, so an empty config object is a valid one.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listen address for the HTTP front end
    pub listen: String,
    /// Path to an outline font file; the built-in bitmap face is used when
    /// absent or unloadable
    pub font: Option<PathBuf>,
    /// Point size for measured-mode renders
    pub point_size: f32,
    /// Canvas rectangle for fixed-size renders
    pub fixed_size: (u32, u32),
    /// Default style applied to every label
    pub style: StyleConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:2467".to_string(),
            font: None,
            point_size: DEFAULT_POINT_SIZE,
            fixed_size: DEFAULT_FIXED_SIZE,
            style: StyleConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load a config file, which may override any subset of the defaults.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("reading {}: {}", path.display(), e)))?;
        serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("parsing {}: {}", path.display(), e)))
    }
}

/// Style knobs as they appear in the config file; colors are `[r, g, b, a]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub foreground: [u8; 4],
    pub shadow: bool,
    pub shadow_color: [u8; 4],
    pub shadow_offset: (i32, i32),
    pub border: bool,
    pub border_width: u32,
    pub border_color: [u8; 4],
    pub crosshair: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            foreground: color_array(DEFAULT_FOREGROUND),
            shadow: true,
            shadow_color: color_array(DEFAULT_SHADOW_COLOR),
            shadow_offset: (1, 1),
            border: false,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: color_array(DEFAULT_FOREGROUND),
            crosshair: false,
        }
    }
}

impl StyleConfig {
    /// Materialize the render-time style.
    pub fn to_style(&self) -> LabelStyle {
        LabelStyle {
            foreground: array_color(self.foreground),
            shadow: self.shadow.then(|| Shadow {
                color: array_color(self.shadow_color),
                dx: self.shadow_offset.0,
                dy: self.shadow_offset.1,
            }),
            border: self.border.then(|| Border {
                width: self.border_width,
                color: array_color(self.border_color),
            }),
            crosshair: self.crosshair,
        }
    }
}

fn color_array(c: Color) -> [u8; 4] {
    [c.r, c.g, c.b, c.a]
}

fn array_color(c: [u8; 4]) -> Color {
    Color::rgba(c[0], c[1], c[2], c[3])
}
