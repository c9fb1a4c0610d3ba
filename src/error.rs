//! Error types for the label renderer

use thiserror::Error;

/// Result type alias for render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a label image
///
/// The variants map onto distinct fault domains: a font that cannot be
/// loaded, text that cannot be rasterized, finished pixels that cannot be
/// serialized, and bad service configuration. None of them are retried
/// automatically; the caller decides recovery policy.
#[derive(Error, Debug)]
pub enum Error {
    /// Font bytes could not be read or parsed at startup
    #[error("Font load failed: {0}")]
    Font(String),

    /// One or more glyphs could not be rasterized
    #[error("Rasterization failed: {0}")]
    Raster(String),

    /// The finished canvas could not be serialized to PNG
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}
