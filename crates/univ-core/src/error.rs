//! Error types for Univ

use thiserror::Error;

pub type Result<T> = std::result::Result<T, UnivError>;

/// Main error type for Univ
///
/// The text transforms themselves never fail. Errors only come from the
/// seams: bad configuration, a failing layout engine, or an exporter.
#[derive(Debug, Error)]
pub enum UnivError {
    #[error("Layout failed: {0}")]
    LayoutFailed(#[from] LayoutError),

    #[error("Export failed: {0}")]
    ExportFailed(#[from] ExportError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Glyph layout errors
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid extents: {width}x{height}")]
    InvalidExtents { width: f32, height: f32 },

    #[error("Font has zero units per em")]
    InvalidUnitsPerEm,

    #[error("Backend error: {0}")]
    BackendError(String),
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}
