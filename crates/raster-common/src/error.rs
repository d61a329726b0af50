//! Error types shared across the raster tile rendering crates.

use thiserror::Error;

/// Result type alias using RasterError.
pub type RasterResult<T> = Result<T, RasterError>;

/// Primary error type for raster operations.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The dataset geotransform is rotated or degenerate. Tile geometry
    /// cannot be derived from it, so the dataset is unusable as configured.
    #[error("invalid geotransform: {0}")]
    InvalidGeoTransform(String),

    /// A read window does not satisfy the query invariants.
    #[error("invalid window {window} for raster of {width}x{height}")]
    InvalidWindow {
        window: String,
        width: usize,
        height: usize,
    },

    /// Colormap rendering was requested but no palette is loaded.
    #[error("colormap rendering requested but no colormap is loaded")]
    MissingColorMap,

    /// The dataset reader failed to decode the requested window.
    #[error("failed to read raster data: {0}")]
    ReadFailed(String),

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// The render was cancelled between phases.
    #[error("render cancelled")]
    Cancelled,
}

impl RasterError {
    /// Create a ReadFailed error.
    pub fn read_failed(msg: impl Into<String>) -> Self {
        Self::ReadFailed(msg.into())
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
