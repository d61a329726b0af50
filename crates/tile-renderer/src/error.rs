//! Error types for tile rendering.

use raster_common::RasterError;
use thiserror::Error;

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering a tile.
#[derive(Debug, Error)]
pub enum RenderError {
    /// An underlying raster operation failed.
    #[error(transparent)]
    Raster(#[from] RasterError),

    /// RGB composition was requested for a band layout that is not three
    /// red/green/blue bands.
    #[error("RGB composition needs three red/green/blue bands, got {actual}")]
    BandMismatch { actual: usize },

    /// PNG encoding of a finished tile failed.
    #[error("PNG encoding failed: {0}")]
    Png(String),
}
