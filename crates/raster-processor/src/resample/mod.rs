//! Resampling between source and destination resolutions.
//!
//! Two operating modes:
//! - **Pixel-domain** ([`resample_pixels_bilinear`]): runs on already
//!   rendered ARGB pixels. Always available; this is the portable
//!   reference path and the correctness oracle for the backends below.
//! - **Sample-domain** ([`RawResampler`]): resizes the raw typed samples
//!   before rendering, per band, supporting nearest-neighbor, bilinear and
//!   bicubic variants. [`GridResampler`] is the portable implementation;
//!   [`ImageResampler`] delegates 8- and 16-bit data to the `image` crate's
//!   resize primitives and must stay consistent with the portable path
//!   within a small numeric tolerance.

mod accel;
mod pixels;
mod raw;

pub use accel::ImageResampler;
pub use pixels::resample_pixels_bilinear;
pub use raw::GridResampler;

use raster_common::{RasterBuffer, RasterResult, Size};
use serde::{Deserialize, Serialize};

/// Interpolation algorithm used when resizing sample grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResampleMethod {
    /// Value of the nearest source sample.
    Nearest,
    /// Weighted blend of the four nearest samples.
    #[default]
    Bilinear,
    /// Catmull-Rom blend of the surrounding 4x4 samples.
    Bicubic,
}

impl ResampleMethod {
    /// Parse a method name, falling back to the default for unknown input.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "nearest" => ResampleMethod::Nearest,
            "bilinear" => ResampleMethod::Bilinear,
            "bicubic" => ResampleMethod::Bicubic,
            _ => ResampleMethod::default(),
        }
    }
}

/// Strategy interface for sample-domain resampling.
///
/// Implementations resize the buffer's typed samples to `target` in place
/// (replacing data and logical dimension). Resizing to the current size is
/// a no-op. Implementations never read past the last row or column: the
/// `+1` neighbors of edge pixels clamp to the last valid index.
pub trait RawResampler {
    fn resample(
        &self,
        raster: &mut RasterBuffer,
        target: Size,
        method: ResampleMethod,
    ) -> RasterResult<()>;
}
