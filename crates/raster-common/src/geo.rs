//! Affine dataset geotransform.

use crate::error::{RasterError, RasterResult};
use serde::{Deserialize, Serialize};

/// The six-coefficient affine transform mapping pixel coordinates to
/// georeferenced coordinates:
///
/// ```text
/// geo_x = gt[0] + px * gt[1] + py * gt[2]
/// geo_y = gt[3] + px * gt[4] + py * gt[5]
/// ```
///
/// Only axis-aligned transforms are supported; a rotated or degenerate
/// transform makes the tile geometry underivable and is rejected at
/// dataset-open time. Transforming between coordinate reference systems is
/// out of scope here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoTransform(pub [f64; 6]);

impl GeoTransform {
    pub fn new(coefficients: [f64; 6]) -> Self {
        Self(coefficients)
    }

    /// An identity transform: one pixel per unit, origin at (0, 0).
    pub fn identity() -> Self {
        Self([0.0, 1.0, 0.0, 0.0, 0.0, -1.0])
    }

    /// Reject rotated (gt[2] or gt[4] non-zero) and degenerate (zero pixel
    /// size) transforms. This is a fatal configuration error for the
    /// dataset, surfaced instead of silently producing wrong geometry.
    pub fn validate(&self) -> RasterResult<()> {
        let gt = self.0;
        if gt[2] != 0.0 || gt[4] != 0.0 {
            return Err(RasterError::InvalidGeoTransform(format!(
                "rotated transform: gt[2]={}, gt[4]={}",
                gt[2], gt[4]
            )));
        }
        if gt[1] == 0.0 || gt[5] == 0.0 {
            return Err(RasterError::InvalidGeoTransform(format!(
                "degenerate pixel size: {}x{}",
                gt[1], gt[5]
            )));
        }
        Ok(())
    }

    /// Map a pixel coordinate to georeferenced coordinates.
    pub fn apply(&self, px: f64, py: f64) -> (f64, f64) {
        let gt = self.0;
        (
            gt[0] + px * gt[1] + py * gt[2],
            gt[3] + px * gt[4] + py * gt[5],
        )
    }

    /// Georeferenced size of one pixel (x, y). The y size is typically
    /// negative for north-up rasters.
    pub fn pixel_size(&self) -> (f64, f64) {
        (self.0[1], self.0[5])
    }

    /// Georeferenced coordinates of the top-left raster corner.
    pub fn origin(&self) -> (f64, f64) {
        (self.0[0], self.0[3])
    }
}

impl Default for GeoTransform {
    fn default() -> Self {
        Self::identity()
    }
}
