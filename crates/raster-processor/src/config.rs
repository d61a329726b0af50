//! Configuration for the raster processing pipeline.

use crate::resample::ResampleMethod;
use raster_common::{RasterError, RasterResult};
use serde::{Deserialize, Serialize};

/// Configuration for resampling and tile assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Interpolation method for sample-domain resampling.
    pub interpolation: ResampleMethod,

    /// Packed ARGB color used for tile area the dataset does not cover.
    pub fill_color: u32,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            interpolation: ResampleMethod::Bilinear,
            fill_color: 0xFFFF_FFFF,
        }
    }
}

impl ProcessorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("RASTER_INTERPOLATION") {
            config.interpolation = ResampleMethod::from_str(&val);
        }

        if let Ok(val) = std::env::var("RASTER_FILL_COLOR") {
            if let Ok(color) = u32::from_str_radix(val.trim_start_matches('#'), 16) {
                config.fill_color = color;
            }
        }

        config
    }

    /// Validate the configuration.
    ///
    /// The fill color must be fully opaque: fill pixels share tiles with
    /// rendered data, which always carries alpha 0xFF.
    pub fn validate(&self) -> RasterResult<()> {
        if self.fill_color >> 24 != 0xFF {
            return Err(RasterError::invalid_config(format!(
                "fill color {:#010x} is not opaque",
                self.fill_color
            )));
        }
        Ok(())
    }
}
