//! Conversion of raw typed samples into ARGB pixels.

use crate::error::{RenderError, RenderResult};
use num_traits::clamp;
use raster_common::{has_rgb_bands, Band, ColorMap, RasterBuffer, RasterError};
use raster_processor::{sample_range, SampleReader};
use tracing::debug;

/// Gray level used when a band has no value spread to normalize against.
const DEGENERATE_GRAY: u32 = 128;

/// Renders raster sample buffers into ARGB pixel arrays.
///
/// Three mutually exclusive strategies, chosen by band layout, palette
/// availability and the caller's colormap toggle:
///
/// - [`rgb_bands`](Self::rgb_bands) composes three red/green/blue bands;
/// - [`colormap`](Self::colormap) looks every sample up in the palette;
/// - [`grayscale`](Self::grayscale) normalizes to the observed min/max.
///
/// Every strategy returns exactly `width * height` packed ARGB values.
#[derive(Debug, Clone, Default)]
pub struct PixelRenderer {
    color_map: Option<ColorMap>,
    use_colormap: bool,
}

impl PixelRenderer {
    pub fn new(color_map: Option<ColorMap>) -> Self {
        let use_colormap = color_map.is_some();
        Self {
            color_map,
            use_colormap,
        }
    }

    pub fn has_colormap(&self) -> bool {
        self.color_map.is_some()
    }

    /// Flip between colormap and grayscale rendering for single-band data.
    pub fn toggle_colormap(&mut self) {
        self.use_colormap = !self.use_colormap;
    }

    /// Only single-band datasets can switch between colormap and
    /// grayscale; RGB composition is never subject to the toggle.
    pub fn can_toggle_colormap(bands: &[Band]) -> bool {
        bands.len() == 1
    }

    /// Render with the strategy the band layout and toggle state select.
    pub fn render(&self, raster: &RasterBuffer, bands: &[Band]) -> RenderResult<Vec<u32>> {
        if has_rgb_bands(bands) {
            self.rgb_bands(raster)
        } else if self.use_colormap && self.has_colormap() {
            self.colormap(raster)
        } else {
            Ok(self.grayscale(raster))
        }
    }

    /// Compose three red/green/blue bands into packed pixels.
    ///
    /// Samples are stored band-sequential, so one band is read completely
    /// before the next begins. Each widened value is narrowed to its 8-bit
    /// channel by truncation; no normalization is applied, band values are
    /// assumed to already be in the 0-255 range.
    pub fn rgb_bands(&self, raster: &RasterBuffer) -> RenderResult<Vec<u32>> {
        if raster.band_count() != 3 {
            return Err(RenderError::BandMismatch {
                actual: raster.band_count(),
            });
        }

        let pixel_count = raster.size().pixel_count();
        let mut reader =
            SampleReader::new(raster.data(), raster.byte_order(), raster.datatype());

        let mut read_band = || -> Vec<f64> {
            (0..pixel_count)
                .map(|_| reader.read_value().unwrap_or(0.0))
                .collect()
        };
        let red = read_band();
        let green = read_band();
        let blue = read_band();
        let pixels = (0..pixel_count)
            .map(|i| {
                0xff00_0000
                    | ((red[i] as u32) & 0xff) << 16
                    | ((green[i] as u32) & 0xff) << 8
                    | ((blue[i] as u32) & 0xff)
            })
            .collect();
        Ok(pixels)
    }

    /// Look every sample up in the loaded palette.
    ///
    /// The palette entry's stored ARGB is returned unchanged, alpha
    /// included. Requesting this without a loaded palette is a
    /// configuration error, surfaced immediately instead of silently
    /// falling back to grayscale.
    pub fn colormap(&self, raster: &RasterBuffer) -> RenderResult<Vec<u32>> {
        let map = self
            .color_map
            .as_ref()
            .ok_or(RasterError::MissingColorMap)?;

        let pixel_count = raster.size().pixel_count();
        let band = &raster.data()[raster.band_range(0)];
        let mut reader = SampleReader::new(band, raster.byte_order(), raster.datatype());

        let mut pixels = Vec::with_capacity(pixel_count);
        for _ in 0..pixel_count {
            let value = reader.read_value().unwrap_or(0.0);
            pixels.push(map.color_for_value(value));
        }
        Ok(pixels)
    }

    /// Normalize samples linearly into gray pixels.
    ///
    /// Scans the full population for its min/max first: raster values
    /// carry arbitrary physical units, so intensity maps to the observed
    /// range rather than any fixed one. A band with no spread (min ==
    /// max) renders as a constant gray instead of dividing by zero.
    pub fn grayscale(&self, raster: &RasterBuffer) -> Vec<u32> {
        let pixel_count = raster.size().pixel_count();
        let band = &raster.data()[raster.band_range(0)];
        let mut reader = SampleReader::new(band, raster.byte_order(), raster.datatype());

        let (min, max) = sample_range(&mut reader, pixel_count);
        debug!(min, max, "observed sample range");
        reader.rewind();

        let range = max - min;
        let mut pixels = Vec::with_capacity(pixel_count);
        for _ in 0..pixel_count {
            let value = reader.read_value().unwrap_or(min);
            let gray = if range == 0.0 {
                DEGENERATE_GRAY
            } else {
                clamp((256.0 * (value - min) / range).round(), 0.0, 255.0) as u32
            };
            pixels.push(0xff00_0000 | gray << 16 | gray << 8 | gray);
        }
        pixels
    }
}
