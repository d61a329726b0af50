//! Tile window coordination: from tile address to finished ARGB buffer.

use std::time::Instant;

use crate::dataset::RasterDataset;
use crate::error::RenderResult;
use crate::pixels::PixelRenderer;
use raster_common::{CancelFlag, DataType, RasterError, RasterQuery, Rect, Size, TileAddress};
use raster_processor::{resample_pixels_bilinear, ProcessorConfig, RawResampler};
use tracing::debug;

/// Fill used when the caller asks for an alpha-capable tile.
const TRANSPARENT: u32 = 0x0000_0000;

/// Number of native zoom levels offered above the calibrated base.
const NATIVE_ZOOM_RANGE: i32 = 5;

/// Where resampling between the read window and the tile happens.
pub enum ResampleStrategy {
    /// Ask the dataset reader for pre-resampled data of the target size.
    ReaderSide,
    /// Read at native size, render, then resize the ARGB pixels with the
    /// portable bilinear path. Always available.
    PixelDomain,
    /// Resize the raw typed samples with the given backend, then render.
    SampleDomain(Box<dyn RawResampler>),
}

/// Renders map tiles from a raster dataset.
///
/// One instance holds the per-dataset calibration (internal zoom), the
/// rendering policy and the resampling strategy. The dataset handle itself
/// is passed into every call, so one renderer setup can serve any number
/// of open datasets and no global handle state exists.
pub struct TileRenderer {
    renderer: PixelRenderer,
    config: ProcessorConfig,
    strategy: ResampleStrategy,
    internal_zoom: i32,
}

impl TileRenderer {
    pub fn new(renderer: PixelRenderer, config: ProcessorConfig) -> Self {
        Self {
            renderer,
            config,
            strategy: ResampleStrategy::PixelDomain,
            internal_zoom: 1,
        }
    }

    pub fn with_strategy(mut self, strategy: ResampleStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_internal_zoom(mut self, internal_zoom: i32) -> Self {
        self.internal_zoom = internal_zoom;
        self
    }

    pub fn internal_zoom(&self) -> i32 {
        self.internal_zoom
    }

    pub fn renderer_mut(&mut self) -> &mut PixelRenderer {
        &mut self.renderer
    }

    /// How many source pixels one tile pixel spans at `zoom`.
    ///
    /// The internal zoom is the calibration point where one tile pixel
    /// equals one source pixel; each zoom step away from it halves or
    /// doubles the span.
    pub fn scale_factor(&self, zoom: u8) -> f64 {
        2f64.powi(-(zoom as i32 - self.internal_zoom))
    }

    /// First zoom level at which the map fills the screen: log2 of the
    /// number of tiles that fit across it.
    pub fn start_zoom_level(tile_size: u32, screen_width: u32) -> u8 {
        let tiles_enter = screen_width as f64 / tile_size as f64;
        let zoom = tiles_enter.log2().round() as i64;
        zoom.clamp(1, u8::MAX as i64) as u8
    }

    /// Calibrate the internal zoom for a freshly opened dataset and return
    /// the maximum zoom level worth offering.
    ///
    /// A raster wider than the screen zooms out (raises the internal zoom)
    /// until it fits; a raster smaller than one tile zooms in (lowers it)
    /// until a tile's worth of pixels is available.
    pub fn calibrate(&mut self, tile_size: u32, screen_width: u32, raster_size: Size) -> u8 {
        let tiles_enter = raster_size.width / tile_size as usize;
        let native_zoom = if tiles_enter > 0 {
            (tiles_enter as f64).log2() as i32
        } else {
            0
        };
        let max_zoom = NATIVE_ZOOM_RANGE + native_zoom - 1;

        if raster_size.width > screen_width as usize {
            let mut available = raster_size.width;
            while available / 2 > screen_width as usize {
                self.internal_zoom += 1;
                available /= 2;
            }
        } else if raster_size.width < tile_size as usize
            || raster_size.height < tile_size as usize
        {
            let necessary = raster_size.width.min(raster_size.height);
            let mut desired = tile_size as usize;
            while desired > necessary {
                self.internal_zoom -= 1;
                desired /= 2;
            }
        }

        debug!(
            internal_zoom = self.internal_zoom,
            max_zoom, "calibrated for dataset"
        );
        max_zoom.clamp(1, u8::MAX as i32) as u8
    }

    /// Render one tile.
    ///
    /// `has_alpha` selects a transparent fill for uncovered area instead
    /// of the configured opaque fill color.
    pub fn render_tile<D: RasterDataset>(
        &self,
        dataset: &D,
        tile: &TileAddress,
        has_alpha: bool,
    ) -> RenderResult<Vec<u32>> {
        self.render_tile_cancellable(dataset, tile, has_alpha, &CancelFlag::new())
    }

    /// Render one tile, checking `cancel` between the read, resample and
    /// render phases. A cancelled render returns [`RasterError::Cancelled`]
    /// and produces no buffer.
    pub fn render_tile_cancellable<D: RasterDataset>(
        &self,
        dataset: &D,
        tile: &TileAddress,
        has_alpha: bool,
        cancel: &CancelFlag,
    ) -> RenderResult<Vec<u32>> {
        let started = Instant::now();
        dataset.geo_transform().validate()?;

        let tile_size = tile.tile_size as usize;
        let raster_size = dataset.size();
        let fill = if has_alpha {
            TRANSPARENT
        } else {
            self.config.fill_color
        };

        let scale = self.scale_factor(tile.zoom);
        let read_amount = ((tile.tile_size as f64 * scale) as i64).max(1);
        let window = Rect::new(
            tile.x * read_amount,
            tile.y * read_amount,
            read_amount as usize,
            read_amount as usize,
        );

        // Classify coverage. Clipping happens before any read is issued;
        // a window is never requested outside the dataset bounds.
        let Some(clipped) = window.clip_to(raster_size.width, raster_size.height) else {
            debug!(tile = %tile.cache_key(), %window, "tile not covered by dataset");
            return Ok(vec![fill; tile_size * tile_size]);
        };

        if cancel.is_cancelled() {
            return Err(RasterError::Cancelled.into());
        }

        let pixels = if clipped == window {
            debug!(tile = %tile.cache_key(), %window, "full coverage");
            self.read_and_render(dataset, window, Size::square(tile_size), cancel)?
        } else {
            // The covered sub-rectangle keeps the tile's scale factor:
            // its target size and its origin inside the tile are the
            // clipped extents mapped back into tile pixels.
            let covered_x = ((clipped.x - window.x) as f64 / scale) as usize;
            let covered_y = ((clipped.y - window.y) as f64 / scale) as usize;
            let target = Size::new(
                ((clipped.width as f64 / scale) as usize).max(1),
                ((clipped.height as f64 / scale) as usize).max(1),
            );
            debug!(
                tile = %tile.cache_key(), %window, %clipped,
                covered_x, covered_y, "partial coverage"
            );

            let covered = self.read_and_render(dataset, clipped, target, cancel)?;
            compose_bounds_tile(&covered, covered_x, covered_y, target, tile_size, fill)
        };

        debug!(
            tile = %tile.cache_key(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "tile rendered"
        );
        Ok(pixels)
    }

    /// Read a clipped window and produce `target`-sized ARGB pixels,
    /// resampling according to the configured strategy.
    fn read_and_render<D: RasterDataset>(
        &self,
        dataset: &D,
        window: Rect,
        target: Size,
        cancel: &CancelFlag,
    ) -> RenderResult<Vec<u32>> {
        let bands = dataset.bands();
        let datatype = DataType::promote(bands.iter().map(|b| b.datatype));
        let band_indices: Vec<usize> = (0..bands.len()).collect();

        let reader_side = matches!(self.strategy, ResampleStrategy::ReaderSide);
        let read_size = if reader_side { target } else { window.size() };
        let needs_resample = !reader_side && window.size() != target;

        let query = RasterQuery::new(window, band_indices, read_size, datatype);
        query.validate(dataset.size())?;
        let mut raster = dataset.read(&query)?;

        if cancel.is_cancelled() {
            return Err(RasterError::Cancelled.into());
        }

        match &self.strategy {
            ResampleStrategy::SampleDomain(resampler) if needs_resample => {
                resampler.resample(&mut raster, target, self.config.interpolation)?;
                if cancel.is_cancelled() {
                    return Err(RasterError::Cancelled.into());
                }
                self.renderer.render(&raster, bands)
            }
            ResampleStrategy::PixelDomain if needs_resample => {
                let rendered = self.renderer.render(&raster, bands)?;
                if cancel.is_cancelled() {
                    return Err(RasterError::Cancelled.into());
                }
                Ok(resample_pixels_bilinear(&rendered, raster.size(), target))
            }
            _ => self.renderer.render(&raster, bands),
        }
    }
}

/// Composite rendered pixels into a tile-sized buffer at the covered
/// origin; every position outside the covered area takes the fill color.
fn compose_bounds_tile(
    covered: &[u32],
    origin_x: usize,
    origin_y: usize,
    covered_size: Size,
    tile_size: usize,
    fill: u32,
) -> Vec<u32> {
    let mut pixels = vec![fill; tile_size * tile_size];
    let mut cursor = 0;

    for y in 0..tile_size {
        for x in 0..tile_size {
            if x >= origin_x
                && y >= origin_y
                && x < origin_x + covered_size.width
                && y < origin_y + covered_size.height
            {
                pixels[y * tile_size + x] = covered.get(cursor).copied().unwrap_or(fill);
                cursor += 1;
            }
        }
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> TileRenderer {
        TileRenderer::new(PixelRenderer::default(), ProcessorConfig::default())
    }

    #[test]
    fn scale_factor_halves_per_zoom_step() {
        let tiles = renderer().with_internal_zoom(3);
        assert_eq!(tiles.scale_factor(3), 1.0);
        assert_eq!(tiles.scale_factor(4), 0.5);
        assert_eq!(tiles.scale_factor(5), 0.25);
        assert_eq!(tiles.scale_factor(1), 4.0);
    }

    #[test]
    fn start_zoom_counts_tiles_across_the_screen() {
        assert_eq!(TileRenderer::start_zoom_level(256, 1080), 2);
        assert_eq!(TileRenderer::start_zoom_level(256, 256), 1);
    }

    #[test]
    fn calibration_zooms_out_for_large_rasters() {
        let mut tiles = renderer();
        tiles.calibrate(256, 1080, Size::new(8192, 8192));
        // 8192 halves to 2048 in two steps before fitting 1080.
        assert_eq!(tiles.internal_zoom(), 3);
    }

    #[test]
    fn calibration_zooms_in_for_tiny_rasters() {
        let mut tiles = renderer();
        tiles.calibrate(256, 1080, Size::new(100, 100));
        // Two halvings of 256 get under 100.
        assert_eq!(tiles.internal_zoom(), -1);
    }

    #[test]
    fn compose_places_covered_region_at_origin_offset() {
        let covered = vec![0xFF111111u32; 4];
        let tile = compose_bounds_tile(&covered, 1, 2, Size::new(2, 2), 4, 0xFFFFFFFF);

        let covered_positions = [2 * 4 + 1, 2 * 4 + 2, 3 * 4 + 1, 3 * 4 + 2];
        for (i, pixel) in tile.iter().enumerate() {
            if covered_positions.contains(&i) {
                assert_eq!(*pixel, 0xFF111111, "position {i}");
            } else {
                assert_eq!(*pixel, 0xFFFFFFFF, "position {i}");
            }
        }
    }

    #[test]
    fn compose_tolerates_short_covered_data() {
        let covered = vec![0xFF222222u32; 2];
        let tile = compose_bounds_tile(&covered, 0, 0, Size::new(2, 2), 2, 0xFF000000);
        assert_eq!(
            tile,
            vec![0xFF222222, 0xFF222222, 0xFF000000, 0xFF000000]
        );
    }
}
