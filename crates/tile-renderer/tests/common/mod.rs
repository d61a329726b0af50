//! Common test utilities for tile-renderer tests.
//!
//! Provides an in-memory dataset standing in for the native decoder, with
//! read-call accounting so tests can assert how the coordinator talks to
//! the reader boundary.

use std::cell::RefCell;

use raster_common::{
    Band, ByteOrder, DataType, GeoTransform, RasterBuffer, RasterError, RasterQuery,
    RasterResult, Size,
};
use raster_processor::{GridResampler, RawResampler, ResampleMethod};
use tile_renderer::RasterDataset;

/// An in-memory byte dataset with band-sequential sample planes.
pub struct MockDataset {
    size: Size,
    bands: Vec<Band>,
    geo_transform: GeoTransform,
    data: Vec<u8>,
    reads: RefCell<Vec<RasterQuery>>,
}

impl MockDataset {
    /// Single-band dataset whose sample at (x, y) is `value_fn(x, y)`.
    pub fn with_values(size: Size, value_fn: impl Fn(usize, usize) -> u8) -> Self {
        let mut data = Vec::with_capacity(size.pixel_count());
        for y in 0..size.height {
            for x in 0..size.width {
                data.push(value_fn(x, y));
            }
        }
        Self {
            size,
            bands: vec![Band::new("band_1", DataType::Byte)],
            geo_transform: GeoTransform::identity(),
            data,
            reads: RefCell::new(Vec::new()),
        }
    }

    /// Uniform single-band dataset.
    pub fn uniform(size: Size, value: u8) -> Self {
        Self::with_values(size, |_, _| value)
    }

    /// Three-band dataset with constant red/green/blue planes.
    pub fn rgb(size: Size, r: u8, g: u8, b: u8) -> Self {
        use raster_common::ColorInterp;

        let plane = size.pixel_count();
        let mut data = Vec::with_capacity(plane * 3);
        for value in [r, g, b] {
            data.extend(std::iter::repeat(value).take(plane));
        }
        Self {
            size,
            bands: vec![
                Band::new("red", DataType::Byte).with_color(ColorInterp::Red),
                Band::new("green", DataType::Byte).with_color(ColorInterp::Green),
                Band::new("blue", DataType::Byte).with_color(ColorInterp::Blue),
            ],
            geo_transform: GeoTransform::identity(),
            data,
            reads: RefCell::new(Vec::new()),
        }
    }

    pub fn with_geo_transform(mut self, geo_transform: GeoTransform) -> Self {
        self.geo_transform = geo_transform;
        self
    }

    /// Number of read calls issued so far.
    pub fn read_count(&self) -> usize {
        self.reads.borrow().len()
    }

    /// The queries the coordinator issued, in order.
    pub fn queries(&self) -> Vec<RasterQuery> {
        self.reads.borrow().clone()
    }
}

impl RasterDataset for MockDataset {
    fn size(&self) -> Size {
        self.size
    }

    fn bands(&self) -> &[Band] {
        &self.bands
    }

    fn geo_transform(&self) -> &GeoTransform {
        &self.geo_transform
    }

    fn read(&self, query: &RasterQuery) -> RasterResult<RasterBuffer> {
        self.reads.borrow_mut().push(query.clone());

        if !query.window.within(self.size.width, self.size.height) {
            return Err(RasterError::read_failed(format!(
                "window {} outside dataset {}",
                query.window, self.size
            )));
        }

        // Extract the native window per band, then resample reader-side
        // when the query asks for a different target size.
        let window = query.window;
        let plane = self.size.pixel_count();
        let mut native = Vec::with_capacity(window.width * window.height * query.bands.len());
        for &band in &query.bands {
            for y in 0..window.height {
                let row =
                    band * plane + (window.y as usize + y) * self.size.width + window.x as usize;
                native.extend_from_slice(&self.data[row..row + window.width]);
            }
        }

        let mut raster = RasterBuffer::new(
            native,
            window.size(),
            query.bands.len(),
            DataType::Byte,
            ByteOrder::native(),
        );
        if query.target_size != window.size() {
            GridResampler.resample(&mut raster, query.target_size, ResampleMethod::Bilinear)?;
        }
        Ok(raster)
    }
}
