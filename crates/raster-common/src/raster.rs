//! Raster read queries and the typed buffers they produce.

use crate::datatype::{ByteOrder, DataType};
use crate::error::{RasterError, RasterResult};
use crate::rect::{Rect, Size};

/// A read request against a raster dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterQuery {
    /// Source window in source-pixel coordinates. Must lie inside the
    /// dataset bounds; the coordinator clips before building a query.
    pub window: Rect,

    /// Indices of the bands to read, in band order.
    pub bands: Vec<usize>,

    /// Size of the sample grid the caller wants back. When this differs
    /// from the window size, the dataset reader resamples before
    /// returning data.
    pub target_size: Size,

    /// Type to deliver the samples in, normally the promoted widest type
    /// across the requested bands.
    pub datatype: DataType,
}

impl RasterQuery {
    pub fn new(window: Rect, bands: Vec<usize>, target_size: Size, datatype: DataType) -> Self {
        Self {
            window,
            bands,
            target_size,
            datatype,
        }
    }

    /// Validate the query invariants against a dataset of `raster_size`.
    pub fn validate(&self, raster_size: Size) -> RasterResult<()> {
        if self.window.is_empty() || !self.window.within(raster_size.width, raster_size.height) {
            return Err(RasterError::InvalidWindow {
                window: self.window.to_string(),
                width: raster_size.width,
                height: raster_size.height,
            });
        }
        Ok(())
    }
}

/// Raw sample data returned by a dataset reader.
///
/// Samples are stored row-major and band-sequential: all of band 0, then
/// all of band 1, and so on. The buffer is exclusively owned by one render
/// pass: the sample-domain resampler replaces data and size in place, and
/// the pixel renderer only reads it.
#[derive(Debug, Clone)]
pub struct RasterBuffer {
    data: Vec<u8>,
    size: Size,
    band_count: usize,
    datatype: DataType,
    byte_order: ByteOrder,
}

impl RasterBuffer {
    pub fn new(
        data: Vec<u8>,
        size: Size,
        band_count: usize,
        datatype: DataType,
        byte_order: ByteOrder,
    ) -> Self {
        Self {
            data,
            size,
            band_count,
            datatype,
            byte_order,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Current logical dimension of the sample grid. Mutated in place by
    /// the sample-domain resampler.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn band_count(&self) -> usize {
        self.band_count
    }

    pub fn datatype(&self) -> DataType {
        self.datatype
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Byte length a complete buffer of the current dimension would have.
    /// Reads may legitimately return less; downstream decoding tolerates
    /// the truncation.
    pub fn expected_len(&self) -> usize {
        self.size.pixel_count() * self.band_count * self.datatype.size()
    }

    /// Byte range of one band's samples within the buffer.
    pub fn band_range(&self, band: usize) -> std::ops::Range<usize> {
        let band_len = self.size.pixel_count() * self.datatype.size();
        let start = (band * band_len).min(self.data.len());
        let end = (start + band_len).min(self.data.len());
        start..end
    }

    /// Replace the sample data and logical dimension after resampling.
    pub fn replace(&mut self, data: Vec<u8>, size: Size) {
        self.data = data;
        self.size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_validation_rejects_out_of_bounds_windows() {
        let query = RasterQuery::new(
            Rect::new(600, 0, 600, 600),
            vec![0],
            Size::square(256),
            DataType::Byte,
        );
        assert!(query.validate(Size::square(1000)).is_err());

        let inside = RasterQuery::new(
            Rect::new(600, 0, 400, 600),
            vec![0],
            Size::square(256),
            DataType::Byte,
        );
        assert!(inside.validate(Size::square(1000)).is_ok());
    }

    #[test]
    fn band_ranges_are_sequential() {
        let buffer = RasterBuffer::new(
            vec![0u8; 2 * 2 * 3],
            Size::square(2),
            3,
            DataType::Byte,
            ByteOrder::native(),
        );
        assert_eq!(buffer.band_range(0), 0..4);
        assert_eq!(buffer.band_range(1), 4..8);
        assert_eq!(buffer.band_range(2), 8..12);
    }

    #[test]
    fn band_range_clamps_to_truncated_data() {
        // A short read: only half of band 1 arrived.
        let buffer = RasterBuffer::new(
            vec![0u8; 6],
            Size::square(2),
            2,
            DataType::Byte,
            ByteOrder::native(),
        );
        assert_eq!(buffer.expected_len(), 8);
        assert_eq!(buffer.band_range(1), 4..6);
    }

    #[test]
    fn replace_updates_dimension() {
        let mut buffer = RasterBuffer::new(
            vec![0u8; 16],
            Size::square(4),
            1,
            DataType::Byte,
            ByteOrder::native(),
        );
        buffer.replace(vec![0u8; 4], Size::square(2));
        assert_eq!(buffer.size(), Size::square(2));
        assert_eq!(buffer.data().len(), 4);
    }
}
