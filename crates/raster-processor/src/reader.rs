//! Typed decoding of raw sample buffers.

use raster_common::{ByteOrder, DataType};

/// Decodes a byte buffer into a sequence of numeric samples.
///
/// Samples are read sequentially at an internal cursor and widened to f64
/// so downstream math is uniform across all sample types. The sequence is
/// lazy and finite: once fewer bytes remain than the declared type needs,
/// [`read_value`](Self::read_value) returns `None`. Truncation is the
/// caller's concern — hard raster boundaries are pre-validated with
/// [`remaining`](Self::remaining), partial reads simply end early.
///
/// One reader owns one cursor; concurrent renders each create their own.
#[derive(Debug)]
pub struct SampleReader<'a> {
    data: &'a [u8],
    order: ByteOrder,
    datatype: DataType,
    pos: usize,
}

impl<'a> SampleReader<'a> {
    pub fn new(data: &'a [u8], order: ByteOrder, datatype: DataType) -> Self {
        Self {
            data,
            order,
            datatype,
            pos: 0,
        }
    }

    /// Decode the next sample, widened to f64. `None` at end of data.
    pub fn read_value(&mut self) -> Option<f64> {
        let value = match self.datatype {
            DataType::Byte => self.take::<1>()?[0] as f64,
            DataType::UInt16 => {
                let raw = self.take::<2>()?;
                match self.order {
                    ByteOrder::BigEndian => u16::from_be_bytes(raw) as f64,
                    ByteOrder::LittleEndian => u16::from_le_bytes(raw) as f64,
                }
            }
            DataType::Int16 => {
                let raw = self.take::<2>()?;
                match self.order {
                    ByteOrder::BigEndian => i16::from_be_bytes(raw) as f64,
                    ByteOrder::LittleEndian => i16::from_le_bytes(raw) as f64,
                }
            }
            DataType::Int32 => {
                let raw = self.take::<4>()?;
                match self.order {
                    ByteOrder::BigEndian => i32::from_be_bytes(raw) as f64,
                    ByteOrder::LittleEndian => i32::from_le_bytes(raw) as f64,
                }
            }
            DataType::Int64 => {
                let raw = self.take::<8>()?;
                match self.order {
                    ByteOrder::BigEndian => i64::from_be_bytes(raw) as f64,
                    ByteOrder::LittleEndian => i64::from_le_bytes(raw) as f64,
                }
            }
            DataType::Float32 => {
                let raw = self.take::<4>()?;
                match self.order {
                    ByteOrder::BigEndian => f32::from_be_bytes(raw) as f64,
                    ByteOrder::LittleEndian => f32::from_le_bytes(raw) as f64,
                }
            }
            DataType::Float64 => {
                let raw = self.take::<8>()?;
                match self.order {
                    ByteOrder::BigEndian => f64::from_be_bytes(raw),
                    ByteOrder::LittleEndian => f64::from_le_bytes(raw),
                }
            }
        };
        Some(value)
    }

    /// Reset the cursor to the start of the buffer. Grayscale rendering
    /// scans the data twice: once for min/max, once for pixels.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// Number of whole samples left before the cursor hits end of data.
    pub fn remaining(&self) -> usize {
        (self.data.len() - self.pos) / self.datatype.size()
    }

    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let end = self.pos.checked_add(N)?;
        let raw = self.data.get(self.pos..end)?;
        self.pos = end;
        raw.try_into().ok()
    }
}

impl Iterator for SampleReader<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.read_value()
    }
}
