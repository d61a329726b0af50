//! Portable sample-domain resampling on raw typed buffers.

use crate::reader::SampleReader;
use crate::resample::{RawResampler, ResampleMethod};
use raster_common::{ByteOrder, DataType, RasterBuffer, RasterResult, Size};
use tracing::debug;

/// Pure-Rust sample-domain resampler.
///
/// Works per band on f64-widened samples and re-encodes the result in the
/// buffer's own type and byte order, replacing the data and logical
/// dimension in place. Always available; backends that lean on native
/// primitives fall back to this for types they cannot handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridResampler;

impl RawResampler for GridResampler {
    fn resample(
        &self,
        raster: &mut RasterBuffer,
        target: Size,
        method: ResampleMethod,
    ) -> RasterResult<()> {
        let src_size = raster.size();
        if src_size == target || src_size.pixel_count() == 0 || target.pixel_count() == 0 {
            return Ok(());
        }

        debug!(
            from = %src_size,
            to = %target,
            ?method,
            bands = raster.band_count(),
            "resampling raw samples"
        );

        let datatype = raster.datatype();
        let order = raster.byte_order();
        let mut out =
            Vec::with_capacity(target.pixel_count() * raster.band_count() * datatype.size());

        for band in 0..raster.band_count() {
            let band_bytes = &raster.data()[raster.band_range(band)];
            let samples: Vec<f64> =
                SampleReader::new(band_bytes, order, datatype).collect();
            resample_band(&samples, src_size, target, method, |v| {
                encode_sample(&mut out, v, datatype, order)
            });
        }

        raster.replace(out, target);
        Ok(())
    }
}

/// Resample one band's samples, feeding each destination value to `emit`
/// in row-major order.
fn resample_band(
    samples: &[f64],
    src: Size,
    dst: Size,
    method: ResampleMethod,
    mut emit: impl FnMut(f64),
) {
    let x_ratio = (src.width - 1) as f64 / dst.width as f64;
    let y_ratio = (src.height - 1) as f64 / dst.height as f64;

    for row in 0..dst.height {
        let sy = y_ratio * row as f64;
        for col in 0..dst.width {
            let sx = x_ratio * col as f64;
            let value = match method {
                ResampleMethod::Nearest => nearest_sample(samples, src, sx, sy),
                ResampleMethod::Bilinear => bilinear_sample(samples, src, sx, sy),
                ResampleMethod::Bicubic => bicubic_sample(samples, src, sx, sy),
            };
            emit(value);
        }
    }
}

/// Fetch a sample with edge clamping; a truncated buffer reads as 0.
fn sample_at(samples: &[f64], size: Size, x: usize, y: usize) -> f64 {
    let x = x.min(size.width - 1);
    let y = y.min(size.height - 1);
    samples.get(y * size.width + x).copied().unwrap_or(0.0)
}

fn nearest_sample(samples: &[f64], size: Size, x: f64, y: f64) -> f64 {
    sample_at(samples, size, x.round() as usize, y.round() as usize)
}

fn bilinear_sample(samples: &[f64], size: Size, x: f64, y: f64) -> f64 {
    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let xd = x - x0 as f64;
    let yd = y - y0 as f64;

    let v00 = sample_at(samples, size, x0, y0);
    let v10 = sample_at(samples, size, x0 + 1, y0);
    let v01 = sample_at(samples, size, x0, y0 + 1);
    let v11 = sample_at(samples, size, x0 + 1, y0 + 1);

    // Lerp form of the bilinear weights; exact on constant neighborhoods.
    let top = v00 + (v10 - v00) * xd;
    let bottom = v01 + (v11 - v01) * xd;
    top + (bottom - top) * yd
}

fn bicubic_sample(samples: &[f64], size: Size, x: f64, y: f64) -> f64 {
    let xi = x.floor() as i64;
    let yi = y.floor() as i64;
    let xd = x - xi as f64;
    let yd = y - yi as f64;

    let mut rows = [0.0f64; 4];
    for (j, row_value) in rows.iter_mut().enumerate() {
        let py = (yi + j as i64 - 1).clamp(0, size.height as i64 - 1) as usize;
        let mut points = [0.0f64; 4];
        for (i, point) in points.iter_mut().enumerate() {
            let px = (xi + i as i64 - 1).clamp(0, size.width as i64 - 1) as usize;
            *point = sample_at(samples, size, px, py);
        }
        *row_value = cubic_1d(points[0], points[1], points[2], points[3], xd);
    }

    cubic_1d(rows[0], rows[1], rows[2], rows[3], yd)
}

/// 1D cubic interpolation using a Catmull-Rom spline.
fn cubic_1d(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;

    let a = -0.5 * p0 + 1.5 * p1 - 1.5 * p2 + 0.5 * p3;
    let b = p0 - 2.5 * p1 + 2.0 * p2 - 0.5 * p3;
    let c = -0.5 * p0 + 0.5 * p2;
    let d = p1;

    a * t3 + b * t2 + c * t + d
}

/// Append one sample to `out`, narrowed to `datatype` in `order`.
fn encode_sample(out: &mut Vec<u8>, value: f64, datatype: DataType, order: ByteOrder) {
    match (datatype, order) {
        (DataType::Byte, _) => out.push(value as u8),
        (DataType::UInt16, ByteOrder::BigEndian) => {
            out.extend_from_slice(&(value as u16).to_be_bytes())
        }
        (DataType::UInt16, ByteOrder::LittleEndian) => {
            out.extend_from_slice(&(value as u16).to_le_bytes())
        }
        (DataType::Int16, ByteOrder::BigEndian) => {
            out.extend_from_slice(&(value as i16).to_be_bytes())
        }
        (DataType::Int16, ByteOrder::LittleEndian) => {
            out.extend_from_slice(&(value as i16).to_le_bytes())
        }
        (DataType::Int32, ByteOrder::BigEndian) => {
            out.extend_from_slice(&(value as i32).to_be_bytes())
        }
        (DataType::Int32, ByteOrder::LittleEndian) => {
            out.extend_from_slice(&(value as i32).to_le_bytes())
        }
        (DataType::Int64, ByteOrder::BigEndian) => {
            out.extend_from_slice(&(value as i64).to_be_bytes())
        }
        (DataType::Int64, ByteOrder::LittleEndian) => {
            out.extend_from_slice(&(value as i64).to_le_bytes())
        }
        (DataType::Float32, ByteOrder::BigEndian) => {
            out.extend_from_slice(&(value as f32).to_be_bytes())
        }
        (DataType::Float32, ByteOrder::LittleEndian) => {
            out.extend_from_slice(&(value as f32).to_le_bytes())
        }
        (DataType::Float64, ByteOrder::BigEndian) => out.extend_from_slice(&value.to_be_bytes()),
        (DataType::Float64, ByteOrder::LittleEndian) => out.extend_from_slice(&value.to_le_bytes()),
    }
}
