//! Sample-domain resampling backed by the `image` crate.

use crate::reader::SampleReader;
use crate::resample::{GridResampler, RawResampler, ResampleMethod};
use image::imageops::{self, FilterType};
use image::ImageBuffer;
use image::Luma;
use raster_common::{ByteOrder, DataType, RasterBuffer, RasterError, RasterResult, Size};
use tracing::debug;

/// Resampler that hands 8- and 16-bit bands to `image::imageops::resize`.
///
/// Other sample types, and buffers that arrived truncated, go through the
/// portable [`GridResampler`] instead. Filter phase differs slightly from
/// the portable path, so agreement is within tolerance, not bit-exact.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageResampler;

impl RawResampler for ImageResampler {
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
        if raster.data().len() < raster.expected_len() {
            // Partial read; the portable path tolerates missing samples.
            return GridResampler.resample(raster, target, method);
        }

        match raster.datatype() {
            DataType::Byte => resize_bands_u8(raster, target, filter_for(method)),
            DataType::UInt16 => resize_bands_u16(raster, target, filter_for(method)),
            _ => {
                debug!(datatype = ?raster.datatype(), "no native resize for type");
                GridResampler.resample(raster, target, method)
            }
        }
    }
}

fn filter_for(method: ResampleMethod) -> FilterType {
    match method {
        ResampleMethod::Nearest => FilterType::Nearest,
        ResampleMethod::Bilinear => FilterType::Triangle,
        ResampleMethod::Bicubic => FilterType::CatmullRom,
    }
}

fn resize_bands_u8(
    raster: &mut RasterBuffer,
    target: Size,
    filter: FilterType,
) -> RasterResult<()> {
    let src_size = raster.size();
    let mut out = Vec::with_capacity(target.pixel_count() * raster.band_count());

    for band in 0..raster.band_count() {
        let band_bytes = raster.data()[raster.band_range(band)].to_vec();
        let img: ImageBuffer<Luma<u8>, Vec<u8>> =
            ImageBuffer::from_raw(src_size.width as u32, src_size.height as u32, band_bytes)
                .ok_or_else(|| {
                    RasterError::read_failed("band byte count does not match its dimension")
                })?;
        let resized = imageops::resize(&img, target.width as u32, target.height as u32, filter);
        out.extend_from_slice(resized.as_raw());
    }

    raster.replace(out, target);
    Ok(())
}

fn resize_bands_u16(
    raster: &mut RasterBuffer,
    target: Size,
    filter: FilterType,
) -> RasterResult<()> {
    let src_size = raster.size();
    let order = raster.byte_order();
    let mut out =
        Vec::with_capacity(target.pixel_count() * raster.band_count() * DataType::UInt16.size());

    for band in 0..raster.band_count() {
        let band_bytes = &raster.data()[raster.band_range(band)];
        let samples: Vec<u16> = SampleReader::new(band_bytes, order, DataType::UInt16)
            .map(|v| v as u16)
            .collect();
        let img: ImageBuffer<Luma<u16>, Vec<u16>> =
            ImageBuffer::from_raw(src_size.width as u32, src_size.height as u32, samples)
                .ok_or_else(|| {
                    RasterError::read_failed("band sample count does not match its dimension")
                })?;
        let resized = imageops::resize(&img, target.width as u32, target.height as u32, filter);
        for value in resized.as_raw() {
            match order {
                ByteOrder::BigEndian => out.extend_from_slice(&value.to_be_bytes()),
                ByteOrder::LittleEndian => out.extend_from_slice(&value.to_le_bytes()),
            }
        }
    }

    raster.replace(out, target);
    Ok(())
}
