//! Pixel-domain bilinear resampling on rendered ARGB arrays.

use rayon::prelude::*;
use raster_common::Size;

/// Minimum destination pixels to benefit from parallel row processing.
const PARALLEL_THRESHOLD: usize = 4096; // 64x64 or larger

/// Resize an ARGB pixel array from `src_size` to `dst_size` with bilinear
/// interpolation.
///
/// Equal sizes copy the input verbatim. Otherwise each destination pixel
/// maps into source space via `x_ratio = (srcW-1)/dstW` (and likewise for
/// y), and the four neighboring source pixels are blended per color
/// channel; neighbor indices clamp to the last row/column instead of
/// reading past the grid. Channels are truncated back to integers and
/// repacked with full alpha.
///
/// `src` must hold `src_size.pixel_count()` pixels.
pub fn resample_pixels_bilinear(src: &[u32], src_size: Size, dst_size: Size) -> Vec<u32> {
    debug_assert!(src.len() >= src_size.pixel_count());

    if src_size == dst_size {
        return src.to_vec();
    }
    if src_size.pixel_count() == 0 || dst_size.pixel_count() == 0 {
        return Vec::new();
    }

    let mut dst = vec![0u32; dst_size.pixel_count()];
    let x_ratio = (src_size.width - 1) as f32 / dst_size.width as f32;
    let y_ratio = (src_size.height - 1) as f32 / dst_size.height as f32;

    if dst.len() >= PARALLEL_THRESHOLD {
        dst.par_chunks_mut(dst_size.width)
            .enumerate()
            .for_each(|(row, out)| {
                resample_row(src, src_size, x_ratio, y_ratio, row, out);
            });
    } else {
        for (row, out) in dst.chunks_mut(dst_size.width).enumerate() {
            resample_row(src, src_size, x_ratio, y_ratio, row, out);
        }
    }

    dst
}

fn resample_row(
    src: &[u32],
    src_size: Size,
    x_ratio: f32,
    y_ratio: f32,
    row: usize,
    out: &mut [u32],
) {
    let y = (y_ratio * row as f32) as usize;
    let y_diff = y_ratio * row as f32 - y as f32;
    let y1 = (y + 1).min(src_size.height - 1);

    for (col, pixel) in out.iter_mut().enumerate() {
        let x = (x_ratio * col as f32) as usize;
        let x_diff = x_ratio * col as f32 - x as f32;
        let x1 = (x + 1).min(src_size.width - 1);

        let a = src[y * src_size.width + x];
        let b = src[y * src_size.width + x1];
        let c = src[y1 * src_size.width + x];
        let d = src[y1 * src_size.width + x1];

        // Y = A(1-xd)(1-yd) + B·xd(1-yd) + C(1-xd)·yd + D·xd·yd, evaluated
        // in lerp form so a uniform neighborhood reproduces its color
        // exactly under truncation.
        let blend = |shift: u32| -> u32 {
            let a_ch = ((a >> shift) & 0xff) as f32;
            let b_ch = ((b >> shift) & 0xff) as f32;
            let c_ch = ((c >> shift) & 0xff) as f32;
            let d_ch = ((d >> shift) & 0xff) as f32;
            let top = a_ch + (b_ch - a_ch) * x_diff;
            let bottom = c_ch + (d_ch - c_ch) * x_diff;
            let v = top + (bottom - top) * y_diff;
            v as u32 & 0xff
        };

        *pixel = 0xff00_0000 | blend(16) << 16 | blend(8) << 8 | blend(0);
    }
}
