//! Single-pass sample statistics.

use crate::reader::SampleReader;

/// Scan up to `count` samples and return the observed (min, max).
///
/// Grayscale rendering needs this because display intensity is normalized
/// to the range the data actually covers; raster values carry arbitrary
/// physical units, there is no fixed range to assume.
///
/// min starts at `f64::MAX` and max at `f64::MIN`, so an empty or
/// constant sequence comes back degenerate (min == max) but well defined.
/// A sequence that truncates early is not an error: the partial statistics
/// are returned as-is.
pub fn sample_range(reader: &mut SampleReader<'_>, count: usize) -> (f64, f64) {
    let mut min = f64::MAX;
    let mut max = f64::MIN;

    for _ in 0..count {
        let Some(value) = reader.read_value() else {
            break;
        };
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }

    (min, max)
}
