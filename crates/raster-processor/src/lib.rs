//! Sample decoding, statistics and resampling for raster tile rendering.
//!
//! This crate is the processing layer between a dataset reader's raw byte
//! buffers and the pixel renderer:
//!
//! - [`SampleReader`] decodes byte-ordered buffers into f64-widened samples
//!   according to the declared sample type.
//! - [`sample_range`] performs the single-pass min/max scan grayscale
//!   normalization depends on.
//! - [`resample`] resizes data between source and destination resolutions,
//!   either on rendered ARGB pixels or on raw typed samples, with a
//!   pluggable accelerated backend.

pub mod config;
pub mod reader;
pub mod resample;
pub mod stats;

pub use config::ProcessorConfig;
pub use reader::SampleReader;
pub use resample::{
    resample_pixels_bilinear, GridResampler, ImageResampler, RawResampler, ResampleMethod,
};
pub use stats::sample_range;
