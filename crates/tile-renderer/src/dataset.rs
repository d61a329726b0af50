//! The dataset reader boundary.

use raster_common::{Band, GeoTransform, RasterBuffer, RasterQuery, RasterResult, Size};

/// A handle to an open raster dataset.
///
/// Implementations wrap the native decoder that performs the actual
/// disk/format I/O. Handles are explicit and caller-owned: every render
/// operates on the handle passed to it, so multiple datasets can be open
/// concurrently. Native resources are released when the handle drops,
/// which also covers early-return paths such as uncovered tiles and
/// cancelled renders.
pub trait RasterDataset {
    /// Pixel dimensions (W, H) of the dataset.
    fn size(&self) -> Size;

    /// Ordered band metadata; count and types are fixed for the dataset's
    /// lifetime.
    fn bands(&self) -> &[Band];

    /// The dataset's affine geotransform. Validated at open time; see
    /// [`GeoTransform::validate`].
    fn geo_transform(&self) -> &GeoTransform;

    /// Read raw samples for `query.window`.
    ///
    /// Fails with a decode error when the window cannot be satisfied. When
    /// `query.target_size` differs from the window size, the returned
    /// buffer is already resampled to the target size; otherwise it is at
    /// the window's native size. The returned buffer belongs exclusively
    /// to the caller for the duration of one render pass.
    fn read(&self, query: &RasterQuery) -> RasterResult<RasterBuffer>;
}
