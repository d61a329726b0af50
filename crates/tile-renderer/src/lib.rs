//! ARGB map tile rendering from typed raster datasets.
//!
//! This crate turns windows of a raster dataset into fixed-size tiles of
//! displayable pixels:
//!
//! ```text
//! TileAddress
//!      │
//!      ▼
//! TileRenderer::render_tile
//!      │
//!      ├─► classify coverage against the dataset bounds
//!      │         │
//!      │         ├─► none: fill-colored tile, no read issued
//!      │         │
//!      │         └─► full / partial: clip, read the window
//!      │
//!      ├─► resample (reader-side, pixel-domain or sample-domain)
//!      │
//!      └─► PixelRenderer: RGB composition / colormap / grayscale
//!               │
//!               ▼
//!        tile-sized ARGB buffer
//! ```
//!
//! Dataset handles are explicit and caller-owned; any number of datasets
//! may be open at once, and each render works against the handle it is
//! given. Renders are synchronous, self-contained units of work that an
//! external scheduler may run on any thread.

pub mod dataset;
pub mod error;
pub mod pixels;
pub mod png;
pub mod tile;

pub use dataset::RasterDataset;
pub use error::{RenderError, RenderResult};
pub use pixels::PixelRenderer;
pub use png::encode_png;
pub use tile::{ResampleStrategy, TileRenderer};
