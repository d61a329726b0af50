//! Common types shared across the raster tile rendering crates.

pub mod band;
pub mod cancel;
pub mod colormap;
pub mod datatype;
pub mod error;
pub mod geo;
pub mod raster;
pub mod rect;
pub mod tile;

pub use band::{has_rgb_bands, Band, ColorInterp};
pub use cancel::CancelFlag;
pub use colormap::{ColorEntry, ColorMap};
pub use datatype::{ByteOrder, DataType};
pub use error::{RasterError, RasterResult};
pub use geo::GeoTransform;
pub use raster::{RasterBuffer, RasterQuery};
pub use rect::{Rect, Size};
pub use tile::TileAddress;
