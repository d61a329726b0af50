//! Map tile addressing.

use serde::{Deserialize, Serialize};

/// Address of one tile in a tiled map display.
///
/// Coordinates are signed: a map widget may request tiles outside the
/// dataset's pixel extent while panning, which the coordinator answers with
/// fill-colored tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileAddress {
    /// Tile column.
    pub x: i64,
    /// Tile row.
    pub y: i64,
    /// Zoom level.
    pub zoom: u8,
    /// Edge length of the tile in pixels.
    pub tile_size: u32,
}

impl TileAddress {
    pub fn new(x: i64, y: i64, zoom: u8, tile_size: u32) -> Self {
        Self {
            x,
            y,
            zoom,
            tile_size,
        }
    }

    /// Cache key string, for use by external tile caches.
    pub fn cache_key(&self) -> String {
        format!("{}/{}/{}@{}", self.zoom, self.x, self.y, self.tile_size)
    }
}
