//! Value-to-color mapping for single-band rasters.

use crate::error::{RasterError, RasterResult};
use serde::{Deserialize, Serialize};

/// One entry of a color map: samples from this entry's value up to the next
/// entry's value take this entry's color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Lower bound of the value range covered by this entry.
    pub value: f64,
    /// Packed ARGB color, alpha included.
    pub color: u32,
}

impl ColorEntry {
    pub fn new(value: f64, color: u32) -> Self {
        Self { value, color }
    }
}

/// An ordered value-to-ARGB table, immutable once built.
///
/// The table itself is opaque input here: parsing colormap files is the
/// job of an external collaborator, which hands over the entry list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMap {
    entries: Vec<ColorEntry>,
}

impl ColorMap {
    /// Build a color map from externally parsed entries.
    ///
    /// Entries are sorted by value; an empty table is a configuration error.
    pub fn new(mut entries: Vec<ColorEntry>) -> RasterResult<Self> {
        if entries.is_empty() {
            return Err(RasterError::invalid_config("colormap has no entries"));
        }
        entries.sort_by(|a, b| a.value.total_cmp(&b.value));
        Ok(Self { entries })
    }

    /// The color of the entry containing `value`: the last entry whose value
    /// is not above it. Values below the first entry clamp to the first
    /// entry's color. The stored ARGB is returned unchanged, alpha included.
    pub fn color_for_value(&self, value: f64) -> u32 {
        let idx = self
            .entries
            .partition_point(|e| e.value <= value)
            .saturating_sub(1);
        self.entries[idx].color
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }
}
