//! Band metadata for multi-band rasters.

use crate::colormap::ColorMap;
use crate::datatype::DataType;
use serde::{Deserialize, Serialize};

/// Color interpretation of a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorInterp {
    #[default]
    Undefined,
    Gray,
    Red,
    Green,
    Blue,
    Other,
}

/// One component of a raster dataset.
///
/// A dataset's band list is ordered, and its count and types are fixed for
/// the dataset's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Name of the band.
    pub name: String,

    /// Numeric type of the data stored in the band.
    pub datatype: DataType,

    /// Color interpretation of the band.
    pub color: ColorInterp,

    /// Palette for this band, if one was loaded for the dataset.
    pub colormap: Option<ColorMap>,

    /// Sentinel value meaning "no measurement here", if the band has one.
    pub nodata: Option<f64>,
}

impl Band {
    pub fn new(name: impl Into<String>, datatype: DataType) -> Self {
        Self {
            name: name.into(),
            datatype,
            color: ColorInterp::Undefined,
            colormap: None,
            nodata: None,
        }
    }

    pub fn with_color(mut self, color: ColorInterp) -> Self {
        self.color = color;
        self
    }

    pub fn with_colormap(mut self, colormap: ColorMap) -> Self {
        self.colormap = Some(colormap);
        self
    }

    pub fn with_nodata(mut self, nodata: f64) -> Self {
        self.nodata = Some(nodata);
        self
    }
}

/// True iff the bands are exactly red, green and blue, in that order.
///
/// This is the precondition for the RGB composition rendering strategy.
pub fn has_rgb_bands(bands: &[Band]) -> bool {
    bands.len() == 3
        && bands[0].color == ColorInterp::Red
        && bands[1].color == ColorInterp::Green
        && bands[2].color == ColorInterp::Blue
}
