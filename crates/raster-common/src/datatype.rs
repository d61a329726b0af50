//! Sample types and byte order for raw raster data.

use serde::{Deserialize, Serialize};

/// The numeric type of the samples stored in a raster band.
///
/// The set of supported types is closed; every place that decodes, compares
/// or narrows samples matches exhaustively over this enum so that an
/// unhandled type is a compile error rather than a silent fallthrough.
///
/// The declaration order doubles as the width-promotion order: when a raster
/// carries bands of mixed types, reads are issued at the widest type so that
/// no band loses precision for the comparisons performed here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// 8-bit unsigned samples.
    #[default]
    Byte,
    /// 16-bit unsigned samples.
    UInt16,
    /// 16-bit signed samples.
    Int16,
    /// 32-bit signed samples.
    Int32,
    /// 64-bit signed samples.
    Int64,
    /// 32-bit floating point samples.
    Float32,
    /// 64-bit floating point samples.
    Float64,
}

impl DataType {
    /// Width of one sample of this type in bytes.
    pub fn size(&self) -> usize {
        match self {
            DataType::Byte => 1,
            DataType::UInt16 => 2,
            DataType::Int16 => 2,
            DataType::Int32 => 4,
            DataType::Int64 => 8,
            DataType::Float32 => 4,
            DataType::Float64 => 8,
        }
    }

    /// Pick the widest type across a set of band types.
    ///
    /// Returns [`DataType::Byte`] for an empty iterator, matching the
    /// narrowest possible raster.
    pub fn promote(types: impl IntoIterator<Item = DataType>) -> DataType {
        types
            .into_iter()
            .fold(DataType::Byte, |widest, dt| widest.max(dt))
    }

    /// Parse a lowercase type name, falling back to `Byte` for unknown input.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "byte" => DataType::Byte,
            "uint16" => DataType::UInt16,
            "int16" => DataType::Int16,
            "int32" => DataType::Int32,
            "int64" => DataType::Int64,
            "float32" => DataType::Float32,
            "float64" => DataType::Float64,
            _ => DataType::Byte,
        }
    }
}

/// Byte order of the raw sample bytes in a raster buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    /// The byte order of the machine this code runs on.
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }
}
