//! Errors that occur during encoding

use thiserror::Error;

/// An error encountered while encoding a single path.
///
/// When packing a font these are reported per glyph: the glyph is kept with
/// an empty outline and packing continues.
#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum EncodeError {
    #[error("coordinate {value} does not fit in a 12.4 fixed point field")]
    CoordinateOutOfRange { value: f64 },

    #[error("encoded path is {len} bytes, longer than a 16-bit length can describe")]
    PathTooLong { len: usize },
}

/// An error that prevents a font from being packed at all.
#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Invalid unicode range '{0}'")]
    InvalidUnicodeRange(String),

    #[error("Invalid unicode range U+{begin:04X}-{end:04X}")]
    InvertedUnicodeRange { begin: u32, end: u32 },

    #[error("font metric '{name}' ({value}) does not fit in a 12.4 fixed point field")]
    MetricOutOfRange { name: &'static str, value: f64 },

    #[error("advance width {value} of U+{entry_point:04X} does not fit in a 12.4 fixed point field")]
    AdvanceOutOfRange { entry_point: u16, value: f64 },

    #[error("path data offset {offset} cannot be stored in a 16-bit field")]
    PathDataOverflow { offset: usize },

    #[error("glyph range ending at U+{end:04X} cannot be stored in a 16-bit field")]
    RangeEndOverflow { end: u32 },
}
