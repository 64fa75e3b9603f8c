//! Errors that occur while reading or writing the SVG table

use std::str::Utf8Error;

use read_svg::ReadError;
use svg_gzip::{DecodeError, EncodeError};

/// An error that occurs while converting between bytes and an [`SvgTable`].
///
/// Document errors carry the index of the offending entry in the document
/// index.
///
/// [`SvgTable`]: crate::tables::svg::SvgTable
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The table or one of its documents extends past the end of the data.
    Read(ReadError),
    /// A (decompressed) document is not valid UTF-8.
    InvalidUtf8 { index: usize, error: Utf8Error },
    /// A document starts with the gzip magic number but is not a valid stream.
    Decompress { index: usize, error: DecodeError },
    Compress { index: usize, error: EncodeError },
    /// More documents than fit in the 16-bit `numEntries` field.
    TooManyDocuments(usize),
    /// A document would start past the range of a 32-bit offset.
    OffsetOverflow { index: usize },
}

impl From<ReadError> for Error {
    fn from(src: ReadError) -> Error {
        Error::Read(src)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Read(error) => write!(f, "Failed to read SVG table: {error}"),
            Error::InvalidUtf8 { index, error } => {
                write!(f, "SVG document {index} is not valid UTF-8: {error}")
            }
            Error::Decompress { index, error } => {
                write!(f, "Failed to decompress SVG document {index}: {error}")
            }
            Error::Compress { index, error } => {
                write!(f, "Failed to compress SVG document {index}: {error}")
            }
            Error::TooManyDocuments(count) => write!(
                f,
                "{count} SVG documents exceeds the maximum of {}",
                u16::MAX
            ),
            Error::OffsetOverflow { index } => {
                write!(f, "offset of SVG document {index} overflows 32 bits")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read(error) => Some(error),
            Error::InvalidUtf8 { error, .. } => Some(error),
            Error::Decompress { error, .. } => Some(error),
            Error::Compress { error, .. } => Some(error),
            Error::TooManyDocuments(_) | Error::OffsetOverflow { .. } => None,
        }
    }
}
