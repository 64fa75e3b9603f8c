use std::io::{self, ErrorKind};

/// An error that occurs while decompressing a document.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The input is not a valid gzip stream.
    InvalidStream(ErrorKind),
    /// The decompressed data is larger than the configured maximum.
    MaxSizeExceeded,
    /// Bytes remain after the last gzip member.
    ExcessInputData,
}

/// An error that occurs while compressing a document.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeError(pub ErrorKind);

impl DecodeError {
    pub(crate) fn from_io_error(err: io::Error) -> Self {
        match err.kind() {
            ErrorKind::OutOfMemory => DecodeError::MaxSizeExceeded,
            kind => DecodeError::InvalidStream(kind),
        }
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeError::InvalidStream(kind) => {
                write!(f, "Gzip stream is invalid, decoding failed ({kind}).")
            }
            DecodeError::MaxSizeExceeded => write!(f, "Decompressed size greater than maximum."),
            DecodeError::ExcessInputData => write!(
                f,
                "Input gzip stream has additional data after the last member."
            ),
        }
    }
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Gzip encoding failed ({}).", self.0)
    }
}

impl std::error::Error for DecodeError {}
impl std::error::Error for EncodeError {}
