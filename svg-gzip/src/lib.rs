//! Compression of embedded SVG documents.
//!
//! Documents in the [SVG] table may be stored either as plain UTF-8 text or
//! gzip-encoded ([RFC 1952]). This crate provides the [`Compression`] trait,
//! which is the only interface the table reader and writer use to handle the
//! compressed form, along with [`Gzip`], the default implementation.
//!
//! [SVG]: https://learn.microsoft.com/en-us/typography/opentype/spec/svg
//! [RFC 1952]: https://www.rfc-editor.org/rfc/rfc1952

#![forbid(unsafe_code)]

mod decode_error;
mod gzip;

pub use decode_error::{DecodeError, EncodeError};
pub use gzip::Gzip;

/// A compressor/decompressor pair operating on byte buffers.
///
/// Implementations must be able to decompress anything they compress.
pub trait Compression {
    /// Compress `data`, returning the encoded bytes.
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, EncodeError>;

    /// Decompress `encoded`, returning the original bytes.
    fn decompress(&self, encoded: &[u8]) -> Result<Vec<u8>, DecodeError>;
}

impl<T: Compression + ?Sized> Compression for &T {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, EncodeError> {
        (**self).compress(data)
    }

    fn decompress(&self, encoded: &[u8]) -> Result<Vec<u8>, DecodeError> {
        (**self).decompress(encoded)
    }
}
