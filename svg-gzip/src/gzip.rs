use std::io::{self, Write};

use flate2::{bufread::GzDecoder, write::GzEncoder};

use crate::{Compression, DecodeError, EncodeError};

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];
const DEFAULT_LEVEL: u32 = 6;
const MAX_LEVEL: u32 = 9;

/// Gzip compression, backed by [flate2].
///
/// Decompression accepts any number of concatenated gzip members and
/// concatenates their output. Bytes after the last member that do not start
/// another member are an error.
///
/// The encoder writes a zeroed modification time, so compressing the same
/// input twice produces identical bytes.
///
/// [flate2]: https://docs.rs/flate2
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gzip {
    level: u32,
    max_decompressed_len: Option<usize>,
}

impl Gzip {
    /// Create a new codec with the default compression level and no limit
    /// on decompressed size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compression level, from 0 (store only) to 9 (best).
    ///
    /// Values above 9 are clamped.
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level.min(MAX_LEVEL);
        self
    }

    /// Fail decompression of any stream that expands past `max_len` bytes.
    pub fn with_max_decompressed_len(mut self, max_len: usize) -> Self {
        self.max_decompressed_len = Some(max_len);
        self
    }

    /// The configured compression level.
    pub fn level(&self) -> u32 {
        self.level
    }
}

impl Default for Gzip {
    fn default() -> Self {
        Gzip {
            level: DEFAULT_LEVEL,
            max_decompressed_len: None,
        }
    }
}

impl Compression for Gzip {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, EncodeError> {
        let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::new(self.level));
        encoder
            .write_all(data)
            .and_then(|_| encoder.finish())
            .map_err(|e| EncodeError(e.kind()))
    }

    fn decompress(&self, encoded: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let limit = self.max_decompressed_len.unwrap_or(usize::MAX);
        let mut output = BoundedOutput(Vec::new(), limit);
        let mut input = encoded;
        loop {
            // the bufread decoder consumes exactly one member from `input`
            io::copy(&mut GzDecoder::new(&mut input), &mut output)
                .map_err(DecodeError::from_io_error)?;
            if input.is_empty() {
                return Ok(output.0);
            }
            if !input.starts_with(&GZIP_MAGIC) {
                return Err(DecodeError::ExcessInputData);
            }
        }
    }
}

struct BoundedOutput(Vec<u8>, usize);

impl Write for BoundedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.1 < buf.len() {
            // hit the write bound, return an error.
            return Err(io::Error::new(
                io::ErrorKind::OutOfMemory,
                "Max output size reached.",
            ));
        }
        self.1 -= buf.len();
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\"><rect width=\"10\"/></svg>";

    #[test]
    fn compressed_output_has_gzip_magic() {
        let encoded = Gzip::new().compress(DOC.as_bytes()).unwrap();
        assert_eq!(&encoded[..2], &[0x1F, 0x8B]);
    }

    #[test]
    fn decompress_compressed() {
        let gzip = Gzip::new();
        let encoded = gzip.compress(DOC.as_bytes()).unwrap();
        assert_eq!(gzip.decompress(&encoded).unwrap(), DOC.as_bytes());
    }

    #[test]
    fn output_is_deterministic() {
        let gzip = Gzip::new().with_level(9);
        assert_eq!(
            gzip.compress(DOC.as_bytes()).unwrap(),
            gzip.compress(DOC.as_bytes()).unwrap()
        );
    }

    #[test]
    fn level_is_clamped() {
        assert_eq!(Gzip::new().with_level(42).level(), 9);
        // level 0 still produces a valid stream
        let stored = Gzip::new().with_level(0);
        let encoded = stored.compress(DOC.as_bytes()).unwrap();
        assert_eq!(stored.decompress(&encoded).unwrap(), DOC.as_bytes());
    }

    #[test]
    fn decompress_too_little_output() {
        let encoded = Gzip::new().compress(DOC.as_bytes()).unwrap();
        let limited = Gzip::new().with_max_decompressed_len(DOC.len() - 1);
        assert_eq!(
            limited.decompress(&encoded),
            Err(DecodeError::MaxSizeExceeded)
        );
    }

    #[test]
    fn decompress_exact_limit() {
        let encoded = Gzip::new().compress(DOC.as_bytes()).unwrap();
        let limited = Gzip::new().with_max_decompressed_len(DOC.len());
        assert_eq!(limited.decompress(&encoded).unwrap(), DOC.as_bytes());
    }

    #[test]
    fn decompress_input_missing() {
        let encoded = Gzip::new().compress(DOC.as_bytes()).unwrap();
        let truncated = &encoded[..encoded.len() - 4];
        assert!(matches!(
            Gzip::new().decompress(truncated),
            Err(DecodeError::InvalidStream(_))
        ));
    }

    #[test]
    fn decompress_multiple_members() {
        let gzip = Gzip::new();
        let encoded = [
            gzip.compress(b"<svg>").unwrap(),
            gzip.compress(b"<rect/>").unwrap(),
            gzip.compress(b"</svg>").unwrap(),
        ]
        .concat();
        assert_eq!(gzip.decompress(&encoded).unwrap(), b"<svg><rect/></svg>");
    }

    #[test]
    fn decompress_limit_spans_members() {
        let gzip = Gzip::new();
        let encoded = [
            gzip.compress(b"<svg>").unwrap(),
            gzip.compress(b"</svg>").unwrap(),
        ]
        .concat();
        let limited = Gzip::new().with_max_decompressed_len(8);
        assert_eq!(
            limited.decompress(&encoded),
            Err(DecodeError::MaxSizeExceeded)
        );
    }

    #[test]
    fn decompress_excess_input() {
        let mut encoded = Gzip::new().compress(DOC.as_bytes()).unwrap();
        encoded.extend_from_slice(b"GARBAGE");
        assert_eq!(
            Gzip::new().decompress(&encoded),
            Err(DecodeError::ExcessInputData)
        );
    }

    #[test]
    fn decompress_truncated_second_member() {
        let gzip = Gzip::new();
        let mut encoded = gzip.compress(b"<svg>").unwrap();
        let second = gzip.compress(b"</svg>").unwrap();
        encoded.extend_from_slice(&second[..second.len() - 4]);
        assert!(matches!(
            gzip.decompress(&encoded),
            Err(DecodeError::InvalidStream(_))
        ));
    }

    #[test]
    fn decompress_invalid() {
        // correct magic, nonsense after it
        let garbage = [0x1F, 0x8B, 0xFF, 0xFF, 0xFF, 0xFF];
        assert!(matches!(
            Gzip::new().decompress(&garbage),
            Err(DecodeError::InvalidStream(_))
        ));
    }
}
