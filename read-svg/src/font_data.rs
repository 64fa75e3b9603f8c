//! raw font bytes

use std::ops::{Bound, RangeBounds};

use types::Scalar;

use crate::read::ReadError;

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice, that provides convenience methods
/// for parsing and validating that data.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    total_pos: u32,
    bytes: &'a [u8],
}

/// A cursor for reading sequential big-endian values out of [`FontData`].
///
/// Every read is bounds checked; reading past the end of the data is an
/// error.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData {
            total_pos: 0,
            bytes,
        }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The position of this data within the buffer it was split from.
    pub fn total_pos(&self) -> u32 {
        self.total_pos
    }

    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(|bytes| FontData {
            bytes,
            total_pos: self.total_pos.saturating_add(pos as u32),
        })
    }

    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let start = match range.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(i) => *i,
            Bound::Excluded(i) => i.saturating_add(1),
        };

        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        let total_pos = self.total_pos.saturating_add(start as u32);
        self.bytes
            .get(bounds)
            .map(|bytes| FontData { bytes, total_pos })
    }

    /// Read a scalar value out of the buffer at `offset`.
    pub fn read_at<T: Scalar>(&self, offset: usize) -> Result<T, ReadError> {
        let end = offset
            .checked_add(std::mem::size_of::<T::Raw>())
            .ok_or(ReadError::OutOfBounds)?;
        self.bytes
            .get(offset..end)
            .and_then(T::read)
            .ok_or(ReadError::OutOfBounds)
    }

    /// Return a new cursor positioned at the start of this data.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
        }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> Cursor<'a> {
    pub fn read<T: Scalar>(&mut self) -> Result<T, ReadError> {
        let temp = self.data.read_at(self.pos);
        self.pos = self.pos.saturating_add(std::mem::size_of::<T::Raw>());
        temp
    }

    /// Take the next `len` bytes, failing if fewer remain.
    pub fn read_bytes(&mut self, len: usize) -> Result<FontData<'a>, ReadError> {
        let end = self.pos.checked_add(len).ok_or(ReadError::OutOfBounds)?;
        let temp = self
            .data
            .slice(self.pos..end)
            .ok_or(ReadError::OutOfBounds);
        self.pos = end;
        temp
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl<'a> From<&'a [u8]> for FontData<'a> {
    fn from(src: &'a [u8]) -> FontData<'a> {
        FontData::new(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_scalars() {
        let bytes = [0x00, 0x01, 0x00, 0x00, 0x01, 0x00, 0xFF];
        let data = FontData::new(&bytes);
        assert_eq!(data.read_at::<u16>(0).unwrap(), 1);
        assert_eq!(data.read_at::<u32>(2).unwrap(), 0x100);
        assert!(matches!(
            data.read_at::<u16>(6),
            Err(ReadError::OutOfBounds)
        ));
        assert!(matches!(
            data.read_at::<u32>(usize::MAX),
            Err(ReadError::OutOfBounds)
        ));
    }

    #[test]
    fn cursor_advances() {
        let bytes = [0x00, 0x0A, 0xDE, 0xAD, 0xBE, 0xEF, 0x61, 0x62];
        let mut cursor = FontData::new(&bytes).cursor();
        assert_eq!(cursor.read::<u16>().unwrap(), 10);
        assert_eq!(cursor.read::<u32>().unwrap(), 0xDEADBEEF);
        assert_eq!(cursor.read_bytes(2).unwrap().as_bytes(), b"ab");
        assert!(cursor.read::<u16>().is_err());
    }

    #[test]
    fn cursor_past_end() {
        let bytes = [0u8; 4];
        let mut cursor = FontData::new(&bytes).cursor();
        assert!(cursor.read_bytes(5).is_err());
        assert!(cursor.read::<u8>().is_err());
    }

    #[test]
    fn slices_track_position() {
        let bytes = [0u8; 16];
        let data = FontData::new(&bytes).split_off(4).unwrap();
        assert_eq!(data.total_pos(), 4);
        let inner = data.slice(2..6).unwrap();
        assert_eq!(inner.total_pos(), 6);
        assert_eq!(inner.len(), 4);
        assert!(data.slice(10..14).is_none());
    }
}
