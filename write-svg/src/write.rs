use font_types::{GlyphId16, Tag};

/// A type that that can be written out as part of a font file.
///
/// Implementations write their big-endian encoding, in field order, into
/// the provided [TableWriter].
pub trait FontWrite {
    /// Write our data into this [TableWriter].
    fn write_into(&self, writer: &mut TableWriter);
}

/// A growable buffer that tables are serialized into.
#[derive(Debug, Default)]
pub struct TableWriter {
    bytes: Vec<u8>,
}

/// Serialize a table, returning the encoded bytes.
pub fn dump_table<T: FontWrite + ?Sized>(table: &T) -> Vec<u8> {
    let mut writer = TableWriter::default();
    table.write_into(&mut writer);
    writer.into_data()
}

impl TableWriter {
    /// Write raw bytes into this table.
    ///
    /// The caller is responsible for ensuring bytes are in big-endian order.
    #[inline]
    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes)
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Finish writing, returning the bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.bytes
    }
}

macro_rules! write_be_bytes {
    ($ty:ty) => {
        impl FontWrite for $ty {
            #[inline]
            fn write_into(&self, writer: &mut TableWriter) {
                writer.write_slice(&self.to_be_bytes())
            }
        }
    };
}

write_be_bytes!(u8);
write_be_bytes!(u16);
write_be_bytes!(u32);
write_be_bytes!(Tag);
write_be_bytes!(GlyphId16);

impl<T: FontWrite> FontWrite for [T] {
    fn write_into(&self, writer: &mut TableWriter) {
        self.iter().for_each(|item| item.write_into(writer))
    }
}

impl<T: FontWrite> FontWrite for Vec<T> {
    fn write_into(&self, writer: &mut TableWriter) {
        self.as_slice().write_into(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_endian_scalars() {
        let mut writer = TableWriter::default();
        0x0102_u16.write_into(&mut writer);
        0x0304_0506_u32.write_into(&mut writer);
        GlyphId16::new(7).write_into(&mut writer);
        Tag::new(b"SVG ").write_into(&mut writer);
        assert_eq!(writer.len(), 12);
        assert_eq!(
            writer.into_data(),
            [1, 2, 3, 4, 5, 6, 0, 7, b'S', b'V', b'G', b' ']
        );
    }

    #[test]
    fn slices_write_each_item() {
        let bytes = dump_table([0xAB_u8, 0xCD].as_slice());
        assert_eq!(bytes, [0xAB, 0xCD]);
        let words = dump_table(&vec![1u16, 2]);
        assert_eq!(words, [0, 1, 0, 2]);
    }
}
