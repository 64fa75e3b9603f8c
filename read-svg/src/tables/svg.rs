//! The [SVG](https://learn.microsoft.com/en-us/typography/opentype/spec/svg) table

use types::{GlyphId16, Tag};

use crate::{Cursor, FontData, FontRead, ReadError};

/// 'SVG '
pub const TAG: Tag = Tag::new(b"SVG ");

/// The prefix of every gzip member ([RFC 1952] section 2.3.1).
///
/// [RFC 1952]: https://www.rfc-editor.org/rfc/rfc1952#section-2.3.1
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Byte length of the fields preceding `numEntries`.
pub const HEADER_LEN: usize = 10;

/// Byte length of the `numEntries` field that opens the document index.
pub const NUM_ENTRIES_LEN: usize = 2;

/// Returns `true` if `bytes` starts with the gzip magic number.
///
/// This only sniffs the prefix; it says nothing about whether the rest of the
/// stream is valid.
pub fn is_gzipped(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// The [SVG](https://learn.microsoft.com/en-us/typography/opentype/spec/svg) table.
///
/// The index entries are read from immediately after the header; document
/// offsets are resolved relative to `offsetToSVGDocIndex`.
#[derive(Clone)]
pub struct Svg<'a> {
    data: FontData<'a>,
    version: u16,
    offset_to_svg_doc_index: u32,
    reserved: u32,
    num_entries: u16,
    records: FontData<'a>,
}

/// A single entry in the SVG document index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SvgDocumentRecord {
    start_glyph_id: GlyphId16,
    end_glyph_id: GlyphId16,
    svg_doc_offset: u32,
    svg_doc_length: u32,
}

/// The raw bytes of one SVG document.
///
/// Is not guaranteed to be valid and might be compressed.
#[derive(Clone, Copy, Debug)]
pub struct SvgDocumentData<'a>(FontData<'a>);

impl<'a> Svg<'a> {
    /// Read the table starting at `start` within `data`.
    pub fn read_at(data: FontData<'a>, start: usize) -> Result<Self, ReadError> {
        let data = data.split_off(start).ok_or(ReadError::OutOfBounds)?;
        let mut cursor = data.cursor();
        let version = cursor.read::<u16>()?;
        let offset_to_svg_doc_index = cursor.read::<u32>()?;
        let reserved = cursor.read::<u32>()?;
        let num_entries = cursor.read::<u16>()?;
        let records =
            cursor.read_bytes(num_entries as usize * SvgDocumentRecord::RAW_BYTE_LEN)?;
        Ok(Svg {
            data,
            version,
            offset_to_svg_doc_index,
            reserved,
            num_entries,
            records,
        })
    }

    /// Table version (starting at 0).
    pub fn version(&self) -> u16 {
        self.version
    }

    /// Offset to the document index, from the start of the table.
    pub fn offset_to_svg_doc_index(&self) -> u32 {
        self.offset_to_svg_doc_index
    }

    pub fn reserved(&self) -> u32 {
        self.reserved
    }

    pub fn num_entries(&self) -> u16 {
        self.num_entries
    }

    /// The bytes of the table, starting at the table's first byte.
    pub fn offset_data(&self) -> FontData<'a> {
        self.data
    }

    /// The document index entries, in stored order.
    pub fn document_records(&self) -> impl ExactSizeIterator<Item = SvgDocumentRecord> + 'a {
        self.records
            .as_bytes()
            .chunks_exact(SvgDocumentRecord::RAW_BYTE_LEN)
            .map(SvgDocumentRecord::from_chunk)
    }

    /// The index entry at `index`, if it exists.
    pub fn document_record(&self, index: usize) -> Option<SvgDocumentRecord> {
        let start = index.checked_mul(SvgDocumentRecord::RAW_BYTE_LEN)?;
        let end = start.checked_add(SvgDocumentRecord::RAW_BYTE_LEN)?;
        self.records
            .as_bytes()
            .get(start..end)
            .map(SvgDocumentRecord::from_chunk)
    }

    /// The raw bytes of the document described by `record`.
    pub fn document_data(
        &self,
        record: &SvgDocumentRecord,
    ) -> Result<SvgDocumentData<'a>, ReadError> {
        let start = (self.offset_to_svg_doc_index as usize)
            .checked_add(record.svg_doc_offset as usize)
            .ok_or(ReadError::OutOfBounds)?;
        let end = start
            .checked_add(record.svg_doc_length as usize)
            .ok_or(ReadError::OutOfBounds)?;
        self.data
            .slice(start..end)
            .map(SvgDocumentData)
            .ok_or(ReadError::OutOfBounds)
    }

    /// Iterate over every index entry along with its document bytes.
    pub fn documents(
        &self,
    ) -> impl Iterator<Item = Result<(SvgDocumentRecord, SvgDocumentData<'a>), ReadError>> + '_
    {
        self.document_records()
            .map(|record| self.document_data(&record).map(|doc| (record, doc)))
    }

    /// The document covering `glyph_id`, if any.
    ///
    /// Ranges are not required to be sorted or disjoint, so this is a linear
    /// scan that returns the first match in index order.
    pub fn glyph_data(
        &self,
        glyph_id: GlyphId16,
    ) -> Result<Option<SvgDocumentData<'a>>, ReadError> {
        self.document_records()
            .find(|record| record.contains(glyph_id))
            .map(|record| self.document_data(&record))
            .transpose()
    }
}

impl<'a> FontRead<'a> for Svg<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        Svg::read_at(data, 0)
    }
}

impl SvgDocumentRecord {
    /// The encoded size of a record.
    pub const RAW_BYTE_LEN: usize = 12;

    pub fn new(
        start_glyph_id: GlyphId16,
        end_glyph_id: GlyphId16,
        svg_doc_offset: u32,
        svg_doc_length: u32,
    ) -> Self {
        SvgDocumentRecord {
            start_glyph_id,
            end_glyph_id,
            svg_doc_offset,
            svg_doc_length,
        }
    }

    /// The first glyph ID for the range covered by this record.
    pub fn start_glyph_id(&self) -> GlyphId16 {
        self.start_glyph_id
    }

    /// The last glyph ID for the range covered by this record.
    pub fn end_glyph_id(&self) -> GlyphId16 {
        self.end_glyph_id
    }

    /// Offset from the beginning of the document index to an SVG document.
    pub fn svg_doc_offset(&self) -> u32 {
        self.svg_doc_offset
    }

    /// Length of the (possibly compressed) document data.
    pub fn svg_doc_length(&self) -> u32 {
        self.svg_doc_length
    }

    /// `true` if `glyph_id` falls in this record's inclusive range.
    ///
    /// A reversed range contains nothing.
    pub fn contains(&self, glyph_id: GlyphId16) -> bool {
        (self.start_glyph_id..=self.end_glyph_id).contains(&glyph_id)
    }

    fn read(cursor: &mut Cursor) -> Result<Self, ReadError> {
        Ok(SvgDocumentRecord {
            start_glyph_id: cursor.read()?,
            end_glyph_id: cursor.read()?,
            svg_doc_offset: cursor.read()?,
            svg_doc_length: cursor.read()?,
        })
    }

    // chunks are always RAW_BYTE_LEN long, so this can't fail
    fn from_chunk(chunk: &[u8]) -> Self {
        SvgDocumentRecord::read(&mut FontData::new(chunk).cursor()).unwrap_or_default()
    }
}

impl<'a> SvgDocumentData<'a> {
    /// Get the raw data of the SVG document.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `true` if the data begins with the gzip magic number.
    pub fn is_compressed(&self) -> bool {
        is_gzipped(self.as_bytes())
    }

    /// The document as text, if it is stored uncompressed.
    pub fn as_str(&self) -> Result<&'a str, ReadError> {
        if self.is_compressed() {
            return Err(ReadError::MalformedData("SVG document is compressed"));
        }
        std::str::from_utf8(self.as_bytes())
            .map_err(|_| ReadError::MalformedData("SVG document must be utf8"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use svg_test_data::{svg as test_data, BeBuffer};

    fn gid(raw: u16) -> GlyphId16 {
        GlyphId16::new(raw)
    }

    #[test]
    fn parse_simple() {
        let table = Svg::read(test_data::SIMPLE.into()).unwrap();
        assert_eq!(table.version(), 0);
        assert_eq!(table.offset_to_svg_doc_index(), 10);
        assert_eq!(table.reserved(), 0);
        assert_eq!(table.num_entries(), 2);

        let records = table.document_records().collect::<Vec<_>>();
        assert_eq!(
            records,
            vec![
                SvgDocumentRecord::new(gid(1), gid(1), 26, 6),
                SvgDocumentRecord::new(gid(2), gid(4), 32, 12),
            ]
        );

        let doc0 = table.document_data(&records[0]).unwrap();
        assert_eq!(doc0.as_str().unwrap(), "<svg/>");
        assert!(!doc0.is_compressed());
        let doc1 = table.document_data(&records[1]).unwrap();
        assert_eq!(doc1.as_str().unwrap(), "<svg>B</svg>");
    }

    #[test]
    fn parse_mixed() {
        let table = Svg::read(test_data::MIXED.into()).unwrap();
        let docs = table.documents().collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(docs.len(), 2);

        let (rec0, doc0) = docs[0];
        assert_eq!(rec0.svg_doc_offset(), 26);
        assert!(!doc0.is_compressed());

        let (rec1, doc1) = docs[1];
        assert_eq!(rec1.svg_doc_offset(), 32);
        assert_eq!(rec1.svg_doc_length(), 35);
        assert!(doc1.is_compressed());
        assert_eq!(&doc1.as_bytes()[..2], &GZIP_MAGIC);
        assert!(matches!(doc1.as_str(), Err(ReadError::MalformedData(_))));
    }

    #[test]
    fn reversed_range_passes_through() {
        let table = Svg::read(test_data::REVERSED_RANGE.into()).unwrap();
        let record = table.document_record(0).unwrap();
        assert_eq!(record.start_glyph_id(), gid(10));
        assert_eq!(record.end_glyph_id(), gid(2));
        assert!(!record.contains(gid(5)));
        assert_eq!(
            table.document_data(&record).unwrap().as_str().unwrap(),
            "<svg/>"
        );
        assert!(table.document_record(1).is_none());
    }

    #[test]
    fn document_past_end_is_an_error() {
        let table = Svg::read(test_data::TRUNCATED_DOCUMENT.into()).unwrap();
        let record = table.document_record(0).unwrap();
        assert_eq!(record.svg_doc_length(), 100);
        assert!(matches!(
            table.document_data(&record),
            Err(ReadError::OutOfBounds)
        ));
        assert!(table.documents().next().unwrap().is_err());
    }

    #[test]
    fn index_past_end_is_an_error() {
        assert!(matches!(
            Svg::read(test_data::TRUNCATED_INDEX.into()),
            Err(ReadError::OutOfBounds)
        ));
    }

    #[test]
    fn empty_and_short_data() {
        assert!(Svg::read(FontData::new(&[])).is_err());
        assert!(Svg::read(FontData::new(&test_data::SIMPLE[..11])).is_err());
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let table = Svg::read(test_data::INVALID_UTF8.into()).unwrap();
        let record = table.document_record(0).unwrap();
        let doc = table.document_data(&record).unwrap();
        assert_eq!(doc.as_bytes(), &[0x3C_u8, 0xFF, 0x3E]);
        assert!(matches!(doc.as_str(), Err(ReadError::MalformedData(_))));
    }

    #[test]
    fn read_at_nonzero_start() {
        let buf = BeBuffer::new()
            .extend([0xFFFF_u16, 0xFFFF, 0xFFFF])
            .push_bytes(test_data::SIMPLE);
        let table = Svg::read_at(FontData::new(&buf), 6).unwrap();
        assert_eq!(table.num_entries(), 2);
        assert_eq!(table.offset_data().total_pos(), 6);
        let doc = table.glyph_data(gid(3)).unwrap().unwrap();
        assert_eq!(doc.as_str().unwrap(), "<svg>B</svg>");

        assert!(Svg::read_at(FontData::new(&buf), buf.len() + 1).is_err());
    }

    #[test]
    fn glyph_lookup() {
        let table = Svg::read(test_data::MIXED.into()).unwrap();
        assert_eq!(
            table.glyph_data(gid(5)).unwrap().unwrap().as_str().unwrap(),
            "<svg/>"
        );
        for raw in 6..=10 {
            assert!(table.glyph_data(gid(raw)).unwrap().unwrap().is_compressed());
        }
        assert!(table.glyph_data(gid(4)).unwrap().is_none());
        assert!(table.glyph_data(gid(11)).unwrap().is_none());
    }

    #[test]
    fn document_offsets_are_relative_to_index() {
        // index at 16 (six bytes of padding after the header), entries still
        // follow the header directly
        let mut buf = BeBuffer::new()
            .push(0u16)
            .push_with_tag(16u32, "doc_index")
            .push(0u32)
            .push(1u16)
            .extend([1u16, 1])
            .extend([8u32, 2])
            .push_bytes(b"..........xx");
        let table = Svg::read(FontData::new(&buf)).unwrap();
        let record = table.document_record(0).unwrap();
        assert_eq!(table.document_data(&record).unwrap().as_bytes(), b"..");

        buf.write_at("doc_index", 26u32);
        let table = Svg::read(FontData::new(&buf)).unwrap();
        assert_eq!(table.document_data(&record).unwrap().as_bytes(), b"xx");
    }

    #[test]
    fn gzip_sniffing() {
        assert!(is_gzipped(&[0x1F, 0x8B]));
        assert!(is_gzipped(&[0x1F, 0x8B, 0x08]));
        assert!(!is_gzipped(&[0x1F]));
        assert!(!is_gzipped(&[]));
        assert!(!is_gzipped(b"<svg/>"));
    }
}
