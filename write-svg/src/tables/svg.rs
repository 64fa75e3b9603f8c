//! The [SVG](https://learn.microsoft.com/en-us/typography/opentype/spec/svg) table

use std::borrow::Cow;

use font_types::GlyphId16;
use read_svg::{
    tables::svg::{Svg, SvgDocumentData, SvgDocumentRecord, HEADER_LEN, NUM_ENTRIES_LEN},
    FontData,
};
use svg_gzip::{Compression, Gzip};

use crate::{
    error::Error,
    table::{Field, FieldValue, Table},
};

pub use read_svg::tables::svg::TAG;

/// The [SVG](https://learn.microsoft.com/en-us/typography/opentype/spec/svg) table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvgTable {
    /// Table version. Always written as 0.
    pub version: u16,
    /// Offset to the document index, from the start of the table.
    pub offset_to_svg_doc_index: u32,
    /// Always written as 0.
    pub reserved: u32,
    /// The number of documents, as read.
    ///
    /// When writing, the length of `svg_documents` is used instead.
    pub num_entries: u16,
    pub svg_documents: Vec<SvgDocument>,
}

/// An SVG document and the glyphs it applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvgDocument {
    /// The first glyph ID for the range covered by this document.
    pub start_glyph_id: GlyphId16,
    /// The last glyph ID for the range covered by this document.
    pub end_glyph_id: GlyphId16,
    /// The decoded document text.
    pub data: String,
    /// Whether the document is stored gzip-compressed.
    pub compressed: bool,
}

/// Parse the table starting at `start` in `data`, decompressing with [`Gzip`].
pub fn parse_svg_table(data: &[u8], start: usize) -> Result<SvgTable, Error> {
    SvgTable::read(FontData::new(data), start)
}

/// Serialize `table`, compressing with [`Gzip`].
pub fn build_svg_table(table: &SvgTable) -> Result<Vec<u8>, Error> {
    table.compile().map(|table| table.encode())
}

impl SvgTable {
    /// Create a table containing `svg_documents`, with the document index
    /// directly after the header.
    pub fn new(svg_documents: Vec<SvgDocument>) -> Self {
        SvgTable {
            num_entries: u16::try_from(svg_documents.len()).unwrap_or(u16::MAX),
            svg_documents,
            ..Default::default()
        }
    }

    pub fn read(data: FontData, start: usize) -> Result<Self, Error> {
        Self::read_with(data, start, &Gzip::default())
    }

    /// Read the table, using `codec` to decompress gzipped documents.
    ///
    /// Any error in the table or in any single document fails the whole read.
    pub fn read_with(
        data: FontData,
        start: usize,
        codec: &impl Compression,
    ) -> Result<Self, Error> {
        let table = Svg::read_at(data, start)?;
        let svg_documents = table
            .documents()
            .enumerate()
            .map(|(index, item)| {
                let (record, doc) = item?;
                SvgDocument::decode(index, &record, doc, codec)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SvgTable {
            version: table.version(),
            offset_to_svg_doc_index: table.offset_to_svg_doc_index(),
            reserved: table.reserved(),
            num_entries: table.num_entries(),
            svg_documents,
        })
    }

    /// Describe this table as a list of fields, compressing with [`Gzip`].
    pub fn compile(&self) -> Result<Table, Error> {
        self.compile_with(&Gzip::default())
    }

    /// Describe this table as a list of fields.
    ///
    /// Every document is encoded up front so that offsets can be assigned;
    /// documents are packed contiguously, in order, after the index.
    pub fn compile_with(&self, codec: &impl Compression) -> Result<Table, Error> {
        let num_entries = u16::try_from(self.svg_documents.len())
            .map_err(|_| Error::TooManyDocuments(self.svg_documents.len()))?;
        let encoded = self
            .svg_documents
            .iter()
            .enumerate()
            .map(|(index, doc)| doc.encode(index, codec))
            .collect::<Result<Vec<_>, _>>()?;

        let mut fields = vec![
            Field::new("version", FieldValue::UShort(0)),
            Field::new(
                "offsetToSVGDocIndex",
                FieldValue::ULong(self.offset_to_svg_doc_index),
            ),
            Field::new("reserved", FieldValue::ULong(0)),
            Field::new("numEntries", FieldValue::UShort(num_entries)),
        ];

        // relative to the start of the index, which begins with numEntries
        let mut svg_doc_offset =
            (NUM_ENTRIES_LEN + encoded.len() * SvgDocumentRecord::RAW_BYTE_LEN) as u32;
        for (i, (doc, bytes)) in self.svg_documents.iter().zip(&encoded).enumerate() {
            let svg_doc_length =
                u32::try_from(bytes.len()).map_err(|_| Error::OffsetOverflow { index: i })?;
            log::trace!("document {i}: offset {svg_doc_offset}, length {svg_doc_length}");
            fields.extend([
                Field::new(
                    format!("startGlyphID_{i}"),
                    FieldValue::UShort(doc.start_glyph_id.to_u16()),
                ),
                Field::new(
                    format!("endGlyphID_{i}"),
                    FieldValue::UShort(doc.end_glyph_id.to_u16()),
                ),
                Field::new(format!("svgDocOffset_{i}"), FieldValue::ULong(svg_doc_offset)),
                Field::new(format!("svgDocLength_{i}"), FieldValue::ULong(svg_doc_length)),
            ]);
            svg_doc_offset = svg_doc_offset
                .checked_add(svg_doc_length)
                .ok_or(Error::OffsetOverflow { index: i })?;
        }

        fields.extend(encoded.into_iter().enumerate().map(|(i, bytes)| {
            Field::new(format!("svgDocument_{i}"), FieldValue::Literal(bytes))
        }));
        Ok(Table::new(TAG, fields))
    }

    /// The first document whose range contains `glyph_id`.
    pub fn document_for_glyph(&self, glyph_id: GlyphId16) -> Option<&SvgDocument> {
        self.svg_documents
            .iter()
            .find(|doc| (doc.start_glyph_id..=doc.end_glyph_id).contains(&glyph_id))
    }
}

impl Default for SvgTable {
    fn default() -> Self {
        SvgTable {
            version: 0,
            offset_to_svg_doc_index: HEADER_LEN as u32,
            reserved: 0,
            num_entries: 0,
            svg_documents: Vec::new(),
        }
    }
}

impl SvgDocument {
    pub fn new(
        start_glyph_id: GlyphId16,
        end_glyph_id: GlyphId16,
        data: impl Into<String>,
        compressed: bool,
    ) -> Self {
        SvgDocument {
            start_glyph_id,
            end_glyph_id,
            data: data.into(),
            compressed,
        }
    }

    fn decode(
        index: usize,
        record: &SvgDocumentRecord,
        doc: SvgDocumentData,
        codec: &impl Compression,
    ) -> Result<Self, Error> {
        let compressed = doc.is_compressed();
        let bytes: Cow<[u8]> = if compressed {
            log::debug!("decompressing document {index} ({} bytes)", doc.len());
            codec
                .decompress(doc.as_bytes())
                .map(Cow::Owned)
                .map_err(|error| Error::Decompress { index, error })?
        } else {
            Cow::Borrowed(doc.as_bytes())
        };
        let data = match bytes {
            Cow::Borrowed(bytes) => std::str::from_utf8(bytes).map(str::to_owned),
            Cow::Owned(bytes) => String::from_utf8(bytes).map_err(|e| e.utf8_error()),
        }
        .map_err(|error| Error::InvalidUtf8 { index, error })?;

        Ok(SvgDocument {
            start_glyph_id: record.start_glyph_id(),
            end_glyph_id: record.end_glyph_id(),
            data,
            compressed,
        })
    }

    /// The bytes stored in the table for this document.
    fn encode(&self, index: usize, codec: &impl Compression) -> Result<Vec<u8>, Error> {
        let bytes = self.data.as_bytes();
        if self.compressed {
            log::debug!("compressing document {index} ({} bytes)", bytes.len());
            codec
                .compress(bytes)
                .map_err(|error| Error::Compress { index, error })
        } else {
            Ok(bytes.to_vec())
        }
    }
}
