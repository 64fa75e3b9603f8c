//! hand-assembled `SVG ` tables

/// Two plain text documents, index at the standard offset.
#[rustfmt::skip]
pub static SIMPLE: &[u8] = &[
    0x00, 0x00,             // version 0
    0x00, 0x00, 0x00, 0x0A, // offsetToSVGDocIndex 10
    0x00, 0x00, 0x00, 0x00, // reserved
    0x00, 0x02,             // numEntries 2
    // entry 0
    0x00, 0x01,             // startGlyphID 1
    0x00, 0x01,             // endGlyphID 1
    0x00, 0x00, 0x00, 0x1A, // svgDocOffset 26
    0x00, 0x00, 0x00, 0x06, // svgDocLength 6
    // entry 1
    0x00, 0x02,             // startGlyphID 2
    0x00, 0x04,             // endGlyphID 4
    0x00, 0x00, 0x00, 0x20, // svgDocOffset 32
    0x00, 0x00, 0x00, 0x0C, // svgDocLength 12
    // document 0: "<svg/>"
    0x3C, 0x73, 0x76, 0x67, 0x2F, 0x3E,
    // document 1: "<svg>B</svg>"
    0x3C, 0x73, 0x76, 0x67, 0x3E, 0x42, 0x3C, 0x2F, 0x73, 0x76, 0x67, 0x3E,
];

/// A plain document for glyph 5 followed by a gzipped document for glyphs 6..=10.
///
/// The gzip member holds a single stored (uncompressed) deflate block, so the
/// payload is readable in the dump below.
#[rustfmt::skip]
pub static MIXED: &[u8] = &[
    0x00, 0x00,             // version 0
    0x00, 0x00, 0x00, 0x0A, // offsetToSVGDocIndex 10
    0x00, 0x00, 0x00, 0x00, // reserved
    0x00, 0x02,             // numEntries 2
    // entry 0
    0x00, 0x05,             // startGlyphID 5
    0x00, 0x05,             // endGlyphID 5
    0x00, 0x00, 0x00, 0x1A, // svgDocOffset 26
    0x00, 0x00, 0x00, 0x06, // svgDocLength 6
    // entry 1
    0x00, 0x06,             // startGlyphID 6
    0x00, 0x0A,             // endGlyphID 10
    0x00, 0x00, 0x00, 0x20, // svgDocOffset 32
    0x00, 0x00, 0x00, 0x23, // svgDocLength 35
    // document 0: "<svg/>"
    0x3C, 0x73, 0x76, 0x67, 0x2F, 0x3E,
    // document 1: gzip
    0x1F, 0x8B,             // magic
    0x08,                   // method: deflate
    0x00,                   // flags
    0x00, 0x00, 0x00, 0x00, // mtime
    0x04,                   // extra flags
    0x03,                   // os
    0x01,                   // final stored block
    0x0C, 0x00, 0xF3, 0xFF, // len 12, nlen
    0x3C, 0x73, 0x76, 0x67, 0x3E, 0x42, 0x3C, 0x2F, 0x73, 0x76, 0x67, 0x3E, // "<svg>B</svg>"
    0xED, 0x31, 0xB2, 0x7F, // crc32
    0x0C, 0x00, 0x00, 0x00, // isize 12
];

/// An index entry whose range is reversed (start > end).
#[rustfmt::skip]
pub static REVERSED_RANGE: &[u8] = &[
    0x00, 0x00,             // version 0
    0x00, 0x00, 0x00, 0x0A, // offsetToSVGDocIndex 10
    0x00, 0x00, 0x00, 0x00, // reserved
    0x00, 0x01,             // numEntries 1
    0x00, 0x0A,             // startGlyphID 10
    0x00, 0x02,             // endGlyphID 2
    0x00, 0x00, 0x00, 0x0E, // svgDocOffset 14
    0x00, 0x00, 0x00, 0x06, // svgDocLength 6
    0x3C, 0x73, 0x76, 0x67, 0x2F, 0x3E, // "<svg/>"
];

/// A document that is not valid UTF-8.
#[rustfmt::skip]
pub static INVALID_UTF8: &[u8] = &[
    0x00, 0x00,             // version 0
    0x00, 0x00, 0x00, 0x0A, // offsetToSVGDocIndex 10
    0x00, 0x00, 0x00, 0x00, // reserved
    0x00, 0x01,             // numEntries 1
    0x00, 0x01,             // startGlyphID 1
    0x00, 0x01,             // endGlyphID 1
    0x00, 0x00, 0x00, 0x0E, // svgDocOffset 14
    0x00, 0x00, 0x00, 0x03, // svgDocLength 3
    0x3C, 0xFF, 0x3E,       // '<', invalid, '>'
];

/// A document length that runs past the end of the data.
#[rustfmt::skip]
pub static TRUNCATED_DOCUMENT: &[u8] = &[
    0x00, 0x00,             // version 0
    0x00, 0x00, 0x00, 0x0A, // offsetToSVGDocIndex 10
    0x00, 0x00, 0x00, 0x00, // reserved
    0x00, 0x01,             // numEntries 1
    0x00, 0x01,             // startGlyphID 1
    0x00, 0x01,             // endGlyphID 1
    0x00, 0x00, 0x00, 0x0E, // svgDocOffset 14
    0x00, 0x00, 0x00, 0x64, // svgDocLength 100
    0x3C, 0x73, 0x76, 0x67, 0x2F, 0x3E, // only 6 bytes follow
];

/// Declares more index entries than are present.
#[rustfmt::skip]
pub static TRUNCATED_INDEX: &[u8] = &[
    0x00, 0x00,             // version 0
    0x00, 0x00, 0x00, 0x0A, // offsetToSVGDocIndex 10
    0x00, 0x00, 0x00, 0x00, // reserved
    0x00, 0x03,             // numEntries 3
    0x00, 0x01,             // startGlyphID 1
    0x00, 0x01,             // endGlyphID 1
    0x00, 0x00, 0x00, 0x26, // svgDocOffset 38
    0x00, 0x00, 0x00, 0x06, // svgDocLength 6
];
