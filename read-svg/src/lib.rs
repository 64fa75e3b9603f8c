//! Reading the OpenType [SVG] table
//!
//! This crate provides memory safe, zero-allocation parsing of the `SVG `
//! table. It is unopinionated: document index entries are exposed exactly as
//! they are stored, glyph ranges are not validated, and document bytes are
//! handed out raw (possibly still gzip-compressed).
//!
//! For an owned, editable representation with decompressed document text,
//! see the companion `write-svg` crate.
//!
//! # Example
//!
//! ```no_run
//! # let table_bytes: &[u8] = &[];
//! use read_svg::{tables::svg::Svg, types::GlyphId16, FontData, FontRead};
//!
//! let svg = Svg::read(FontData::new(table_bytes)).expect("malformed SVG table");
//! if let Some(doc) = svg.glyph_data(GlyphId16::new(5)).unwrap() {
//!     println!("{} bytes, compressed: {}", doc.len(), doc.is_compressed());
//! }
//! ```
//!
//! [SVG]: https://learn.microsoft.com/en-us/typography/opentype/spec/svg

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod font_data;
mod read;
pub mod tables;

pub use font_data::{Cursor, FontData};
pub use read::{FontRead, ReadError};

/// Public re-export of the font-types crate.
pub extern crate font_types as types;
