//! Reading and writing the OpenType [SVG] table as owned data
//!
//! Where `read-svg` exposes the table's bytes as they are stored, this crate
//! provides a mutable representation: [`SvgTable`] owns its documents as
//! decoded text, with each document remembering whether it was stored
//! gzip-compressed so that it can be written back the same way.
//!
//! # Example
//!
//! ```no_run
//! use write_svg::{
//!     build_svg_table, parse_svg_table,
//!     tables::svg::{SvgDocument, SvgTable},
//!     types::GlyphId16,
//! };
//!
//! let mut table = SvgTable::new(vec![SvgDocument::new(
//!     GlyphId16::new(1),
//!     GlyphId16::new(3),
//!     "<svg xmlns=\"http://www.w3.org/2000/svg\"/>",
//!     true,
//! )]);
//! table.svg_documents[0].data.push('\n');
//!
//! let bytes = build_svg_table(&table).unwrap();
//! let reread = parse_svg_table(&bytes, 0).unwrap();
//! assert_eq!(reread.svg_documents, table.svg_documents);
//! ```
//!
//! [SVG]: https://learn.microsoft.com/en-us/typography/opentype/spec/svg

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]

mod error;
pub mod table;
pub mod tables;
mod write;

pub use error::Error;
pub use tables::svg::{build_svg_table, parse_svg_table};
pub use write::{dump_table, FontWrite, TableWriter};

/// Public re-export of the font-types crate.
pub extern crate font_types as types;
/// Public re-export of the read-svg crate.
pub extern crate read_svg as read;
/// Public re-export of the svg-gzip crate.
pub extern crate svg_gzip as gzip;
