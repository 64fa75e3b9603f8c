//! Print the contents of an SVG table.
//!
//! The input is the raw table data (for instance as extracted by a font
//! tool), optionally preceded by other bytes, in which case `--offset` gives
//! the position of the table.

use font_types::GlyphId16;
use read_svg::{tables::svg::Svg, FontData};
use write_svg::{build_svg_table, tables::svg::SvgTable};

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = flags::Args::from_env().map_err(Error::new)?;
    let bytes = std::fs::read(&args.input).map_err(Error::new)?;
    let data = FontData::new(&bytes);
    let start = args.offset.unwrap_or(0);

    if let Some(glyph) = args.glyph {
        return print_glyph(data, start, GlyphId16::new(glyph));
    }

    if let Some(output) = &args.rebuild {
        let table = SvgTable::read(data, start).map_err(Error::new)?;
        let rebuilt = build_svg_table(&table).map_err(Error::new)?;
        log::info!(
            "rebuilt {} documents, {} -> {} bytes",
            table.svg_documents.len(),
            bytes.len().saturating_sub(start),
            rebuilt.len()
        );
        return std::fs::write(output, rebuilt).map_err(Error::new);
    }

    list_documents(data, start)
}

fn list_documents(data: FontData, start: usize) -> Result<(), Error> {
    let table = Svg::read_at(data, start).map_err(Error::new)?;
    println!("version              {}", table.version());
    println!("offsetToSVGDocIndex  {}", table.offset_to_svg_doc_index());
    println!("reserved             {}", table.reserved());
    println!("numEntries           {}", table.num_entries());
    println!();
    println!("   #  Glyphs          Offset    Length  Gzip");
    println!("---------------------------------------------");

    for (i, record) in table.document_records().enumerate() {
        let range = glyph_range(record.start_glyph_id(), record.end_glyph_id());
        let gzip = match table.document_data(&record) {
            Ok(doc) if doc.is_compressed() => "yes",
            Ok(_) => "no",
            Err(_) => "(out of bounds)",
        };
        println!(
            "{i:>4}  {range:<14} {:>7} {:>9}  {gzip}",
            record.svg_doc_offset(),
            record.svg_doc_length(),
        );
    }
    Ok(())
}

fn glyph_range(start: GlyphId16, end: GlyphId16) -> String {
    format!("{}..={}", start.to_u16(), end.to_u16())
}

fn print_glyph(data: FontData, start: usize, glyph: GlyphId16) -> Result<(), Error> {
    let table = SvgTable::read(data, start).map_err(Error::new)?;
    match table.document_for_glyph(glyph) {
        Some(doc) => {
            println!("{}", doc.data);
            Ok(())
        }
        None => Err(Error(format!(
            "no document covers glyph {}",
            glyph.to_u16()
        ))),
    }
}

#[derive(Debug, Clone)]
struct Error(String);

impl Error {
    fn new(t: impl std::fmt::Display) -> Self {
        Self(t.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for Error {}

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// List, print, or rebuild the documents in an SVG table
        cmd args {
            required input: PathBuf
            /// position of the table in the input
            optional -o, --offset offset: usize
            /// print the document covering this glyph
            optional -g, --glyph glyph: u16
            /// parse and rebuild the table, writing it to this path
            optional -r, --rebuild output: PathBuf
        }
    }
}
