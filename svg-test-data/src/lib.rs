//! test data shared between the SVG table crates.

mod be_buffer;
pub mod svg;

pub use be_buffer::BeBuffer;
