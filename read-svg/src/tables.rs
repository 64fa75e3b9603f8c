//! The tables this crate knows how to read.

pub mod svg;
