//! A generic serializer for tables described as a list of named fields.
//!
//! This is a flat, order-preserving description of a table's binary layout:
//! each [`Field`] is written in turn, fixed-width integers in big-endian
//! order and literal blocks verbatim, with no padding or alignment.

use font_types::Tag;

use crate::write::{dump_table, FontWrite, TableWriter};

/// The value and encoding of a single field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// A 16-bit unsigned integer.
    UShort(u16),
    /// A 32-bit unsigned integer.
    ULong(u32),
    /// Raw bytes, written as-is.
    Literal(Vec<u8>),
}

/// A named field in a [`Table`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

/// A table tag and the ordered fields that make up its data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    tag: Tag,
    fields: Vec<Field>,
}

impl FieldValue {
    /// The number of bytes this value occupies when encoded.
    pub fn byte_len(&self) -> usize {
        match self {
            FieldValue::UShort(_) => 2,
            FieldValue::ULong(_) => 4,
            FieldValue::Literal(bytes) => bytes.len(),
        }
    }
}

impl Field {
    pub fn new(name: impl Into<String>, value: FieldValue) -> Self {
        Field {
            name: name.into(),
            value,
        }
    }
}

impl Table {
    pub fn new(tag: Tag, fields: Vec<Field>) -> Self {
        Table { tag, fields }
    }

    /// The tag identifying this table in the font's table directory.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The value of the first field named `name`.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    /// The byte position at which the field named `name` will be written.
    pub fn field_position(&self, name: &str) -> Option<usize> {
        let idx = self.fields.iter().position(|field| field.name == name)?;
        Some(
            self.fields[..idx]
                .iter()
                .map(|field| field.value.byte_len())
                .sum(),
        )
    }

    /// The total encoded length of the table.
    pub fn byte_len(&self) -> usize {
        self.fields.iter().map(|field| field.value.byte_len()).sum()
    }

    /// Encode every field, in order.
    pub fn encode(&self) -> Vec<u8> {
        dump_table(self)
    }
}

impl FontWrite for FieldValue {
    fn write_into(&self, writer: &mut TableWriter) {
        match self {
            FieldValue::UShort(value) => value.write_into(writer),
            FieldValue::ULong(value) => value.write_into(writer),
            FieldValue::Literal(bytes) => writer.write_slice(bytes),
        }
    }
}

impl FontWrite for Field {
    fn write_into(&self, writer: &mut TableWriter) {
        self.value.write_into(writer)
    }
}

impl FontWrite for Table {
    fn write_into(&self, writer: &mut TableWriter) {
        self.fields.write_into(writer)
    }
}
