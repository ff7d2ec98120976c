use fctx_types::{Fixed12Dot4, UFixed12Dot4, Verb};

use crate::{cursor::Cursor, error::EncodeError};

/// A type that can be written out as part of a packed path or font.
///
/// Everything in the format is little-endian, and there are no offsets
/// to resolve: objects are written in order, one after another.
pub trait FctxWrite {
    /// Write our data into this [FieldWriter].
    fn write_into(&self, writer: &mut FieldWriter);
}

/// An object that accumulates the bytes of a packed path or font.
#[derive(Clone, Debug, Default)]
pub struct FieldWriter {
    bytes: Vec<u8>,
}

/// Serialize an object.
pub fn dump<T: FctxWrite + ?Sized>(obj: &T) -> Vec<u8> {
    let mut writer = FieldWriter::default();
    obj.write_into(&mut writer);
    writer.into_data()
}

impl FieldWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write raw bytes.
    ///
    /// The caller is responsible for ensuring bytes are in little-endian order.
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

    pub fn into_data(self) -> Vec<u8> {
        self.bytes
    }
}

macro_rules! write_le_bytes {
    ($ty:ty) => {
        impl FctxWrite for $ty {
            #[inline]
            fn write_into(&self, writer: &mut FieldWriter) {
                writer.write_slice(&self.to_le_bytes())
            }
        }
    };
}

write_le_bytes!(u16);
write_le_bytes!(i16);
write_le_bytes!(Fixed12Dot4);
write_le_bytes!(UFixed12Dot4);

impl FctxWrite for Verb {
    fn write_into(&self, writer: &mut FieldWriter) {
        self.code().write_into(writer)
    }
}

impl<T: FctxWrite> FctxWrite for [T] {
    fn write_into(&self, writer: &mut FieldWriter) {
        self.iter().for_each(|item| item.write_into(writer))
    }
}

/// One typed value of a packed command.
///
/// Every field occupies a two byte slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Field {
    /// The command letter.
    Code(Verb),
    /// A horizontal coordinate; resolved against the cursor if relative.
    X(f64),
    /// A vertical coordinate; resolved against the cursor if relative.
    Y(f64),
    /// A value stored verbatim.
    Unsigned(u16),
}

/// Pack a group of fields.
///
/// Coordinates of a `relative` group are offsets from the cursor's current
/// point. All coordinates are scaled by the cursor's em-scale and stored as
/// [`Fixed12Dot4`]. Nothing is written if any coordinate is out of range.
pub fn write_fields(
    writer: &mut FieldWriter,
    cursor: &Cursor,
    relative: bool,
    fields: &[Field],
) -> Result<(), EncodeError> {
    let mut group = FieldWriter::new();
    for field in fields {
        match *field {
            Field::Code(verb) => verb.write_into(&mut group),
            Field::X(x) => cursor
                .scale_to_fixed(cursor.resolve_x(x, relative))?
                .write_into(&mut group),
            Field::Y(y) => cursor
                .scale_to_fixed(cursor.resolve_y(y, relative))?
                .write_into(&mut group),
            Field::Unsigned(value) => value.write_into(&mut group),
        }
    }
    writer.write_slice(&group.bytes);
    Ok(())
}
