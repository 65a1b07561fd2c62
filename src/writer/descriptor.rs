//! Field descriptor serialization

use crate::types::FieldDescriptor;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

/// Write one descriptor record.
///
/// Name length and rank must already be known to fit in a u16; the writer
/// validates them before any byte is emitted.
pub fn write_descriptor<W: Write>(writer: &mut W, field: &FieldDescriptor) -> io::Result<()> {
    let name = field.name.as_bytes();
    writer.write_u16::<LittleEndian>(name.len() as u16)?;
    writer.write_all(name)?;
    writer.write_u16::<LittleEndian>(field.rank() as u16)?;
    writer.write_u8(field.dtype.tag())?;
    writer.write_u64::<LittleEndian>(field.offset)?;
    for &dim in &field.shape {
        writer.write_u64::<LittleEndian>(dim)?;
    }
    Ok(())
}
