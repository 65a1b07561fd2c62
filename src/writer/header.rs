//! Header serialization

use crate::types::{Header, MAGIC};
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

/// Write the fixed preamble: magic, version, field count
pub fn write_header<W: Write>(writer: &mut W, header: &Header) -> io::Result<()> {
    writer.write_all(MAGIC)?;
    writer.write_u8(header.version.0)?;
    writer.write_u8(header.version.1)?;
    writer.write_u32::<LittleEndian>(header.field_count)?;
    Ok(())
}
