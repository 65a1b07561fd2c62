//! Header parsing

use super::primitives::read_array;
use crate::error::{Result, TensorFileError};
use crate::types::{HEADER_SIZE, Header, MAGIC, VERSION};
use std::io::Read;

/// Parse and validate the fixed preamble
pub fn read_header<R: Read>(reader: &mut R) -> Result<Header> {
    let bytes: [u8; HEADER_SIZE] = read_array(reader, "header")?;

    if &bytes[0..12] != MAGIC {
        return Err(TensorFileError::corrupt("invalid magic bytes, not a tensor file"));
    }

    let version = (bytes[12], bytes[13]);
    if version != VERSION {
        return Err(TensorFileError::UnsupportedVersion {
            major: version.0,
            minor: version.1,
        });
    }

    let field_count = u32::from_le_bytes([bytes[14], bytes[15], bytes[16], bytes[17]]);
    Ok(Header {
        version,
        field_count,
    })
}
