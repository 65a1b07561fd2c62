//! Header constants and structure

/// Magic bytes identifying a tensor file
pub const MAGIC: &[u8; 12] = b"tensor_file\0";

/// The only supported format version, as (major, minor)
pub const VERSION: (u8, u8) = (1, 0);

/// Header size in bytes (magic + major + minor + field count)
pub const HEADER_SIZE: usize = MAGIC.len() + 1 + 1 + 4;

/// Decoded file preamble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: (u8, u8),
    pub field_count: u32,
}

impl Header {
    pub fn new(field_count: u32) -> Self {
        Self {
            version: VERSION,
            field_count,
        }
    }
}
