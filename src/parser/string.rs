//! Field name parsing

use super::primitives::{read_u16, take};
use crate::error::{Result, TensorFileError};
use std::io::Read;

/// Parse a u16 length-prefixed UTF-8 field name
pub fn read_name<R: Read>(reader: &mut R) -> Result<String> {
    let len = read_u16(reader, "field name length")?;
    let bytes = take(reader, len as u64, "field name")?;
    String::from_utf8(bytes).map_err(|_| TensorFileError::corrupt("invalid UTF-8 in field name"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn make_name(bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(bytes.len() as u16).to_le_bytes());
        out.extend_from_slice(bytes);
        out
    }

    #[test]
    fn parses_utf8() {
        let mut cursor = Cursor::new(make_name("sky_rad_rgb ✓".as_bytes()));
        assert_eq!(read_name(&mut cursor).unwrap(), "sky_rad_rgb ✓");
    }

    #[test]
    fn rejects_invalid_utf8() {
        let mut cursor = Cursor::new(make_name(&[0xFF, 0xFE]));
        assert!(matches!(
            read_name(&mut cursor),
            Err(TensorFileError::CorruptHeader(_))
        ));
    }

    #[test]
    fn truncated_name() {
        let mut bytes = make_name(b"weights");
        bytes.truncate(5);
        let mut cursor = Cursor::new(bytes);
        assert!(matches!(
            read_name(&mut cursor),
            Err(TensorFileError::CorruptHeader(_))
        ));
    }
}
