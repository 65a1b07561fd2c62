//! Field descriptor parsing

use super::primitives::{read_u8, read_u16, read_u64};
use super::string::read_name;
use crate::error::Result;
use crate::types::{DType, FieldDescriptor};
use std::io::Read;

/// Parse one descriptor record, reading exactly `rank` shape entries
pub fn read_descriptor<R: Read>(reader: &mut R) -> Result<FieldDescriptor> {
    let name = read_name(reader)?;
    let rank = read_u16(reader, "field rank")?;
    let dtype = DType::from_tag(read_u8(reader, "field type tag")?)?;
    let offset = read_u64(reader, "field offset")?;

    let shape = (0..rank)
        .map(|_| read_u64(reader, "field shape"))
        .collect::<Result<Vec<_>>>()?;

    Ok(FieldDescriptor {
        name,
        dtype,
        shape,
        offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TensorFileError;
    use crate::writer::write_descriptor;
    use std::io::Cursor;

    fn encode(field: &FieldDescriptor) -> Vec<u8> {
        let mut buf = Vec::new();
        write_descriptor(&mut buf, field).unwrap();
        buf
    }

    #[test]
    fn parses_descriptor() {
        let mut field = FieldDescriptor::new("sun_ld_spec", DType::F64, vec![4, 11, 6]);
        field.offset = 128;
        let bytes = encode(&field);

        let mut cursor = Cursor::new(&bytes);
        assert_eq!(read_descriptor(&mut cursor).unwrap(), field);
        assert_eq!(cursor.position(), bytes.len() as u64);
    }

    #[test]
    fn parses_scalar_descriptor() {
        let field = FieldDescriptor::new("a", DType::U8, vec![]);
        let bytes = encode(&field);
        let parsed = read_descriptor(&mut Cursor::new(&bytes)).unwrap();
        assert!(parsed.shape.is_empty());
    }

    #[test]
    fn unknown_tag() {
        let field = FieldDescriptor::new("x", DType::U8, vec![1]);
        let mut bytes = encode(&field);
        let tag_pos = field.offset_slot() as usize - 1;
        bytes[tag_pos] = 0x0C;
        assert!(matches!(
            read_descriptor(&mut Cursor::new(&bytes)),
            Err(TensorFileError::UnknownType(0x0C))
        ));
    }

    #[test]
    fn every_truncation_is_corrupt() {
        let field = FieldDescriptor::new("grid", DType::I32, vec![3, 5]);
        let bytes = encode(&field);
        for len in 0..bytes.len() {
            let result = read_descriptor(&mut Cursor::new(&bytes[..len]));
            assert!(
                matches!(result, Err(TensorFileError::CorruptHeader(_))),
                "length {len} should be rejected"
            );
        }
    }
}
