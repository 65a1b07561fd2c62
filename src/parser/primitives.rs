//! Little-endian primitive reads over `Read`
//!
//! Running out of input is always a format error here: every read names
//! what it was trying to decode, and an `UnexpectedEof` becomes
//! `CorruptHeader`. Other I/O failures pass through unchanged.

use crate::error::{Result, TensorFileError};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, Read};

fn truncated(what: &'static str) -> impl FnOnce(io::Error) -> TensorFileError {
    move |err| {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            TensorFileError::corrupt(format!("truncated {what}"))
        } else {
            TensorFileError::Io(err)
        }
    }
}

pub fn read_u8<R: Read>(reader: &mut R, what: &'static str) -> Result<u8> {
    reader.read_u8().map_err(truncated(what))
}

pub fn read_u16<R: Read>(reader: &mut R, what: &'static str) -> Result<u16> {
    reader.read_u16::<LittleEndian>().map_err(truncated(what))
}

pub fn read_u32<R: Read>(reader: &mut R, what: &'static str) -> Result<u32> {
    reader.read_u32::<LittleEndian>().map_err(truncated(what))
}

pub fn read_u64<R: Read>(reader: &mut R, what: &'static str) -> Result<u64> {
    reader.read_u64::<LittleEndian>().map_err(truncated(what))
}

/// Read exactly `N` bytes
pub fn read_array<const N: usize, R: Read>(
    reader: &mut R,
    what: &'static str,
) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(truncated(what))?;
    Ok(buf)
}

/// Read exactly `len` bytes.
///
/// The buffer grows with the data actually read, so a corrupt length cannot
/// force a huge allocation up front.
pub fn take<R: Read>(reader: &mut R, len: u64, what: &'static str) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.take(len).read_to_end(&mut buf)?;
    if (buf.len() as u64) < len {
        return Err(TensorFileError::corrupt(format!(
            "truncated {what}: expected {len} bytes, found {}",
            buf.len()
        )));
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn chained_reads() {
        let mut data = Vec::new();
        data.push(0x7F);
        data.extend_from_slice(&0x0201u16.to_le_bytes());
        data.extend_from_slice(&42u32.to_le_bytes());
        data.extend_from_slice(&0x0807060504030201u64.to_le_bytes());

        let mut cursor = Cursor::new(data);
        assert_eq!(read_u8(&mut cursor, "a").unwrap(), 0x7F);
        assert_eq!(read_u16(&mut cursor, "b").unwrap(), 0x0201);
        assert_eq!(read_u32(&mut cursor, "c").unwrap(), 42);
        assert_eq!(read_u64(&mut cursor, "d").unwrap(), 0x0807060504030201);
    }

    #[test]
    fn eof_is_corrupt() {
        let mut cursor = Cursor::new(vec![1u8, 2, 3]);
        let err = read_u32(&mut cursor, "field count").unwrap_err();
        assert!(
            matches!(err, TensorFileError::CorruptHeader(ref m) if m == "truncated field count")
        );
    }

    #[test]
    fn take_exact_and_short() {
        let mut cursor = Cursor::new(b"helloworld".to_vec());
        assert_eq!(take(&mut cursor, 5, "x").unwrap(), b"hello");
        assert_eq!(take(&mut cursor, 0, "x").unwrap(), b"");
        assert!(matches!(
            take(&mut cursor, 6, "x"),
            Err(TensorFileError::CorruptHeader(_))
        ));
    }

    #[test]
    fn take_huge_length_does_not_allocate() {
        let mut cursor = Cursor::new(vec![0u8; 4]);
        assert!(take(&mut cursor, u64::MAX, "x").is_err());
    }

    #[test]
    fn read_fixed_array() {
        let mut cursor = Cursor::new(b"abc".to_vec());
        assert_eq!(read_array::<2, _>(&mut cursor, "x").unwrap(), *b"ab");
        assert!(read_array::<2, _>(&mut cursor, "x").is_err());
    }
}
