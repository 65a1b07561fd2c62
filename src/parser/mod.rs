//! Binary parser for the tensor file format
//!
//! Reads the header, then the whole descriptor table, then seeks to each
//! field's data. Any failure aborts the parse; no partial container is ever
//! returned.

mod descriptor;
mod header;
pub(crate) mod primitives;
mod string;

pub use descriptor::read_descriptor;
pub use header::read_header;

use crate::error::{Result, TensorFileError};
use crate::types::{FieldDescriptor, Tensor, TensorFile};
use crate::util::human_size;
use primitives::take;
use std::collections::HashSet;
use std::fs;
use std::io::{BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, info};

/// Parse a container from a seekable source.
///
/// Offsets in the file are taken relative to the reader's position when
/// this is called.
pub fn read<R: Read + Seek>(reader: &mut R) -> Result<TensorFile> {
    let base = reader.stream_position()?;
    let descriptors = read_index_at(reader, base)?;

    let mut file = TensorFile::new();
    for field in descriptors {
        reader.seek(SeekFrom::Start(base + field.offset))?;
        let data = take(reader, field.byte_len(), "field data")?;
        debug!(
            name = %field.name,
            dtype = %field.dtype,
            shape = ?field.shape,
            offset = field.offset,
            "read field"
        );
        let tensor = Tensor::new(field.dtype, field.shape, data);
        file.insert(field.name, tensor)?;
    }
    Ok(file)
}

/// Parse only the header and descriptor table, validating every field's
/// data range against the source length without reading it.
pub fn read_index<R: Read + Seek>(reader: &mut R) -> Result<Vec<FieldDescriptor>> {
    let base = reader.stream_position()?;
    read_index_at(reader, base)
}

/// Parse a container from bytes
pub fn from_bytes(bytes: &[u8]) -> Result<TensorFile> {
    read(&mut Cursor::new(bytes))
}

/// Open and parse a container from disk
pub fn read_file(path: impl AsRef<Path>) -> Result<TensorFile> {
    let path = path.as_ref();
    let mut reader = BufReader::new(fs::File::open(path)?);
    let file = read(&mut reader)?;
    let size = reader.seek(SeekFrom::End(0))?;
    info!(
        path = %path.display(),
        size = %human_size(size),
        fields = file.len(),
        "loaded tensor file"
    );
    Ok(file)
}

fn read_index_at<R: Read + Seek>(reader: &mut R, base: u64) -> Result<Vec<FieldDescriptor>> {
    let end = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(base))?;
    let available = end.saturating_sub(base);

    let header = read_header(reader)?;
    let descriptors = (0..header.field_count)
        .map(|_| read_descriptor(reader))
        .collect::<Result<Vec<_>>>()?;
    let table_end = reader.stream_position()? - base;

    validate(&descriptors, table_end, available)?;
    Ok(descriptors)
}

/// Check names and data ranges before any field data is read
fn validate(descriptors: &[FieldDescriptor], table_end: u64, available: u64) -> Result<()> {
    let mut seen = HashSet::with_capacity(descriptors.len());
    for field in descriptors {
        if field.name.is_empty() {
            return Err(TensorFileError::corrupt("empty field name"));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(TensorFileError::corrupt(format!(
                "duplicate field name {:?}",
                field.name
            )));
        }
        let len = field.checked_byte_len().ok_or_else(|| {
            TensorFileError::corrupt(format!("field {:?} has an oversized shape", field.name))
        })?;
        if field.offset < table_end {
            return Err(TensorFileError::corrupt(format!(
                "field {:?} data offset {} lies inside the descriptor table",
                field.name, field.offset
            )));
        }
        match field.offset.checked_add(len) {
            Some(end) if end <= available => {}
            _ => {
                return Err(TensorFileError::corrupt(format!(
                    "truncated field data for {:?}: needs bytes {}..{}, container has {}",
                    field.name,
                    field.offset,
                    field.offset.saturating_add(len),
                    available
                )));
            }
        }
    }
    Ok(())
}
