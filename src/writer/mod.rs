//! Serialization of tensor files
//!
//! Two strategies produce byte-identical output:
//!
//! - [`write`] reserves each descriptor's offset slot with a zero, then seeks
//!   back and patches the planned offsets in before appending the data.
//! - [`write_stream`] plans first, buffers the descriptor table with final
//!   offsets in memory, and emits everything in one forward pass, so it works
//!   on sinks that cannot seek.
//!
//! Offsets are relative to the position the writer is at when writing
//! starts; for a fresh file that is the absolute file offset.

mod descriptor;
mod header;

pub use descriptor::write_descriptor;
pub use header::write_header;

use crate::config::WriteOptions;
use crate::error::{Result, TensorFileError};
use crate::layout::{Layout, plan_layout};
use crate::types::{FieldDescriptor, Header, TensorFile, checked_byte_len};
use crate::util::human_size;
use byteorder::{LittleEndian, WriteBytesExt};
use std::fs;
use std::io::{self, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::{debug, info};

/// Write a container, backpatching descriptor offsets. Returns the number of
/// bytes written.
pub fn write<W: Write + Seek>(
    writer: &mut W,
    file: &TensorFile,
    options: WriteOptions,
) -> Result<u64> {
    let descriptors = describe(file)?;
    let layout = plan_layout(&descriptors, options.alignment)?;
    let base = writer.stream_position()?;

    write_header(writer, &Header::new(descriptors.len() as u32))?;

    // Offsets are still zero here; remember where each slot lives
    let mut slots = Vec::with_capacity(descriptors.len());
    for field in &descriptors {
        slots.push(writer.stream_position()? + field.offset_slot());
        write_descriptor(writer, field)?;
    }
    debug_assert_eq!(writer.stream_position()? - base, layout.table_end);

    for (slot, offset) in slots.into_iter().zip(layout.offsets()) {
        writer.seek(SeekFrom::Start(slot))?;
        writer.write_u64::<LittleEndian>(offset)?;
    }
    writer.seek(SeekFrom::Start(base + layout.table_end))?;

    write_data(writer, file, &layout)?;
    log_written(file, &descriptors, &layout);
    Ok(layout.total_len())
}

/// Write a container in a single forward pass. Returns the number of bytes
/// written.
pub fn write_stream<W: Write>(
    writer: &mut W,
    file: &TensorFile,
    options: WriteOptions,
) -> Result<u64> {
    let mut descriptors = describe(file)?;
    let layout = plan_layout(&descriptors, options.alignment)?;

    let mut table = Vec::with_capacity(layout.table_end as usize);
    write_header(&mut table, &Header::new(descriptors.len() as u32))?;
    for (field, offset) in descriptors.iter_mut().zip(layout.offsets()) {
        field.offset = offset;
        write_descriptor(&mut table, field)?;
    }
    writer.write_all(&table)?;

    write_data(writer, file, &layout)?;
    log_written(file, &descriptors, &layout);
    Ok(layout.total_len())
}

/// Write a container to bytes with default options
pub fn to_bytes(file: &TensorFile) -> Result<Vec<u8>> {
    to_bytes_with(file, WriteOptions::default())
}

pub fn to_bytes_with(file: &TensorFile, options: WriteOptions) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_stream(&mut buf, file, options)?;
    Ok(buf)
}

/// Create (or truncate) `path` and write the container into it
pub fn write_file(path: impl AsRef<Path>, file: &TensorFile, options: WriteOptions) -> Result<u64> {
    let path = path.as_ref();
    let mut out = BufWriter::new(fs::File::create(path)?);
    let written = write(&mut out, file, options)?;
    out.flush()?;
    info!(path = %path.display(), size = %human_size(written), "wrote tensor file");
    Ok(written)
}

/// Validate every field and build its descriptor (offset still zero)
fn describe(file: &TensorFile) -> Result<Vec<FieldDescriptor>> {
    if u32::try_from(file.len()).is_err() {
        return Err(TensorFileError::InvalidField {
            name: String::new(),
            reason: format!("{} fields exceed the u32 field count", file.len()).into(),
        });
    }

    file.iter()
        .map(|(name, tensor)| {
            let invalid = |reason: String| TensorFileError::InvalidField {
                name: name.to_string(),
                reason: reason.into(),
            };
            if name.is_empty() {
                return Err(invalid("field names must not be empty".into()));
            }
            if name.len() > u16::MAX as usize {
                return Err(invalid(format!("name is {} bytes long", name.len())));
            }
            if tensor.rank() > u16::MAX as usize {
                return Err(invalid(format!("rank {} is too large", tensor.rank())));
            }
            let expected = checked_byte_len(tensor.dtype, &tensor.shape)
                .ok_or_else(|| invalid(format!("shape {:?} overflows", tensor.shape)))?;
            if expected != tensor.data.len() as u64 {
                return Err(invalid(format!(
                    "{} {:?} needs {} bytes, got {}",
                    tensor.dtype,
                    tensor.shape,
                    expected,
                    tensor.data.len()
                )));
            }
            Ok(FieldDescriptor::new(name, tensor.dtype, tensor.shape.clone()))
        })
        .collect()
}

/// Emit the data region: zero padding up to each planned offset, then the
/// field's bytes. Nothing follows the last field.
fn write_data<W: Write + ?Sized>(writer: &mut W, file: &TensorFile, layout: &Layout) -> Result<()> {
    let mut cursor = layout.table_end;
    for ((_, tensor), placement) in file.iter().zip(&layout.placements) {
        let padding = placement.start - cursor;
        if padding > 0 {
            io::copy(&mut io::repeat(0).take(padding), writer)?;
        }
        writer.write_all(&tensor.data)?;
        cursor = placement.end;
    }
    Ok(())
}

fn log_written(file: &TensorFile, descriptors: &[FieldDescriptor], layout: &Layout) {
    for (field, placement) in descriptors.iter().zip(&layout.placements) {
        debug!(
            name = %field.name,
            dtype = %field.dtype,
            shape = ?field.shape,
            offset = placement.start,
            len = placement.end - placement.start,
            "placed field"
        );
    }
    debug!(
        fields = file.len(),
        size = %human_size(layout.total_len()),
        "encoded tensor file"
    );
}
