//! Single-array raw dumps
//!
//! Upstream sampling stages dump one array per file before the arrays are
//! bundled into a container. A raw dump has no field table and no type tag:
//!
//! ```text
//! [3]       identifier (ignored)
//! u32       version (ignored)
//! u64       rank
//! u64 x N   shape
//! ...       row-major element data, element type known to the caller
//! ```

use crate::error::{Result, TensorFileError};
use crate::parser::primitives::{read_array, read_u32, read_u64, take};
use crate::types::{DType, Tensor, checked_byte_len};
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Read one raw dump whose elements are `dtype`
pub fn read_raw_tensor<R: Read>(reader: &mut R, dtype: DType) -> Result<Tensor> {
    let _identifier: [u8; 3] = read_array(reader, "raw identifier")?;
    let _version = read_u32(reader, "raw version")?;
    let rank = read_u64(reader, "raw rank")?;

    let shape = (0..rank)
        .map(|_| read_u64(reader, "raw shape"))
        .collect::<Result<Vec<_>>>()?;
    let len = checked_byte_len(dtype, &shape)
        .ok_or_else(|| TensorFileError::corrupt(format!("raw shape {shape:?} overflows")))?;
    let data = take(reader, len, "raw data")?;

    Ok(Tensor::new(dtype, shape, data))
}

/// Open and read one raw dump from disk
pub fn read_raw_file(path: impl AsRef<Path>, dtype: DType) -> Result<Tensor> {
    let path = path.as_ref();
    let mut reader = BufReader::new(fs::File::open(path)?);
    let tensor = read_raw_tensor(&mut reader, dtype)?;
    debug!(path = %path.display(), %dtype, shape = ?tensor.shape, "read raw tensor");
    Ok(tensor)
}
