//! Field descriptors (one per tensor in the descriptor table)

use super::DType;

/// Bytes a descriptor takes before its name and shape:
/// name length (u16), rank (u16), tag (u8), offset (u64)
const FIXED_DESCRIPTOR_BYTES: u64 = 2 + 2 + 1 + 8;

/// Metadata record for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub dtype: DType,
    pub shape: Vec<u64>,
    /// Absolute byte offset of the field's data within the container
    pub offset: u64,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, dtype: DType, shape: Vec<u64>) -> Self {
        Self {
            name: name.into(),
            dtype,
            shape,
            offset: 0,
        }
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Product of the shape; 1 for a scalar. Saturates at `u64::MAX`.
    pub fn element_count(&self) -> u64 {
        self.shape
            .iter()
            .try_fold(1u64, |acc, &dim| acc.checked_mul(dim))
            .unwrap_or(u64::MAX)
    }

    /// Length of the field's data region. Saturates at `u64::MAX`; use
    /// [`checked_byte_len`](Self::checked_byte_len) to detect overflow.
    pub fn byte_len(&self) -> u64 {
        self.checked_byte_len().unwrap_or(u64::MAX)
    }

    /// Length of the field's data region, or `None` if it does not fit in a u64
    pub fn checked_byte_len(&self) -> Option<u64> {
        checked_byte_len(self.dtype, &self.shape)
    }

    /// Number of bytes this descriptor occupies in the descriptor table
    pub fn encoded_len(&self) -> u64 {
        FIXED_DESCRIPTOR_BYTES + self.name.len() as u64 + 8 * self.rank() as u64
    }

    /// Position of the offset slot relative to the start of the descriptor
    pub(crate) fn offset_slot(&self) -> u64 {
        2 + self.name.len() as u64 + 2 + 1
    }
}

pub(crate) fn checked_byte_len(dtype: DType, shape: &[u64]) -> Option<u64> {
    shape
        .iter()
        .try_fold(1u64, |acc, &dim| acc.checked_mul(dim))?
        .checked_mul(dtype.element_size() as u64)
}
