//! Data layout planning
//!
//! Assigns every field an offset in a single forward pass over the fields in
//! their write order. The cursor starts right after the descriptor table;
//! for each field it is rounded up to the alignment, which becomes the field
//! offset, and then advanced by the field's byte length. Placements are
//! therefore strictly ordered and never overlap. An empty field takes the
//! aligned cursor as its offset and shares it with whatever comes next.

use crate::error::{Result, TensorFileError};
use crate::types::{FieldDescriptor, HEADER_SIZE};
use std::fmt;
use std::ops::Range;

/// Power-of-two byte boundary for field data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment(u64);

impl Alignment {
    pub const DEFAULT: Alignment = Alignment(8);

    pub fn new(bytes: u64) -> Result<Self> {
        if bytes.is_power_of_two() {
            Ok(Alignment(bytes))
        } else {
            Err(TensorFileError::InvalidAlignment(bytes))
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Smallest multiple of the alignment that is `>= pos`, or `None` if
    /// that lies beyond `u64::MAX`
    pub fn align_up(self, pos: u64) -> Option<u64> {
        Some(pos.checked_add(self.0 - 1)? & !(self.0 - 1))
    }

    pub fn is_aligned(self, pos: u64) -> bool {
        pos & (self.0 - 1) == 0
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Planned placement of every field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// End of the descriptor table, where the data region begins
    pub table_end: u64,
    /// Byte range of each field, in input order
    pub placements: Vec<Range<u64>>,
}

impl Layout {
    pub fn offsets(&self) -> impl Iterator<Item = u64> + '_ {
        self.placements.iter().map(|r| r.start)
    }

    /// Total container length: the end of the last field, no trailing padding
    pub fn total_len(&self) -> u64 {
        self.placements
            .last()
            .map(|r| r.end)
            .unwrap_or(self.table_end)
    }
}

/// Size of the header plus the descriptor table for `fields`
pub fn table_len(fields: &[FieldDescriptor]) -> u64 {
    HEADER_SIZE as u64 + fields.iter().map(FieldDescriptor::encoded_len).sum::<u64>()
}

/// Plan offsets for `fields` in order. Offsets are relative to the start of
/// the container.
///
/// Fails with [`TensorFileError::InvalidField`] when a field's size or
/// placement does not fit in a u64.
pub fn plan_layout(fields: &[FieldDescriptor], alignment: Alignment) -> Result<Layout> {
    let table_end = table_len(fields);
    let mut cursor = table_end;
    let placements = fields
        .iter()
        .map(|field| -> Result<Range<u64>> {
            let overflow = |what: &str| TensorFileError::InvalidField {
                name: field.name.clone(),
                reason: format!("{what} overflows the 64-bit address space").into(),
            };
            let len = field
                .checked_byte_len()
                .ok_or_else(|| overflow("data length"))?;
            let offset = alignment
                .align_up(cursor)
                .ok_or_else(|| overflow("aligned offset"))?;
            cursor = offset
                .checked_add(len)
                .ok_or_else(|| overflow("data range"))?;
            Ok(offset..cursor)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Layout {
        table_end,
        placements,
    })
}
