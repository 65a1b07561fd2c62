//! Writer configuration

use crate::error::TensorFileError;
use crate::layout::Alignment;

/// Options controlling how a container is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    pub alignment: Alignment,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data alignment in bytes (must be a power of two)
    pub fn alignment(mut self, bytes: u64) -> Result<Self, TensorFileError> {
        self.alignment = Alignment::new(bytes)?;
        Ok(self)
    }
}
