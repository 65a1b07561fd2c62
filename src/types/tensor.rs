//! Owned tensor values

use super::{DType, Element, checked_byte_len};
use crate::error::{AccessError, TensorFileError};

/// One typed, shaped array of fixed-width elements.
///
/// `data` holds the elements little-endian in row-major order. An empty
/// `shape` is a scalar (one element); any zero dimension makes the tensor
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tensor {
    pub dtype: DType,
    pub shape: Vec<u64>,
    pub data: Vec<u8>,
}

impl Tensor {
    pub fn new(dtype: DType, shape: Vec<u64>, data: Vec<u8>) -> Self {
        Self { dtype, shape, data }
    }

    /// Build a tensor from typed values laid out row-major
    pub fn from_values<T: Element>(shape: Vec<u64>, values: &[T]) -> Result<Self, TensorFileError> {
        let expected = element_count(&shape);
        if expected != Some(values.len() as u64) {
            let reason = match expected {
                Some(n) => format!("holds {n} elements but {} values were given", values.len()),
                None => "element count overflows u64".to_string(),
            };
            return Err(TensorFileError::InvalidShape {
                shape,
                reason: reason.into(),
            });
        }
        let mut data = Vec::with_capacity(values.len() * T::DTYPE.element_size());
        for v in values {
            v.extend_le(&mut data);
        }
        Ok(Self::new(T::DTYPE, shape, data))
    }

    /// Rank-0 tensor holding one value
    pub fn scalar<T: Element>(value: T) -> Self {
        let mut data = Vec::with_capacity(T::DTYPE.element_size());
        value.extend_le(&mut data);
        Self::new(T::DTYPE, Vec::new(), data)
    }

    /// Store a string as a rank-1 `uint8` tensor of its UTF-8 bytes
    pub fn from_text(text: &str) -> Self {
        Self::new(DType::U8, vec![text.len() as u64], text.as_bytes().to_vec())
    }

    /// Zero-filled tensor. Fails if the data would not fit in memory.
    pub fn zeros(dtype: DType, shape: Vec<u64>) -> Result<Self, TensorFileError> {
        let len = checked_byte_len(dtype, &shape).and_then(|n| usize::try_from(n).ok());
        match len {
            Some(len) => Ok(Self::new(dtype, shape, vec![0u8; len])),
            None => Err(TensorFileError::InvalidShape {
                shape,
                reason: format!("{dtype} data is too large to allocate").into(),
            }),
        }
    }

    /// Total number of elements, or `None` if it overflows a u64
    pub fn num_elements(&self) -> Option<u64> {
        element_count(&self.shape)
    }

    /// Expected data size in bytes, or `None` if it overflows a u64
    pub fn expected_size(&self) -> Option<u64> {
        checked_byte_len(self.dtype, &self.shape)
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// Decode the elements as `T`
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>, AccessError> {
        if T::DTYPE != self.dtype {
            return Err(AccessError::TypeMismatch {
                expected: T::DTYPE,
                actual: self.dtype,
            });
        }
        Ok(self
            .data
            .chunks_exact(self.dtype.element_size())
            .map(T::from_le_slice)
            .collect())
    }

    /// Interpret a rank-1 `uint8` tensor as UTF-8 text
    pub fn as_text(&self) -> Option<&str> {
        if self.dtype != DType::U8 || self.rank() != 1 {
            return None;
        }
        std::str::from_utf8(&self.data).ok()
    }
}

fn element_count(shape: &[u64]) -> Option<u64> {
    shape.iter().try_fold(1u64, |acc, &dim| acc.checked_mul(dim))
}
