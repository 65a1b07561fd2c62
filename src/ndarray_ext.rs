//! ndarray integration for tensors
//!
//! Conversions between [`Tensor`] and ndarray's dynamic-dimension arrays.
//!
//! Enable with the `ndarray` feature flag.

use crate::types::{DType, Element, Tensor};
use ndarray::{ArrayBase, ArrayD, Data, IxDyn};

/// Error type for ndarray conversions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NdarrayError {
    #[error("DType mismatch: expected {expected}, got {actual}")]
    DTypeMismatch { expected: DType, actual: DType },

    #[error("shape {shape:?} doesn't match data length {data_len}")]
    ShapeMismatch { shape: Vec<u64>, data_len: usize },

    #[error("array is not contiguous; call .as_standard_layout().into_owned() first")]
    NotContiguous,
}

impl Tensor {
    /// Create a tensor from an owned array or a view
    ///
    /// The array must be in standard (row-major, contiguous) layout.
    pub fn from_ndarray<T, S>(arr: &ArrayBase<S, IxDyn>) -> Result<Self, NdarrayError>
    where
        T: Element,
        S: Data<Elem = T>,
    {
        if !arr.is_standard_layout() {
            return Err(NdarrayError::NotContiguous);
        }

        let shape: Vec<u64> = arr.shape().iter().map(|&d| d as u64).collect();
        let mut data = Vec::with_capacity(arr.len() * T::DTYPE.element_size());
        for &v in arr.iter() {
            v.extend_le(&mut data);
        }
        Ok(Tensor::new(T::DTYPE, shape, data))
    }

    /// Convert to an owned ndarray ArrayD
    pub fn to_ndarray<T: Element>(&self) -> Result<ArrayD<T>, NdarrayError> {
        if T::DTYPE != self.dtype {
            return Err(NdarrayError::DTypeMismatch {
                expected: T::DTYPE,
                actual: self.dtype,
            });
        }

        let shape_mismatch = || NdarrayError::ShapeMismatch {
            shape: self.shape.clone(),
            data_len: self.data.len(),
        };

        let shape: Vec<usize> = self
            .shape
            .iter()
            .map(|&d| usize::try_from(d).map_err(|_| shape_mismatch()))
            .collect::<Result<_, _>>()?;
        if self.expected_size() != Some(self.data.len() as u64) {
            return Err(shape_mismatch());
        }

        let elements: Vec<T> = self
            .data
            .chunks_exact(self.dtype.element_size())
            .map(T::from_le_slice)
            .collect();

        ArrayD::from_shape_vec(IxDyn(&shape), elements).map_err(|_| shape_mismatch())
    }
}
