//! tensorfile - Self-describing binary container for named tensors
//!
//! Bundles many named, typed, multi-dimensional numeric arrays into a single
//! file. The header carries every array's name, element type, shape and data
//! offset, so a reader needs no external schema. Used to hand precomputed
//! datasets from a producer stage of a numeric pipeline to a consumer stage.
//!
//! # Format
//!
//! All integers are little-endian.
//!
//! ```text
//! header      magic "tensor_file\0" (12) | major u8 = 1 | minor u8 = 0 | field count u32
//! descriptor  name len u16 | name (UTF-8) | rank u16 | type tag u8 | offset u64 | shape u64 x rank
//!             ... one per field, in write order
//! data        each field's row-major elements at its offset; offsets are
//!             multiples of the alignment (default 8) with zero padding
//!             between fields and none after the last
//! ```
//!
//! # Example
//!
//! ```rust
//! use tensorfile::{Tensor, TensorFile, parser, writer};
//!
//! let mut fields = TensorFile::new();
//! fields.insert("a", Tensor::scalar(5u8)).unwrap();
//! fields
//!     .insert("b", Tensor::from_values(vec![2, 2], &[1.0f32, 2.0, 3.0, 4.0]).unwrap())
//!     .unwrap();
//!
//! let bytes = writer::to_bytes(&fields).unwrap();
//! let out = parser::from_bytes(&bytes).unwrap();
//!
//! assert_eq!(out.get("a").unwrap().to_vec::<u8>().unwrap(), vec![5]);
//! assert_eq!(out.get("b").unwrap().shape, vec![2, 2]);
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod parser;
pub mod raw;
pub mod types;
pub mod util;
pub mod writer;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use config::WriteOptions;
pub use error::{AccessError, Result, TensorFileError};
pub use layout::{Alignment, Layout, plan_layout};
pub use parser::{from_bytes, read, read_file};
pub use types::{
    DType, Element, FieldDescriptor, HEADER_SIZE, Header, MAGIC, Tensor, TensorFile, VERSION,
};
pub use writer::{to_bytes, write, write_file, write_stream};

#[cfg(feature = "ndarray")]
pub use ndarray_ext::NdarrayError;
