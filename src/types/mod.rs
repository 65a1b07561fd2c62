//! Core types for the tensor file format

mod container;
mod dtype;
mod element;
mod field;
mod header;
mod tensor;

pub use container::TensorFile;
pub use dtype::DType;
pub use element::Element;
pub(crate) use field::checked_byte_len;
pub use field::FieldDescriptor;
pub use header::{HEADER_SIZE, Header, MAGIC, VERSION};
pub use tensor::Tensor;
