//! Element types and their on-disk tags

use crate::error::TensorFileError;
use std::fmt;
use std::str::FromStr;

/// Element type of a tensor field.
///
/// The discriminant is the one-byte tag stored in the field descriptor, so
/// encoding and decoding share this single table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DType {
    U8 = 0x01,
    I8 = 0x02,
    U16 = 0x03,
    I16 = 0x04,
    U32 = 0x05,
    I32 = 0x06,
    U64 = 0x07,
    I64 = 0x08,
    F16 = 0x09,
    F32 = 0x0A,
    F64 = 0x0B,
}

impl DType {
    /// Every supported type, in tag order
    pub const ALL: [DType; 11] = [
        DType::U8,
        DType::I8,
        DType::U16,
        DType::I16,
        DType::U32,
        DType::I32,
        DType::U64,
        DType::I64,
        DType::F16,
        DType::F32,
        DType::F64,
    ];

    /// Size in bytes of a single element
    pub fn element_size(self) -> usize {
        match self {
            DType::U8 | DType::I8 => 1,
            DType::U16 | DType::I16 | DType::F16 => 2,
            DType::U32 | DType::I32 | DType::F32 => 4,
            DType::U64 | DType::I64 | DType::F64 => 8,
        }
    }

    /// On-disk tag byte
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Decode a tag byte, failing with `UnknownType` outside the table
    pub fn from_tag(tag: u8) -> Result<Self, TensorFileError> {
        Self::ALL
            .get((tag as usize).wrapping_sub(1))
            .copied()
            .ok_or(TensorFileError::UnknownType(tag))
    }

    /// Canonical (numpy-style) name
    pub fn name(self) -> &'static str {
        match self {
            DType::U8 => "uint8",
            DType::I8 => "int8",
            DType::U16 => "uint16",
            DType::I16 => "int16",
            DType::U32 => "uint32",
            DType::I32 => "int32",
            DType::U64 => "uint64",
            DType::I64 => "int64",
            DType::F16 => "float16",
            DType::F32 => "float32",
            DType::F64 => "float64",
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, DType::F16 | DType::F32 | DType::F64)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DType {
    type Err = TensorFileError;

    /// Parse a type name as produced by numeric pipelines.
    ///
    /// Anything outside the eleven fixed types (`bool`, `complex64`,
    /// `bfloat16`, ...) is `UnsupportedType`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dtype = match s.trim().to_ascii_lowercase().as_str() {
            "uint8" | "u8" => DType::U8,
            "int8" | "i8" => DType::I8,
            "uint16" | "u16" => DType::U16,
            "int16" | "i16" => DType::I16,
            "uint32" | "u32" => DType::U32,
            "int32" | "i32" => DType::I32,
            "uint64" | "u64" => DType::U64,
            "int64" | "i64" => DType::I64,
            "float16" | "f16" | "half" => DType::F16,
            "float32" | "f32" | "float" => DType::F32,
            "float64" | "f64" | "double" => DType::F64,
            _ => return Err(TensorFileError::UnsupportedType(s.to_string())),
        };
        Ok(dtype)
    }
}
