//! Error types for tensorfile

use crate::types::DType;
use std::borrow::Cow;
use std::io;
use thiserror::Error;

/// Errors raised while encoding or decoding a container
#[derive(Debug, Error)]
pub enum TensorFileError {
    /// Malformed or truncated preamble, descriptor table or data region
    #[error("corrupt tensor file: {0}")]
    CorruptHeader(Cow<'static, str>),

    #[error(
        "unsupported tensor file version {major}.{minor} (expected {want_major}.{want_minor})",
        want_major = crate::VERSION.0,
        want_minor = crate::VERSION.1
    )]
    UnsupportedVersion { major: u8, minor: u8 },

    /// Element type outside the registry, on encode
    #[error("unsupported element type: {0:?}")]
    UnsupportedType(String),

    /// Type tag outside the registry, on decode
    #[error("unknown element type tag: 0x{0:02X}")]
    UnknownType(u8),

    /// A field that cannot be represented in the format
    #[error("invalid field {name:?}: {reason}")]
    InvalidField {
        name: String,
        reason: Cow<'static, str>,
    },

    /// A shape that disagrees with its values or cannot be allocated
    #[error("invalid shape {shape:?}: {reason}")]
    InvalidShape {
        shape: Vec<u64>,
        reason: Cow<'static, str>,
    },

    #[error("invalid alignment {0}: must be a non-zero power of two")]
    InvalidAlignment(u64),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl TensorFileError {
    pub(crate) fn corrupt(message: impl Into<Cow<'static, str>>) -> Self {
        TensorFileError::CorruptHeader(message.into())
    }
}

pub type Result<T, E = TensorFileError> = std::result::Result<T, E>;

/// Error for looking up fields in a decoded container
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("field not found: {name}")]
    NotFound { name: String },

    #[error("element type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: DType, actual: DType },
}
