//! Error types for the wire codec and the request/response exchange.

use thiserror::Error;

/// Result alias for codec and client operations.
pub type Result<T> = std::result::Result<T, WireError>;

/// Errors that can occur while encoding, decoding or exchanging frames.
#[derive(Error, Debug)]
pub enum WireError {
    #[error("buffer underflow: expected {needed} bytes, got {remaining}")]
    Underflow { needed: usize, remaining: usize },

    #[error("value {value} is out of range for {ty}")]
    OutOfRange { ty: &'static str, value: i128 },

    #[error("malformed unsigned varint: {0}")]
    MalformedVarint(&'static str),

    #[error("{kind} has invalid length {length}")]
    InvalidLength { kind: &'static str, length: i64 },

    #[error("non-nullable {0} was serialized as null")]
    UnexpectedNull(&'static str),

    #[error("invalid UTF-8 in string: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("correlation id mismatch: expected {expected}, got {actual}")]
    CorrelationMismatch { expected: i32, actual: i32 },

    #[error("unsupported {kind} header version {version}")]
    UnsupportedHeaderVersion { kind: &'static str, version: i16 },

    #[error("invalid frame size: {0}")]
    InvalidFrameSize(i32),

    #[error("frame of {size} bytes exceeds limit of {max} bytes")]
    FrameTooLarge { size: usize, max: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WireError {
    pub(crate) fn out_of_range(ty: &'static str, value: impl Into<i128>) -> Self {
        WireError::OutOfRange {
            ty,
            value: value.into(),
        }
    }
}
