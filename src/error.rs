use thiserror::Error;

/// Errors raised by [`BigInteger`](crate::BigInteger) and its digit storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// Malformed decimal string, negative shift amount, non-digit chunk.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("attempt to divide by zero")]
    DivisionByZero,
    /// A shift amount or a derived limb index does not fit in `usize`.
    #[error("out of range: {0}")]
    RangeError(String),
    #[error("out of memory")]
    OutOfMemory,
    #[error("index {index} out of bounds for length {len}")]
    IndexError { index: usize, len: usize },
}

impl BigIntError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        BigIntError::InvalidArgument(msg.into())
    }

    pub(crate) fn range(msg: impl Into<String>) -> Self {
        BigIntError::RangeError(msg.into())
    }
}

impl From<std::collections::TryReserveError> for BigIntError {
    fn from(_: std::collections::TryReserveError) -> Self {
        BigIntError::OutOfMemory
    }
}

pub type Result<T> = std::result::Result<T, BigIntError>;

/// Used by the operator traits, which cannot return `Result`.
#[track_caller]
pub(crate) fn unwrap_op<T>(result: Result<T>) -> T {
    match result {
        Ok(val) => val,
        Err(err) => panic!("{}", err),
    }
}
