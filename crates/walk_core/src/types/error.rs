//! Error types for structured error handling.
//!
//! This module provides:
//! - `SampleError`: a sample value violated the mapper input contract
//! - `StreamError`: the sample stream was drawn past its end

use thiserror::Error;

/// A sample value violated the [0, 1] input contract.
///
/// Step mappers partition exactly the unit interval; any value outside it
/// is a contract violation that aborts the simulation run rather than
/// defaulting to some direction silently.
///
/// # Examples
/// ```
/// use walk_core::SampleError;
///
/// let err = SampleError::OutOfRange { value: 1.5 };
/// assert_eq!(err.to_string(), "sample 1.5 outside the unit interval [0, 1]");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    /// The sample lies outside [0, 1].
    #[error("sample {value} outside the unit interval [0, 1]")]
    OutOfRange {
        /// The offending sample value.
        value: f64,
    },
}

/// The sample stream has no values left.
///
/// For target-seeking walks this is a normal termination condition that the
/// engine converts into a termination reason; it is a hard error only when
/// a caller draws from an exhausted stream directly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// Every sample has already been consumed.
    #[error("sample stream exhausted")]
    Exhausted,
}
