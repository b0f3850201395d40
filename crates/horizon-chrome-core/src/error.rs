//! Errors raised by the signal runtime.

use std::fmt;

/// Why a signal operation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// The slot was never connected here or has been disconnected already.
    InvalidConnection,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnection => write!(f, "no such connection on this signal"),
        }
    }
}

impl std::error::Error for SignalError {}

/// Result of a fallible signal operation.
pub type Result<T> = std::result::Result<T, SignalError>;
