//! # App Error Type
//!
//! Errors that end a session early.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Terminal App                       │
//! │                                                                         │
//! │  Typed input rejected ── InputError ── printed, prompt repeats          │
//! │                                        (never reaches this type)        │
//! │                                                                         │
//! │  stdin closed / stdout broken ── io::Error ──┐                          │
//! │                                              ├──► AppError ──► main     │
//! │  Core rule violated ───────── CoreError ─────┘      logs, exit code 1   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use caldero_core::CoreError;
use thiserror::Error;

/// Fatal session error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal read/write failed, including end of input.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Business rule violated.
    #[error("{0}")]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_message() {
        let err: AppError = io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into();
        assert_eq!(err.to_string(), "Terminal I/O failed: input closed");
    }

    #[test]
    fn test_core_error_passes_message_through() {
        let err: AppError = CoreError::InvalidQuantity(0).into();
        assert_eq!(err.to_string(), "Quantity must be at least 1, got 0");
    }
}
