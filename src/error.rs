//! Error handling for the fastbytes library
//!
//! Only the checked tier reports errors; the raw tier keeps the classic
//! sentinel-based contract (`Option`/null results, undefined behavior on
//! contract violation) of the primitives it replaces.

use thiserror::Error;

/// Main error type for the fastbytes library
#[derive(Error, Debug)]
pub enum FastBytesError {
    /// Invalid argument combination (mismatched lengths, bad ranges)
    #[error("Invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },

    /// Destination too small or index past the end of a buffer
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index or required capacity
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Memory allocation failures
    #[error("Memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        size: usize,
    },
}

impl FastBytesError {
    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }
}

/// Result type alias for fastbytes operations
pub type Result<T> = std::result::Result<T, FastBytesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FastBytesError::invalid_data("test message");
        assert_eq!(err.to_string(), "Invalid data: test message");

        let err = FastBytesError::out_of_bounds(10, 5);
        assert_eq!(err.to_string(), "Out of bounds: index 10, size 5");

        let err = FastBytesError::out_of_memory(1024);
        assert_eq!(
            err.to_string(),
            "Memory allocation failed: requested 1024 bytes"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FastBytesError>();
    }
}
