//! Error types for the slice kernels

use thiserror::Error;

/// Errors raised when kernel buffers have the wrong shape.
///
/// The pair and scalar types never fail; only functions in
/// [`kernels`](crate::kernels) return these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackedHalfError {
    #[error("{kernel}: expected {expected} lanes, got {actual}")]
    LengthMismatch {
        kernel: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("cannot pack {len} lanes into pairs: length is odd")]
    UnpairedLane { len: usize },
}

/// Result type for kernel operations
pub type Result<T> = std::result::Result<T, PackedHalfError>;

/// Fail with [`PackedHalfError::LengthMismatch`] unless `actual == expected`.
pub(crate) fn check_len(kernel: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(PackedHalfError::LengthMismatch { kernel, expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PackedHalfError::LengthMismatch { kernel: "add", expected: 4, actual: 3 };
        assert_eq!(err.to_string(), "add: expected 4 lanes, got 3");
        assert_eq!(
            PackedHalfError::UnpairedLane { len: 5 }.to_string(),
            "cannot pack 5 lanes into pairs: length is odd"
        );
    }

    #[test]
    fn test_check_len() {
        assert!(check_len("k", 2, 2).is_ok());
        assert_eq!(
            check_len("k", 2, 1),
            Err(PackedHalfError::LengthMismatch { kernel: "k", expected: 2, actual: 1 })
        );
    }
}
