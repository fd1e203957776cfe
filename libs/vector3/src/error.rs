//! # Error Types
//!
//! Errors returned by the strict vector APIs. The core arithmetic never
//! fails; only [`Vector3::try_normalize`](crate::Vector3::try_normalize) and
//! the slice conversion report errors.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in strict vector operations.
///
/// ## Example
///
/// ```rust
/// use vector3::{Vector3, VectorError};
///
/// match Vector3::ZERO.try_normalize() {
///     Ok(unit) => println!("unit: {unit:?}"),
///     Err(VectorError::ZeroLength) => eprintln!("cannot normalize zero vector"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// The vector has length exactly zero and has no direction.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    /// The vector length is NaN or infinite.
    #[error("vector length is not finite: {length}")]
    NonFinite {
        /// The computed length
        length: f64,
    },

    /// A slice did not contain exactly three components.
    #[error("expected 3 components, got {0}")]
    DimensionMismatch(usize),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for strict vector operations.
pub type VectorResult<T> = Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(VectorError::ZeroLength.to_string().contains("zero-length"));

        let err = VectorError::NonFinite { length: f64::INFINITY };
        assert!(err.to_string().contains("inf"));

        assert!(VectorError::DimensionMismatch(4).to_string().contains('4'));
    }

    /// Errors must cross thread boundaries.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VectorError>();
    }
}
