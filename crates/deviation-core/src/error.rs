//! Error types for grouped-deviation estimation
//!
//! Provides a unified error type for all grouped-deviation crates.

use thiserror::Error;

/// Core error type for grouped-deviation operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a parameter that must be positive
    pub fn non_positive(name: &str, value: usize) -> Self {
        Self::InvalidParameter(format!("{name} must be positive, got {value}"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("dimension must be positive, got 0".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid parameter: dimension must be positive, got 0"
        );

        let err = Error::InvalidInput("vector length mismatch".to_string());
        assert_eq!(err.to_string(), "Invalid input: vector length mismatch");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::non_positive("groups", 0);
        assert_eq!(err.to_string(), "Invalid parameter: groups must be positive, got 0");

        let err = Error::size_mismatch(10, 7, "sample row");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in sample row: expected 10, got 7"
        );
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom error message");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("custom error message"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function(succeed: bool) -> Result<i32> {
            if succeed {
                Ok(42)
            } else {
                Err(Error::InvalidParameter("test failure".to_string()))
            }
        }

        assert_eq!(test_function(true).unwrap(), 42);
        assert!(test_function(false).is_err());
    }
}
