//! Error types for the gradebook core and its REPL shell
//!
//! Every core error is recoverable: whenever an operation fails,
//! the store is guaranteed unchanged and the caller can re-prompt.

use thiserror::Error;

/// Main error type for the gradebook
#[derive(Error, Debug)]
pub enum GradebookError {
    /// Grade outside the accepted range (or not a finite number)
    #[error("invalid grade {grade}: grades must be between 0 and 100 inclusive")]
    OutOfRange { grade: f64 },

    /// A batch entry point received no usable input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors from the terminal or history file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("gradebook error: {0}")]
    Generic(String),
}

/// Result type alias for gradebook operations
pub type Result<T> = std::result::Result<T, GradebookError>;

/// Convert anyhow errors from the shell boundary
impl From<anyhow::Error> for GradebookError {
    fn from(err: anyhow::Error) -> Self {
        GradebookError::Generic(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = GradebookError::OutOfRange { grade: 150.0 };
        assert!(err.to_string().contains("150"));
        assert!(err.to_string().contains("between 0 and 100"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = GradebookError::InvalidArgument("no grades provided".to_string());
        assert!(err.to_string().contains("no grades provided"));
    }

    #[test]
    fn test_from_anyhow() {
        let err: GradebookError = anyhow::anyhow!("something went wrong").into();
        assert!(matches!(err, GradebookError::Generic(_)));
        assert!(err.to_string().contains("something went wrong"));
    }
}
