//! Error types for Mojo.

use thiserror::Error;

/// Common error type for Mojo.
#[derive(Error, Debug)]
pub enum MojoError {
    /// Database error.
    ///
    /// This is a generic database error that wraps errors from any database backend.
    /// Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Conflicting write (e.g. a tag that already has an owner).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Mail delivery error.
    ///
    /// Whether this is fatal depends on the workflow: after a durable
    /// write it downgrades to a warning, for the contact forward it is
    /// the hard failure.
    #[error("mail error: {0}")]
    Mail(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for MojoError {
    fn from(e: sqlx::Error) -> Self {
        MojoError::Database(e.to_string())
    }
}

/// Result type alias for Mojo operations.
pub type Result<T> = std::result::Result<T, MojoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = MojoError::Validation("invalid tag format".to_string());
        assert_eq!(err.to_string(), "validation error: invalid tag format");
    }

    #[test]
    fn test_conflict_error_display() {
        let err = MojoError::Conflict("tag already registered".to_string());
        assert_eq!(err.to_string(), "conflict: tag already registered");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = MojoError::NotFound("tag".to_string());
        assert_eq!(err.to_string(), "tag not found");
    }

    #[test]
    fn test_mail_error_display() {
        let err = MojoError::Mail("send failed".to_string());
        assert_eq!(err.to_string(), "mail error: send failed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MojoError = io_err.into();
        assert!(matches!(err, MojoError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(MojoError::Validation("test".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
