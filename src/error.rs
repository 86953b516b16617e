//! Error types for sequence generation and its request boundary.

use thiserror::Error;

use crate::response::Status;

/// Result type alias for sequence operations.
pub type FibResult<T> = Result<T, FibError>;

/// Errors that can occur while generating or serving a sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FibError {
    /// A bound reached the generator with a negative value.
    #[error("{0}")]
    InvalidInput(String),

    /// A required query parameter was absent or empty.
    #[error("{0}")]
    MissingParameter(String),

    /// A query parameter was present but not an integer.
    #[error("{0}")]
    InvalidParameter(String),

    /// The sequence could not be serialized.
    #[error("{0}")]
    Encoding(String),
}

impl FibError {
    /// Creates an InvalidInput error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates a MissingParameter error.
    pub fn missing_parameter(msg: impl Into<String>) -> Self {
        Self::MissingParameter(msg.into())
    }

    /// Creates an InvalidParameter error.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Creates an Encoding error.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// HTTP status a caller should see for this error.
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidInput(_) | Self::MissingParameter(_) | Self::InvalidParameter(_) => {
                Status::BadRequest
            }
            Self::Encoding(_) => Status::InternalServerError,
        }
    }

    /// True for errors caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        self.status() == Status::BadRequest
    }
}

impl From<serde_json::Error> for FibError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = FibError::missing_parameter("Please provide a number in the query parameter 'n'");
        assert_eq!(
            err.to_string(),
            "Please provide a number in the query parameter 'n'"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(FibError::invalid_input("x").status(), Status::BadRequest);
        assert_eq!(FibError::missing_parameter("x").status(), Status::BadRequest);
        assert_eq!(FibError::invalid_parameter("x").status(), Status::BadRequest);
        assert_eq!(
            FibError::encoding("x").status(),
            Status::InternalServerError
        );
        assert!(FibError::invalid_input("x").is_client_error());
        assert!(!FibError::encoding("x").is_client_error());
    }
}
