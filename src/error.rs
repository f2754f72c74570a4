//! Error types for the bdm client.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for bdm operations.
///
/// Each variant maps to a specific process exit code.
#[derive(Error, Debug)]
pub enum BdmError {
    /// User provided invalid arguments or the form is in the wrong state.
    #[error("{0}")]
    UserError(String),

    /// Local validation failed before any request was made.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// The remote service answered with an error status.
    #[error("Request failed ({status}): {message}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Message taken from the response body, or the status text.
        message: String,
    },

    /// The remote service rejected the bearer token.
    #[error("Authentication failed: {0}")]
    AuthError(String),

    /// The service could not be reached or the request could not be sent.
    #[error("Request failed: {0}")]
    TransportError(String),

    /// The service answered successfully but the payload is unusable.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A request is already in flight for this form.
    #[error("a request is already in progress; wait for it to finish")]
    Busy,

    /// A local file could not be read or written.
    #[error("{0}")]
    IoError(String),
}

impl BdmError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BdmError::UserError(_) | BdmError::Busy => exit_codes::USER_ERROR,
            BdmError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            BdmError::ApiError { .. }
            | BdmError::AuthError(_)
            | BdmError::TransportError(_)
            | BdmError::MalformedResponse(_) => exit_codes::SERVICE_FAILURE,
            BdmError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }

    /// The text shown to a user in a notification.
    ///
    /// Service errors carry the server's own message, so they are shown as-is
    /// instead of with the `Display` prefix.
    pub fn user_message(&self) -> String {
        match self {
            BdmError::ApiError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for bdm operations.
pub type Result<T> = std::result::Result<T, BdmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_error_has_correct_exit_code() {
        let err = BdmError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(BdmError::Busy.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn test_validation_error_has_correct_exit_code() {
        let err = BdmError::ValidationError("document name is required".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn test_service_errors_share_exit_code() {
        let errs = [
            BdmError::ApiError {
                status: 500,
                message: "boom".to_string(),
            },
            BdmError::AuthError("expired".to_string()),
            BdmError::TransportError("connection refused".to_string()),
            BdmError::MalformedResponse("missing data".to_string()),
        ];
        for err in errs {
            assert_eq!(err.exit_code(), exit_codes::SERVICE_FAILURE);
        }
    }

    #[test]
    fn test_io_error_has_correct_exit_code() {
        let err = BdmError::IoError("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let err = BdmError::ValidationError("invalid JSON in initial context".to_string());
        assert_eq!(
            err.to_string(),
            "Validation failed: invalid JSON in initial context"
        );

        let err = BdmError::ApiError {
            status: 422,
            message: "Template has no clauses".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (422): Template has no clauses");
        assert_eq!(err.user_message(), "Template has no clauses");
    }
}
