//! Error types for the simcfg CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for simcfg operations.
#[derive(Error, Debug)]
pub enum SimError {
    /// User provided invalid arguments or an unreadable/malformed document.
    #[error("{0}")]
    UserError(String),

    /// A project or configuration invariant does not hold.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Writing the compiled configuration failed.
    #[error("Save failed: {0}")]
    PersistError(String),
}

impl SimError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SimError::UserError(_) => exit_codes::USER_ERROR,
            SimError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            SimError::PersistError(_) => exit_codes::PERSIST_FAILURE,
        }
    }
}

/// Result type alias for simcfg operations.
pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = SimError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = SimError::ValidationError("duplicate role id".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn persist_error_has_correct_exit_code() {
        let err = SimError::PersistError("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::PERSIST_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = SimError::ValidationError("project name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Validation failed: project name must not be empty"
        );

        let err = SimError::PersistError("permission denied".to_string());
        assert_eq!(err.to_string(), "Save failed: permission denied");
    }
}
