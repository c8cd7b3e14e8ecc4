use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AccountError>;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Task not found")]
    TaskNotFound,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid recovery token")]
    InvalidRecoveryToken,

    #[error("Record was modified concurrently")]
    StaleRecord,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Serializable failure payload returned to callers in place of a body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl AccountError {
    /// Error class name for wire payloads and log fields
    pub fn class(&self) -> &'static str {
        match self {
            AccountError::InvalidCredentials => "authentication_error",
            AccountError::AccountNotFound | AccountError::TaskNotFound => "not_found_error",
            AccountError::EmailAlreadyExists
            | AccountError::UsernameAlreadyExists
            | AccountError::StaleRecord => "conflict_error",
            AccountError::PasswordMismatch
            | AccountError::WeakPassword(_)
            | AccountError::InvalidUsername(_)
            | AccountError::Validation(_) => "validation_error",
            AccountError::InvalidRecoveryToken => "invalid_token_error",
            AccountError::Storage(_) | AccountError::Internal(_) => "internal_error",
        }
    }

    /// Convert to the serializable error body for the HTTP edge
    pub fn body(&self) -> ErrorBody {
        let message = match self {
            // Don't leak internal details in production
            AccountError::Storage(_) | AccountError::Internal(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        ErrorBody {
            error: self.class(),
            message,
        }
    }

    /// Whether the failure is an expected contract outcome rather than an
    /// infrastructure fault
    pub fn is_expected(&self) -> bool {
        !matches!(
            self,
            AccountError::Storage(_) | AccountError::Internal(_)
        )
    }
}

// Conversions from external error types
impl From<validator::ValidationErrors> for AccountError {
    fn from(err: validator::ValidationErrors) -> Self {
        AccountError::Validation(err.to_string())
    }
}
