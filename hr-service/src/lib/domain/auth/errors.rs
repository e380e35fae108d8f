use thiserror::Error;

use crate::domain::employee::errors::EmployeeError;

/// Failure outcomes of authentication and authorization.
///
/// Only `Internal` reflects a fault below the auth layer; every other variant
/// is a decision about the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Account is blocked")]
    BlockedAccount,

    #[error("Invalid or expired token")]
    Unauthorized,

    #[error("Insufficient permissions")]
    Forbidden,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<EmployeeError> for AuthError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::NotFoundByUsername(_) => AuthError::AccountNotFound,
            EmployeeError::UsernameAlreadyExists(username) => AuthError::Conflict(username),
            EmployeeError::UnknownRole(role) => AuthError::UnknownRole(role.to_string()),
            other => AuthError::Internal(other.to_string()),
        }
    }
}

impl From<auth::PasswordError> for AuthError {
    fn from(err: auth::PasswordError) -> Self {
        match err {
            auth::PasswordError::TooLong { .. } => AuthError::InvalidPassword(err.to_string()),
            auth::PasswordError::HashingFailed(_) => AuthError::Internal(err.to_string()),
        }
    }
}
