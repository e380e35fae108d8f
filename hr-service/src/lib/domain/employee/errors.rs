use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::errors::RecordIdError;

/// Error for LoginName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginNameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for first and last name validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersonNameError {
    #[error("Name too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for date of birth validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BirthDateError {
    #[error("Date of birth must be in the past, got {0}")]
    NotInPast(NaiveDate),
}

/// Error for role names outside the closed set
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// Top-level error for all employee-related operations
#[derive(Debug, Clone, Error)]
pub enum EmployeeError {
    // Value object validation errors
    #[error("Invalid employee ID: {0}")]
    InvalidEmployeeId(#[from] RecordIdError),

    #[error("Invalid username: {0}")]
    InvalidLoginName(#[from] LoginNameError),

    #[error("Invalid name: {0}")]
    InvalidPersonName(#[from] PersonNameError),

    #[error("Invalid date of birth: {0}")]
    InvalidBirthDate(#[from] BirthDateError),

    #[error("{0}")]
    UnknownRole(#[from] RoleError),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),

    // Domain-level errors
    #[error("Employee not found: {0}")]
    NotFound(String),

    #[error("Employee not found with username: {0}")]
    NotFoundByUsername(String),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Referenced record not found: {0}")]
    ReferenceNotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for EmployeeError {
    fn from(err: anyhow::Error) -> Self {
        EmployeeError::Unknown(err.to_string())
    }
}
