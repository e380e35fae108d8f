use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::errors::RecordIdError;

/// Error for department and position title validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("Title too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for salary amount validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SalaryAmountError {
    #[error("Salary amount must be greater than zero, got {0}")]
    NotPositive(f64),

    #[error("Salary amount allows at most 2 decimal places, got {0}")]
    TooManyDecimals(f64),

    #[error("Salary amount exceeds 9 digits: {0}")]
    TooLarge(f64),
}

/// Error for salary raise date validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RaiseDateError {
    #[error("Raise date must be in the future, got {0}")]
    NotInFuture(NaiveDate),
}

/// Top-level error for department, position and salary operations
#[derive(Debug, Clone, Error)]
pub enum OrganizationError {
    #[error("Invalid identifier: {0}")]
    InvalidId(#[from] RecordIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] TitleError),

    #[error("Invalid salary amount: {0}")]
    InvalidAmount(#[from] SalaryAmountError),

    #[error("Invalid raise date: {0}")]
    InvalidRaiseDate(#[from] RaiseDateError),

    #[error("Department not found: {0}")]
    DepartmentNotFound(String),

    #[error("Position not found: {0}")]
    PositionNotFound(String),

    #[error("Salary not found: {0}")]
    SalaryNotFound(String),

    #[error("Title already exists: {0}")]
    TitleAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for OrganizationError {
    fn from(err: anyhow::Error) -> Self {
        OrganizationError::Unknown(err.to_string())
    }
}
