use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;

use crate::domain::errors::RecordIdError;
use crate::domain::organization::errors::RaiseDateError;
use crate::domain::organization::errors::SalaryAmountError;
use crate::domain::organization::errors::TitleError;

/// Department unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DepartmentId(pub i64);

impl DepartmentId {
    /// Parse a department ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not an integer
    /// * `NotPositive` - Zero or negative
    pub fn from_string(s: &str) -> Result<Self, RecordIdError> {
        RecordIdError::parse(s).map(DepartmentId)
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Position unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositionId(pub i64);

impl PositionId {
    pub fn from_string(s: &str) -> Result<Self, RecordIdError> {
        RecordIdError::parse(s).map(PositionId)
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Salary unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SalaryId(pub i64);

impl SalaryId {
    pub fn from_string(s: &str) -> Result<Self, RecordIdError> {
        RecordIdError::parse(s).map(SalaryId)
    }
}

impl fmt::Display for SalaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Title of a department or position.
///
/// Length limits differ per entity, so construction goes through
/// `for_department` or `for_position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    const MIN_LENGTH: usize = 2;
    const DEPARTMENT_MAX_LENGTH: usize = 256;
    const POSITION_MAX_LENGTH: usize = 100;

    /// Create a validated department title (2-256 characters).
    pub fn for_department(title: String) -> Result<Self, TitleError> {
        Self::with_valid_length(title, Self::DEPARTMENT_MAX_LENGTH).map(Self)
    }

    /// Create a validated position title (2-100 characters).
    pub fn for_position(title: String) -> Result<Self, TitleError> {
        Self::with_valid_length(title, Self::POSITION_MAX_LENGTH).map(Self)
    }

    fn with_valid_length(title: String, max: usize) -> Result<String, TitleError> {
        let title = title.trim().to_string();
        let length = title.chars().count();
        if length < Self::MIN_LENGTH {
            Err(TitleError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > max {
            Err(TitleError::TooLong {
                max,
                actual: length,
            })
        } else {
            Ok(title)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Monetary salary amount, held in minor units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SalaryAmount(i64);

impl SalaryAmount {
    /// Largest accepted amount in cents: 9 digits with 2 decimals.
    const MAX_CENTS: i64 = 999_999_999;

    /// Create an amount from a decimal value such as `20000.98`.
    ///
    /// # Errors
    /// * `NotPositive` - Zero, negative or not a number
    /// * `TooManyDecimals` - More than 2 decimal places
    /// * `TooLarge` - More than 9 digits in total
    pub fn from_decimal(amount: f64) -> Result<Self, SalaryAmountError> {
        if !(amount > 0.0) || !amount.is_finite() {
            return Err(SalaryAmountError::NotPositive(amount));
        }

        let scaled = amount * 100.0;
        let cents = scaled.round();
        if (scaled - cents).abs() > 1e-6 {
            return Err(SalaryAmountError::TooManyDecimals(amount));
        }
        if cents > Self::MAX_CENTS as f64 {
            return Err(SalaryAmountError::TooLarge(amount));
        }

        Ok(Self(cents as i64))
    }

    /// Wrap an amount already stored in cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Date of the next scheduled salary raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaiseDate(NaiveDate);

impl RaiseDate {
    /// Create a raise date, requiring it to be strictly after `today`.
    ///
    /// # Errors
    /// * `NotInFuture` - Date is today or earlier
    pub fn new(date: NaiveDate, today: NaiveDate) -> Result<Self, RaiseDateError> {
        if date > today {
            Ok(Self(date))
        } else {
            Err(RaiseDateError::NotInFuture(date))
        }
    }

    /// Wrap a date loaded from storage without re-validating it.
    ///
    /// Stored raise dates naturally fall into the past over time.
    pub fn from_stored(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// Department record.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: DepartmentId,
    pub title: Title,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Position (job title) record.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub id: PositionId,
    pub title: Title,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Salary record.
#[derive(Debug, Clone, PartialEq)]
pub struct Salary {
    pub id: SalaryId,
    pub amount: SalaryAmount,
    pub raise_date: RaiseDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new salary record.
#[derive(Debug, Clone)]
pub struct NewSalary {
    pub amount: SalaryAmount,
    pub raise_date: RaiseDate,
}

/// Partial salary update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct SalaryChanges {
    pub amount: Option<SalaryAmount>,
    pub raise_date: Option<RaiseDate>,
}
