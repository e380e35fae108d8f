use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;

use crate::domain::employee::errors::BirthDateError;
use crate::domain::employee::errors::LoginNameError;
use crate::domain::employee::errors::PersonNameError;
use crate::domain::employee::errors::RoleError;
use crate::domain::errors::RecordIdError;
use crate::domain::organization::models::Department;
use crate::domain::organization::models::DepartmentId;
use crate::domain::organization::models::Position;
use crate::domain::organization::models::PositionId;
use crate::domain::organization::models::Salary;
use crate::domain::organization::models::SalaryId;

/// Employee aggregate entity.
///
/// Doubles as the login account: `username`, `password_hash`, `role` and
/// `is_blocked` drive authentication and authorization.
#[derive(Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub username: LoginName,
    pub password_hash: String,
    pub role: Role,
    pub is_blocked: bool,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub date_of_birth: BirthDate,
    pub department_id: Option<DepartmentId>,
    pub position_id: Option<PositionId>,
    pub salary_id: Option<SalaryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Whether the employee's role is in `roles`. An empty list admits every role.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.is_empty() || roles.contains(&self.role)
    }
}

impl fmt::Debug for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Employee")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .field("is_blocked", &self.is_blocked)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("date_of_birth", &self.date_of_birth)
            .field("department_id", &self.department_id)
            .field("position_id", &self.position_id)
            .field("salary_id", &self.salary_id)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Employee unique identifier type, assigned by persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(pub i64);

impl EmployeeId {
    /// Parse an employee ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not an integer
    /// * `NotPositive` - Zero or negative
    pub fn from_string(s: &str) -> Result<Self, RecordIdError> {
        RecordIdError::parse(s).map(EmployeeId)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login name value type.
///
/// Case-sensitive and compared exactly; 2-150 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoginName(String);

impl LoginName {
    const MIN_LENGTH: usize = 2;
    const MAX_LENGTH: usize = 150;

    /// Create a new valid login name.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 2 characters
    /// * `TooLong` - More than 150 characters
    pub fn new(username: String) -> Result<Self, LoginNameError> {
        Self::with_valid_length(username).map(Self)
    }

    fn with_valid_length(username: String) -> Result<String, LoginNameError> {
        let length = username.chars().count();
        if length < Self::MIN_LENGTH {
            Err(LoginNameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(LoginNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(username)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// First or last name; surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    const MIN_LENGTH: usize = 2;
    const MAX_LENGTH: usize = 150;

    pub fn new(name: String) -> Result<Self, PersonNameError> {
        let name = name.trim().to_string();
        let length = name.chars().count();
        if length < Self::MIN_LENGTH {
            Err(PersonNameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(PersonNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Date of birth, strictly before the day it was validated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// # Errors
    /// * `NotInPast` - `date` is today or later
    pub fn new(date: NaiveDate, today: NaiveDate) -> Result<Self, BirthDateError> {
        if date < today {
            Ok(Self(date))
        } else {
            Err(BirthDateError::NotInPast(date))
        }
    }

    /// Wrap a date read back from storage without re-validating it.
    pub fn from_stored(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// Account role.
///
/// Access checks are set-membership tests against an allow-list; roles have
/// no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Admin,
    Staff,
    #[default]
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Employee => "employee",
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "staff" => Ok(Role::Staff),
            "employee" => Ok(Role::Employee),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of an employee about to be persisted. The id and timestamps are
/// assigned by storage.
#[derive(Clone)]
pub struct NewEmployee {
    pub username: LoginName,
    pub password_hash: String,
    pub role: Role,
    pub is_blocked: bool,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub date_of_birth: BirthDate,
    pub department_id: Option<DepartmentId>,
    pub position_id: Option<PositionId>,
    pub salary_id: Option<SalaryId>,
}

impl fmt::Debug for NewEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewEmployee")
            .field("username", &self.username)
            .field("role", &self.role)
            .field("is_blocked", &self.is_blocked)
            .finish_non_exhaustive()
    }
}

/// Partial update of a stored employee. `None` leaves the field unchanged.
#[derive(Clone, Default, PartialEq)]
pub struct EmployeeChanges {
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub date_of_birth: Option<BirthDate>,
    pub department_id: Option<DepartmentId>,
    pub position_id: Option<PositionId>,
    pub salary_id: Option<SalaryId>,
    pub role: Option<Role>,
    pub password_hash: Option<String>,
    pub is_blocked: Option<bool>,
}

impl EmployeeChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy every present field onto `employee`.
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(first_name) = &self.first_name {
            employee.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            employee.last_name = last_name.clone();
        }
        if let Some(date_of_birth) = self.date_of_birth {
            employee.date_of_birth = date_of_birth;
        }
        if let Some(department_id) = self.department_id {
            employee.department_id = Some(department_id);
        }
        if let Some(position_id) = self.position_id {
            employee.position_id = Some(position_id);
        }
        if let Some(salary_id) = self.salary_id {
            employee.salary_id = Some(salary_id);
        }
        if let Some(role) = self.role {
            employee.role = role;
        }
        if let Some(password_hash) = &self.password_hash {
            employee.password_hash = password_hash.clone();
        }
        if let Some(is_blocked) = self.is_blocked {
            employee.is_blocked = is_blocked;
        }
    }
}

impl fmt::Debug for EmployeeChanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployeeChanges")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("date_of_birth", &self.date_of_birth)
            .field("department_id", &self.department_id)
            .field("position_id", &self.position_id)
            .field("salary_id", &self.salary_id)
            .field("role", &self.role)
            .field("password_hash", &self.password_hash.as_ref().map(|_| "<redacted>"))
            .field("is_blocked", &self.is_blocked)
            .finish()
    }
}

/// Command to register a new employee with domain types.
///
/// New accounts always start as unblocked `employee`s; roles are granted
/// afterwards by an administrator.
pub struct CreateEmployeeCommand {
    pub username: LoginName,
    pub password: String,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub date_of_birth: BirthDate,
    pub department_id: Option<DepartmentId>,
    pub position_id: Option<PositionId>,
    pub salary_id: Option<SalaryId>,
}

/// Administrative update of an employee's personal and organizational data.
#[derive(Debug, Default)]
pub struct UpdateEmployeeCommand {
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub date_of_birth: Option<BirthDate>,
    pub department_id: Option<DepartmentId>,
    pub position_id: Option<PositionId>,
    pub salary_id: Option<SalaryId>,
}

/// Update an employee may apply to their own record.
#[derive(Debug, Default)]
pub struct UpdateSelfCommand {
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub date_of_birth: Option<BirthDate>,
}

/// Employee together with the records it references.
#[derive(Debug, Clone)]
pub struct EmployeeProfile {
    pub employee: Employee,
    pub department: Option<Department>,
    pub position: Option<Position>,
    pub salary: Option<Salary>,
}
