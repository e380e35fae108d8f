use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use crate::domain::employee::errors::BirthDateError;
use crate::domain::employee::errors::LoginNameError;
use crate::domain::employee::errors::PersonNameError;
use crate::domain::employee::models::BirthDate;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::PersonName;
use crate::domain::errors::RecordIdError;
use crate::domain::organization::models::DepartmentId;
use crate::domain::organization::models::PositionId;
use crate::domain::organization::models::SalaryId;

mod block_employee;
mod change_role;
mod create_employee;
mod current_employee;
mod delete_employee;
mod get_employee;
mod list_employees;
mod reset_password;
mod update_employee;

pub use block_employee::block_employee;
pub use block_employee::unblock_employee;
pub use change_role::change_role;
pub use create_employee::create_employee;
pub use current_employee::get_current_employee;
pub use current_employee::update_current_employee;
pub use delete_employee::delete_employee;
pub use get_employee::get_employee;
pub use list_employees::list_employees;
pub use reset_password::reset_password;
pub use update_employee::update_employee;

/// Employee as exposed over HTTP. The password hash is never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeData {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub is_blocked: bool,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub department_id: Option<i64>,
    pub position_id: Option<i64>,
    pub salary_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Employee> for EmployeeData {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.0,
            username: employee.username.to_string(),
            role: employee.role.to_string(),
            is_blocked: employee.is_blocked,
            first_name: employee.first_name.to_string(),
            last_name: employee.last_name.to_string(),
            date_of_birth: employee.date_of_birth.date(),
            department_id: employee.department_id.map(|id| id.0),
            position_id: employee.position_id.map(|id| id.0),
            salary_id: employee.salary_id.map(|id| id.0),
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

/// Validation failures of employee request bodies.
#[derive(Debug, Clone, Error)]
enum ParseEmployeeRequestError {
    #[error("Invalid username: {0}")]
    LoginName(#[from] LoginNameError),

    #[error("Invalid name: {0}")]
    PersonName(#[from] PersonNameError),

    #[error("Invalid date of birth: {0}")]
    BirthDate(#[from] BirthDateError),

    #[error("Invalid reference: {0}")]
    Reference(#[from] RecordIdError),

    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Password must be at most {max} bytes, got {actual}")]
    PasswordTooLong { max: usize, actual: usize },
}

impl From<ParseEmployeeRequestError> for ApiError {
    fn from(err: ParseEmployeeRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

fn parse_name(name: Option<String>) -> Result<Option<PersonName>, ParseEmployeeRequestError> {
    Ok(name.map(PersonName::new).transpose()?)
}

fn parse_birth_date(date: Option<NaiveDate>) -> Result<Option<BirthDate>, ParseEmployeeRequestError> {
    let today = Utc::now().date_naive();
    Ok(date.map(|d| BirthDate::new(d, today)).transpose()?)
}

fn parse_password(password: String) -> Result<String, ParseEmployeeRequestError> {
    if password.is_empty() {
        return Err(ParseEmployeeRequestError::EmptyPassword);
    }
    if password.len() > auth::PasswordHasher::MAX_PASSWORD_BYTES {
        return Err(ParseEmployeeRequestError::PasswordTooLong {
            max: auth::PasswordHasher::MAX_PASSWORD_BYTES,
            actual: password.len(),
        });
    }
    Ok(password)
}

fn positive(id: i64) -> Result<i64, RecordIdError> {
    if id <= 0 {
        return Err(RecordIdError::NotPositive(id));
    }
    Ok(id)
}

/// Department, position and salary references carried by request bodies.
struct References {
    department_id: Option<DepartmentId>,
    position_id: Option<PositionId>,
    salary_id: Option<SalaryId>,
}

impl References {
    fn parse(
        department_id: Option<i64>,
        position_id: Option<i64>,
        salary_id: Option<i64>,
    ) -> Result<Self, ParseEmployeeRequestError> {
        Ok(Self {
            department_id: department_id.map(positive).transpose()?.map(DepartmentId),
            position_id: position_id.map(positive).transpose()?.map(PositionId),
            salary_id: salary_id.map(positive).transpose()?.map(SalaryId),
        })
    }
}
