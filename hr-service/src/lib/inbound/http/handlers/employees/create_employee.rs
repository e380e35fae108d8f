use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;

use super::parse_password;
use super::EmployeeData;
use super::ParseEmployeeRequestError;
use super::References;
use crate::domain::employee::models::BirthDate;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::LoginName;
use crate::domain::employee::models::PersonName;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_employee(
    State(state): State<AppState>,
    Json(body): Json<CreateEmployeeRequest>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    state
        .employee_service
        .create_employee(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::CREATED, employee.into()))
}

/// HTTP request body for registering an employee (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateEmployeeRequest {
    username: String,
    password: String,
    first_name: String,
    last_name: String,
    date_of_birth: NaiveDate,
    department_id: Option<i64>,
    position_id: Option<i64>,
    salary_id: Option<i64>,
}

impl CreateEmployeeRequest {
    fn try_into_command(self) -> Result<CreateEmployeeCommand, ParseEmployeeRequestError> {
        let references = References::parse(self.department_id, self.position_id, self.salary_id)?;

        Ok(CreateEmployeeCommand {
            username: LoginName::new(self.username)?,
            password: parse_password(self.password)?,
            first_name: PersonName::new(self.first_name)?,
            last_name: PersonName::new(self.last_name)?,
            date_of_birth: BirthDate::new(self.date_of_birth, Utc::now().date_naive())?,
            department_id: references.department_id,
            position_id: references.position_id,
            salary_id: references.salary_id,
        })
    }
}
