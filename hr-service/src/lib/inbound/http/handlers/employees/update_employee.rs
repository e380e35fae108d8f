use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::parse_birth_date;
use super::parse_name;
use super::EmployeeData;
use super::ParseEmployeeRequestError;
use super::References;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an employee (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub department_id: Option<i64>,
    pub position_id: Option<i64>,
    pub salary_id: Option<i64>,
}

impl UpdateEmployeeRequest {
    fn try_into_command(self) -> Result<UpdateEmployeeCommand, ParseEmployeeRequestError> {
        let references = References::parse(self.department_id, self.position_id, self.salary_id)?;

        Ok(UpdateEmployeeCommand {
            first_name: parse_name(self.first_name)?,
            last_name: parse_name(self.last_name)?,
            date_of_birth: parse_birth_date(self.date_of_birth)?,
            department_id: references.department_id,
            position_id: references.position_id,
            salary_id: references.salary_id,
        })
    }
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let employee_id = EmployeeId::from_string(&employee_id)?;
    let command = req.try_into_command()?;

    state
        .employee_service
        .update_employee(&employee_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::OK, employee.into()))
}
