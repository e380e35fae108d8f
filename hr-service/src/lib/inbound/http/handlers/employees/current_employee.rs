use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use super::parse_birth_date;
use super::parse_name;
use super::EmployeeData;
use super::ParseEmployeeRequestError;
use crate::domain::employee::models::EmployeeProfile;
use crate::domain::employee::models::UpdateSelfCommand;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::handlers::salaries::SalaryData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentEmployee;
use crate::inbound::http::router::AppState;

/// The caller's own record with referenced titles resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeProfileData {
    #[serde(flatten)]
    pub employee: EmployeeData,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<SalaryData>,
}

impl From<&EmployeeProfile> for EmployeeProfileData {
    fn from(profile: &EmployeeProfile) -> Self {
        Self {
            employee: (&profile.employee).into(),
            department: profile.department.as_ref().map(|d| d.title.to_string()),
            position: profile.position.as_ref().map(|p| p.title.to_string()),
            salary: profile.salary.as_ref().map(SalaryData::from),
        }
    }
}

pub async fn get_current_employee(
    State(state): State<AppState>,
    CurrentEmployee(employee): CurrentEmployee,
) -> Result<ApiSuccess<EmployeeProfileData>, ApiError> {
    state
        .employee_service
        .get_profile(employee)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}

/// Fields an employee may change on their own record.
#[derive(Debug, Deserialize)]
pub struct UpdateSelfRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl UpdateSelfRequest {
    fn try_into_command(self) -> Result<UpdateSelfCommand, ParseEmployeeRequestError> {
        Ok(UpdateSelfCommand {
            first_name: parse_name(self.first_name)?,
            last_name: parse_name(self.last_name)?,
            date_of_birth: parse_birth_date(self.date_of_birth)?,
        })
    }
}

pub async fn update_current_employee(
    State(state): State<AppState>,
    CurrentEmployee(employee): CurrentEmployee,
    Json(req): Json<UpdateSelfRequest>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let command = req.try_into_command()?;

    state
        .employee_service
        .update_self(&employee, command)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::OK, employee.into()))
}
