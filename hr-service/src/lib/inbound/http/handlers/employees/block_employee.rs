use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::EmployeeData;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn block_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let employee_id = EmployeeId::from_string(&employee_id)?;

    state
        .employee_service
        .block(&employee_id)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::OK, employee.into()))
}

pub async fn unblock_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let employee_id = EmployeeId::from_string(&employee_id)?;

    state
        .employee_service
        .unblock(&employee_id)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::OK, employee.into()))
}
