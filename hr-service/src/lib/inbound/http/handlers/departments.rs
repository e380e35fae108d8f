use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::organization::errors::OrganizationError;
use crate::domain::organization::models::Department;
use crate::domain::organization::models::DepartmentId;
use crate::domain::organization::models::Title;
use crate::domain::organization::ports::OrganizationServicePort;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentData {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Department> for DepartmentData {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id.0,
            title: department.title.to_string(),
            created_at: department.created_at,
            updated_at: department.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateDepartmentRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDepartmentRequest {
    pub title: Option<String>,
}

pub async fn create_department(
    State(state): State<AppState>,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<ApiSuccess<DepartmentData>, ApiError> {
    let title = Title::for_department(req.title).map_err(OrganizationError::from)?;

    state
        .organization_service
        .create_department(title)
        .await
        .map_err(ApiError::from)
        .map(|ref department| ApiSuccess::new(StatusCode::CREATED, department.into()))
}

pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<DepartmentData>>, ApiError> {
    state
        .organization_service
        .list_departments()
        .await
        .map_err(ApiError::from)
        .map(|departments| {
            ApiSuccess::new(
                StatusCode::OK,
                departments.iter().map(DepartmentData::from).collect(),
            )
        })
}

pub async fn get_department(
    State(state): State<AppState>,
    Path(department_id): Path<String>,
) -> Result<ApiSuccess<DepartmentData>, ApiError> {
    let department_id = DepartmentId::from_string(&department_id)?;

    state
        .organization_service
        .get_department(&department_id)
        .await
        .map_err(ApiError::from)
        .map(|ref department| ApiSuccess::new(StatusCode::OK, department.into()))
}

pub async fn update_department(
    State(state): State<AppState>,
    Path(department_id): Path<String>,
    Json(req): Json<UpdateDepartmentRequest>,
) -> Result<ApiSuccess<DepartmentData>, ApiError> {
    let department_id = DepartmentId::from_string(&department_id)?;
    let title = req
        .title
        .map(Title::for_department)
        .transpose()
        .map_err(OrganizationError::from)?;

    state
        .organization_service
        .update_department(&department_id, title)
        .await
        .map_err(ApiError::from)
        .map(|ref department| ApiSuccess::new(StatusCode::OK, department.into()))
}

pub async fn delete_department(
    State(state): State<AppState>,
    Path(department_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let department_id = DepartmentId::from_string(&department_id)?;

    state
        .organization_service
        .delete_department(&department_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
