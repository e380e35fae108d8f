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
use crate::domain::organization::models::Position;
use crate::domain::organization::models::PositionId;
use crate::domain::organization::models::Title;
use crate::domain::organization::ports::OrganizationServicePort;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionData {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Position> for PositionData {
    fn from(position: &Position) -> Self {
        Self {
            id: position.id.0,
            title: position.title.to_string(),
            created_at: position.created_at,
            updated_at: position.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePositionRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePositionRequest {
    pub title: Option<String>,
}

pub async fn create_position(
    State(state): State<AppState>,
    Json(req): Json<CreatePositionRequest>,
) -> Result<ApiSuccess<PositionData>, ApiError> {
    let title = Title::for_position(req.title).map_err(OrganizationError::from)?;

    state
        .organization_service
        .create_position(title)
        .await
        .map_err(ApiError::from)
        .map(|ref position| ApiSuccess::new(StatusCode::CREATED, position.into()))
}

pub async fn list_positions(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<PositionData>>, ApiError> {
    state
        .organization_service
        .list_positions()
        .await
        .map_err(ApiError::from)
        .map(|positions| {
            ApiSuccess::new(
                StatusCode::OK,
                positions.iter().map(PositionData::from).collect(),
            )
        })
}

pub async fn get_position(
    State(state): State<AppState>,
    Path(position_id): Path<String>,
) -> Result<ApiSuccess<PositionData>, ApiError> {
    let position_id = PositionId::from_string(&position_id)?;

    state
        .organization_service
        .get_position(&position_id)
        .await
        .map_err(ApiError::from)
        .map(|ref position| ApiSuccess::new(StatusCode::OK, position.into()))
}

pub async fn update_position(
    State(state): State<AppState>,
    Path(position_id): Path<String>,
    Json(req): Json<UpdatePositionRequest>,
) -> Result<ApiSuccess<PositionData>, ApiError> {
    let position_id = PositionId::from_string(&position_id)?;
    let title = req
        .title
        .map(Title::for_position)
        .transpose()
        .map_err(OrganizationError::from)?;

    state
        .organization_service
        .update_position(&position_id, title)
        .await
        .map_err(ApiError::from)
        .map(|ref position| ApiSuccess::new(StatusCode::OK, position.into()))
}

pub async fn delete_position(
    State(state): State<AppState>,
    Path(position_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let position_id = PositionId::from_string(&position_id)?;

    state
        .organization_service
        .delete_position(&position_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
