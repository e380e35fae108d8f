use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::errors::RecordIdError;
use crate::employee::errors::EmployeeError;
use crate::organization::errors::OrganizationError;

pub mod departments;
pub mod employees;
pub mod health;
pub mod login;
pub mod positions;
pub mod salaries;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<RecordIdError> for ApiError {
    fn from(err: RecordIdError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            // Unknown login and wrong password look the same to clients.
            AuthError::InvalidCredentials | AuthError::AccountNotFound => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            AuthError::Unauthorized => ApiError::Unauthorized(err.to_string()),
            AuthError::BlockedAccount | AuthError::Forbidden => ApiError::Forbidden(err.to_string()),
            AuthError::Conflict(_) => ApiError::Conflict(err.to_string()),
            AuthError::UnknownRole(_) | AuthError::InvalidPassword(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            AuthError::Internal(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::NotFound(_)
            | EmployeeError::NotFoundByUsername(_)
            | EmployeeError::ReferenceNotFound(_) => ApiError::NotFound(err.to_string()),
            EmployeeError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            EmployeeError::InvalidEmployeeId(_)
            | EmployeeError::InvalidLoginName(_)
            | EmployeeError::InvalidPersonName(_)
            | EmployeeError::InvalidBirthDate(_)
            | EmployeeError::UnknownRole(_)
            | EmployeeError::InvalidPassword(_) => ApiError::UnprocessableEntity(err.to_string()),
            EmployeeError::PasswordHashing(_)
            | EmployeeError::DatabaseError(_)
            | EmployeeError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<OrganizationError> for ApiError {
    fn from(err: OrganizationError) -> Self {
        match err {
            OrganizationError::DepartmentNotFound(_)
            | OrganizationError::PositionNotFound(_)
            | OrganizationError::SalaryNotFound(_) => ApiError::NotFound(err.to_string()),
            OrganizationError::TitleAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            OrganizationError::InvalidId(_)
            | OrganizationError::InvalidTitle(_)
            | OrganizationError::InvalidAmount(_)
            | OrganizationError::InvalidRaiseDate(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            OrganizationError::DatabaseError(_) | OrganizationError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
