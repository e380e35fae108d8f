use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::organization::errors::OrganizationError;
use crate::domain::organization::models::NewSalary;
use crate::domain::organization::models::RaiseDate;
use crate::domain::organization::models::Salary;
use crate::domain::organization::models::SalaryAmount;
use crate::domain::organization::models::SalaryChanges;
use crate::domain::organization::models::SalaryId;
use crate::domain::organization::ports::OrganizationServicePort;
use crate::inbound::http::router::AppState;

/// Salary record as exposed over HTTP; `amount` is a decimal value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryData {
    pub id: i64,
    pub amount: f64,
    pub raise_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Salary> for SalaryData {
    fn from(salary: &Salary) -> Self {
        Self {
            id: salary.id.0,
            amount: salary.amount.as_decimal(),
            raise_date: salary.raise_date.date(),
            created_at: salary.created_at,
            updated_at: salary.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateSalaryRequest {
    pub amount: f64,
    pub raise_date: NaiveDate,
}

impl CreateSalaryRequest {
    fn try_into_new_salary(self) -> Result<NewSalary, OrganizationError> {
        let today = Utc::now().date_naive();
        Ok(NewSalary {
            amount: SalaryAmount::from_decimal(self.amount)?,
            raise_date: RaiseDate::new(self.raise_date, today)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateSalaryRequest {
    pub amount: Option<f64>,
    pub raise_date: Option<NaiveDate>,
}

impl UpdateSalaryRequest {
    fn try_into_changes(self) -> Result<SalaryChanges, OrganizationError> {
        let today = Utc::now().date_naive();
        Ok(SalaryChanges {
            amount: self.amount.map(SalaryAmount::from_decimal).transpose()?,
            raise_date: self
                .raise_date
                .map(|date| RaiseDate::new(date, today))
                .transpose()?,
        })
    }
}

pub async fn create_salary(
    State(state): State<AppState>,
    Json(req): Json<CreateSalaryRequest>,
) -> Result<ApiSuccess<SalaryData>, ApiError> {
    let salary = req.try_into_new_salary()?;

    state
        .organization_service
        .create_salary(salary)
        .await
        .map_err(ApiError::from)
        .map(|ref salary| ApiSuccess::new(StatusCode::CREATED, salary.into()))
}

pub async fn list_salaries(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<SalaryData>>, ApiError> {
    state
        .organization_service
        .list_salaries()
        .await
        .map_err(ApiError::from)
        .map(|salaries| {
            ApiSuccess::new(StatusCode::OK, salaries.iter().map(SalaryData::from).collect())
        })
}

pub async fn get_salary(
    State(state): State<AppState>,
    Path(salary_id): Path<String>,
) -> Result<ApiSuccess<SalaryData>, ApiError> {
    let salary_id = SalaryId::from_string(&salary_id)?;

    state
        .organization_service
        .get_salary(&salary_id)
        .await
        .map_err(ApiError::from)
        .map(|ref salary| ApiSuccess::new(StatusCode::OK, salary.into()))
}

pub async fn update_salary(
    State(state): State<AppState>,
    Path(salary_id): Path<String>,
    Json(req): Json<UpdateSalaryRequest>,
) -> Result<ApiSuccess<SalaryData>, ApiError> {
    let salary_id = SalaryId::from_string(&salary_id)?;
    let changes = req.try_into_changes()?;

    state
        .organization_service
        .update_salary(&salary_id, changes)
        .await
        .map_err(ApiError::from)
        .map(|ref salary| ApiSuccess::new(StatusCode::OK, salary.into()))
}

pub async fn delete_salary(
    State(state): State<AppState>,
    Path(salary_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let salary_id = SalaryId::from_string(&salary_id)?;

    state
        .organization_service
        .delete_salary(&salary_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
