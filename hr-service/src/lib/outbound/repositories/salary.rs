use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::organization::errors::OrganizationError;
use crate::domain::organization::models::NewSalary;
use crate::domain::organization::models::RaiseDate;
use crate::domain::organization::models::Salary;
use crate::domain::organization::models::SalaryAmount;
use crate::domain::organization::models::SalaryChanges;
use crate::domain::organization::models::SalaryId;
use crate::domain::organization::ports::SalaryRepository;

/// Salaries are stored as integer cents in `amount_cents`.
pub struct PostgresSalaryRepository {
    pool: PgPool,
}

impl PostgresSalaryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SalaryRow {
    id: i64,
    amount_cents: i64,
    raise_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SalaryRow> for Salary {
    fn from(r: SalaryRow) -> Self {
        Salary {
            id: SalaryId(r.id),
            amount: SalaryAmount::from_cents(r.amount_cents),
            raise_date: RaiseDate::from_stored(r.raise_date),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

fn database_error(e: sqlx::Error) -> OrganizationError {
    OrganizationError::DatabaseError(e.to_string())
}

#[async_trait]
impl SalaryRepository for PostgresSalaryRepository {
    async fn create(&self, salary: &NewSalary) -> Result<Salary, OrganizationError> {
        let row = sqlx::query_as::<_, SalaryRow>(
            r#"
            INSERT INTO salaries (amount_cents, raise_date)
            VALUES ($1, $2)
            RETURNING id, amount_cents, raise_date, created_at, updated_at
            "#,
        )
        .bind(salary.amount.cents())
        .bind(salary.raise_date.date())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &SalaryId) -> Result<Option<Salary>, OrganizationError> {
        let row = sqlx::query_as::<_, SalaryRow>(
            "SELECT id, amount_cents, raise_date, created_at, updated_at FROM salaries WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(Salary::from))
    }

    async fn list_all(&self) -> Result<Vec<Salary>, OrganizationError> {
        let rows = sqlx::query_as::<_, SalaryRow>(
            "SELECT id, amount_cents, raise_date, created_at, updated_at FROM salaries ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Salary::from).collect())
    }

    async fn update_fields(
        &self,
        id: &SalaryId,
        changes: &SalaryChanges,
    ) -> Result<Salary, OrganizationError> {
        let row = sqlx::query_as::<_, SalaryRow>(
            r#"
            UPDATE salaries
            SET amount_cents = COALESCE($2, amount_cents),
                raise_date = COALESCE($3, raise_date),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, amount_cents, raise_date, created_at, updated_at
            "#,
        )
        .bind(id.0)
        .bind(changes.amount.map(|a| a.cents()))
        .bind(changes.raise_date.map(|d| d.date()))
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Salary::from)
            .ok_or(OrganizationError::SalaryNotFound(id.to_string()))
    }

    async fn delete(&self, id: &SalaryId) -> Result<(), OrganizationError> {
        let result = sqlx::query("DELETE FROM salaries WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(OrganizationError::SalaryNotFound(id.to_string()));
        }

        Ok(())
    }
}
