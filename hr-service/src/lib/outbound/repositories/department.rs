use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::organization::errors::OrganizationError;
use crate::domain::organization::models::Department;
use crate::domain::organization::models::DepartmentId;
use crate::domain::organization::models::Title;
use crate::domain::organization::ports::DepartmentRepository;

pub struct PostgresDepartmentRepository {
    pool: PgPool,
}

impl PostgresDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DepartmentRow {
    id: i64,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<DepartmentRow> for Department {
    type Error = OrganizationError;

    fn try_from(r: DepartmentRow) -> Result<Self, Self::Error> {
        Ok(Department {
            id: DepartmentId(r.id),
            title: Title::for_department(r.title)?,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

fn write_error(e: sqlx::Error, title: &Title) -> OrganizationError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return OrganizationError::TitleAlreadyExists(title.to_string());
        }
    }
    OrganizationError::DatabaseError(e.to_string())
}

#[async_trait]
impl DepartmentRepository for PostgresDepartmentRepository {
    async fn create(&self, title: &Title) -> Result<Department, OrganizationError> {
        sqlx::query_as::<_, DepartmentRow>(
            r#"
            INSERT INTO departments (title)
            VALUES ($1)
            RETURNING id, title, created_at, updated_at
            "#,
        )
        .bind(title.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, title))?
        .try_into()
    }

    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, OrganizationError> {
        sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, title, created_at, updated_at FROM departments WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| OrganizationError::DatabaseError(e.to_string()))?
        .map(Department::try_from)
        .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Department>, OrganizationError> {
        sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, title, created_at, updated_at FROM departments ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OrganizationError::DatabaseError(e.to_string()))?
        .into_iter()
        .map(Department::try_from)
        .collect()
    }

    async fn update_title(
        &self,
        id: &DepartmentId,
        title: &Title,
    ) -> Result<Department, OrganizationError> {
        sqlx::query_as::<_, DepartmentRow>(
            r#"
            UPDATE departments
            SET title = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, created_at, updated_at
            "#,
        )
        .bind(id.0)
        .bind(title.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, title))?
        .map(Department::try_from)
        .transpose()?
        .ok_or(OrganizationError::DepartmentNotFound(id.to_string()))
    }

    async fn delete(&self, id: &DepartmentId) -> Result<(), OrganizationError> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| OrganizationError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(OrganizationError::DepartmentNotFound(id.to_string()));
        }

        Ok(())
    }
}
