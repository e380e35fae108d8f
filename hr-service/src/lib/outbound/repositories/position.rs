use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::organization::errors::OrganizationError;
use crate::domain::organization::models::Position;
use crate::domain::organization::models::PositionId;
use crate::domain::organization::models::Title;
use crate::domain::organization::ports::PositionRepository;

pub struct PostgresPositionRepository {
    pool: PgPool,
}

impl PostgresPositionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PositionRow {
    id: i64,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PositionRow> for Position {
    type Error = OrganizationError;

    fn try_from(r: PositionRow) -> Result<Self, Self::Error> {
        Ok(Position {
            id: PositionId(r.id),
            title: Title::for_position(r.title)?,
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
impl PositionRepository for PostgresPositionRepository {
    async fn create(&self, title: &Title) -> Result<Position, OrganizationError> {
        sqlx::query_as::<_, PositionRow>(
            r#"
            INSERT INTO positions (title)
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

    async fn find_by_id(&self, id: &PositionId) -> Result<Option<Position>, OrganizationError> {
        sqlx::query_as::<_, PositionRow>(
            "SELECT id, title, created_at, updated_at FROM positions WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| OrganizationError::DatabaseError(e.to_string()))?
        .map(Position::try_from)
        .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Position>, OrganizationError> {
        sqlx::query_as::<_, PositionRow>(
            "SELECT id, title, created_at, updated_at FROM positions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OrganizationError::DatabaseError(e.to_string()))?
        .into_iter()
        .map(Position::try_from)
        .collect()
    }

    async fn update_title(
        &self,
        id: &PositionId,
        title: &Title,
    ) -> Result<Position, OrganizationError> {
        sqlx::query_as::<_, PositionRow>(
            r#"
            UPDATE positions
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
        .map(Position::try_from)
        .transpose()?
        .ok_or(OrganizationError::PositionNotFound(id.to_string()))
    }

    async fn delete(&self, id: &PositionId) -> Result<(), OrganizationError> {
        let result = sqlx::query("DELETE FROM positions WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| OrganizationError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(OrganizationError::PositionNotFound(id.to_string()));
        }

        Ok(())
    }
}
