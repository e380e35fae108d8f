use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::BirthDate;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeChanges;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::LoginName;
use crate::domain::employee::models::NewEmployee;
use crate::domain::employee::models::PersonName;
use crate::domain::employee::models::Role;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::organization::models::DepartmentId;
use crate::domain::organization::models::PositionId;
use crate::domain::organization::models::SalaryId;

const EMPLOYEE_COLUMNS: &str = "id, username, password_hash, role, is_blocked, first_name, \
     last_name, date_of_birth, department_id, position_id, salary_id, created_at, updated_at";

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    username: String,
    password_hash: String,
    role: String,
    is_blocked: bool,
    first_name: String,
    last_name: String,
    date_of_birth: NaiveDate,
    department_id: Option<i64>,
    position_id: Option<i64>,
    salary_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = EmployeeError;

    fn try_from(r: EmployeeRow) -> Result<Self, Self::Error> {
        Ok(Employee {
            id: EmployeeId(r.id),
            username: LoginName::new(r.username)?,
            password_hash: r.password_hash,
            role: r.role.parse::<Role>()?,
            is_blocked: r.is_blocked,
            first_name: PersonName::new(r.first_name)?,
            last_name: PersonName::new(r.last_name)?,
            date_of_birth: BirthDate::from_stored(r.date_of_birth),
            department_id: r.department_id.map(DepartmentId),
            position_id: r.position_id.map(PositionId),
            salary_id: r.salary_id.map(SalaryId),
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> EmployeeError {
    EmployeeError::DatabaseError(e.to_string())
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, employee: NewEmployee) -> Result<Employee, EmployeeError> {
        let query = format!(
            r#"
            INSERT INTO employees (username, password_hash, role, is_blocked, first_name,
                                   last_name, date_of_birth, department_id, position_id, salary_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            EMPLOYEE_COLUMNS
        );

        let row = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(employee.username.as_str())
            .bind(&employee.password_hash)
            .bind(employee.role.as_str())
            .bind(employee.is_blocked)
            .bind(employee.first_name.as_str())
            .bind(employee.last_name.as_str())
            .bind(employee.date_of_birth.date())
            .bind(employee.department_id.map(|id| id.0))
            .bind(employee.position_id.map(|id| id.0))
            .bind(employee.salary_id.map(|id| id.0))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation()
                        && db_err.constraint() == Some("employees_username_key")
                    {
                        return EmployeeError::UsernameAlreadyExists(
                            employee.username.to_string(),
                        );
                    }
                    if db_err.is_foreign_key_violation() {
                        return EmployeeError::ReferenceNotFound(
                            db_err.constraint().unwrap_or("reference").to_string(),
                        );
                    }
                }
                database_error(e)
            })?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        let query = format!("SELECT {} FROM employees WHERE id = $1", EMPLOYEE_COLUMNS);

        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .map(Employee::try_from)
            .transpose()
    }

    async fn find_by_username(
        &self,
        username: &LoginName,
    ) -> Result<Option<Employee>, EmployeeError> {
        let query = format!(
            "SELECT {} FROM employees WHERE username = $1",
            EMPLOYEE_COLUMNS
        );

        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .map(Employee::try_from)
            .transpose()
    }

    async fn exists_matching(
        &self,
        username: &LoginName,
        roles: &[Role],
    ) -> Result<bool, EmployeeError> {
        let roles: Vec<&str> = roles.iter().map(Role::as_str).collect();

        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM employees
                WHERE username = $1
                  AND (cardinality($2::text[]) = 0 OR role = ANY($2))
            )
            "#,
        )
        .bind(username.as_str())
        .bind(&roles)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)
    }

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        let query = format!("SELECT {} FROM employees ORDER BY id", EMPLOYEE_COLUMNS);

        sqlx::query_as::<_, EmployeeRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?
            .into_iter()
            .map(Employee::try_from)
            .collect()
    }

    async fn update_fields(
        &self,
        id: &EmployeeId,
        changes: EmployeeChanges,
    ) -> Result<Employee, EmployeeError> {
        let query = format!(
            r#"
            UPDATE employees
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                date_of_birth = COALESCE($4, date_of_birth),
                department_id = COALESCE($5, department_id),
                position_id = COALESCE($6, position_id),
                salary_id = COALESCE($7, salary_id),
                role = COALESCE($8, role),
                password_hash = COALESCE($9, password_hash),
                is_blocked = COALESCE($10, is_blocked),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            EMPLOYEE_COLUMNS
        );

        let row = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id.0)
            .bind(changes.first_name.as_ref().map(PersonName::as_str))
            .bind(changes.last_name.as_ref().map(PersonName::as_str))
            .bind(changes.date_of_birth.map(|d| d.date()))
            .bind(changes.department_id.map(|d| d.0))
            .bind(changes.position_id.map(|p| p.0))
            .bind(changes.salary_id.map(|s| s.0))
            .bind(changes.role.map(|r| r.as_str()))
            .bind(changes.password_hash.as_deref())
            .bind(changes.is_blocked)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_foreign_key_violation() {
                        return EmployeeError::ReferenceNotFound(
                            db_err.constraint().unwrap_or("reference").to_string(),
                        );
                    }
                }
                database_error(e)
            })?;

        row.map(Employee::try_from)
            .transpose()?
            .ok_or(EmployeeError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(EmployeeError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
