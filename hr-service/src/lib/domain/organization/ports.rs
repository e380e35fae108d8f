use async_trait::async_trait;

use crate::domain::organization::errors::OrganizationError;
use crate::domain::organization::models::Department;
use crate::domain::organization::models::DepartmentId;
use crate::domain::organization::models::NewSalary;
use crate::domain::organization::models::Position;
use crate::domain::organization::models::PositionId;
use crate::domain::organization::models::Salary;
use crate::domain::organization::models::SalaryChanges;
use crate::domain::organization::models::SalaryId;
use crate::domain::organization::models::Title;

/// Port for department, position and salary operations.
#[async_trait]
pub trait OrganizationServicePort: Send + Sync + 'static {
    /// Create a department.
    ///
    /// # Errors
    /// * `TitleAlreadyExists` - A department with this title exists
    /// * `DatabaseError` - Database operation failed
    async fn create_department(&self, title: Title) -> Result<Department, OrganizationError>;

    /// List all departments.
    async fn list_departments(&self) -> Result<Vec<Department>, OrganizationError>;

    /// Retrieve a department.
    ///
    /// # Errors
    /// * `DepartmentNotFound` - No department with this id
    async fn get_department(&self, id: &DepartmentId) -> Result<Department, OrganizationError>;

    /// Rename a department. `None` keeps the current title.
    ///
    /// # Errors
    /// * `DepartmentNotFound` - No department with this id
    /// * `TitleAlreadyExists` - Another department has this title
    async fn update_department(
        &self,
        id: &DepartmentId,
        title: Option<Title>,
    ) -> Result<Department, OrganizationError>;

    /// Delete a department. Employees referencing it keep no department.
    ///
    /// # Errors
    /// * `DepartmentNotFound` - No department with this id
    async fn delete_department(&self, id: &DepartmentId) -> Result<(), OrganizationError>;

    /// Create a position.
    ///
    /// # Errors
    /// * `TitleAlreadyExists` - A position with this title exists
    async fn create_position(&self, title: Title) -> Result<Position, OrganizationError>;

    /// List all positions.
    async fn list_positions(&self) -> Result<Vec<Position>, OrganizationError>;

    /// Retrieve a position.
    ///
    /// # Errors
    /// * `PositionNotFound` - No position with this id
    async fn get_position(&self, id: &PositionId) -> Result<Position, OrganizationError>;

    /// Rename a position. `None` keeps the current title.
    async fn update_position(
        &self,
        id: &PositionId,
        title: Option<Title>,
    ) -> Result<Position, OrganizationError>;

    /// Delete a position.
    async fn delete_position(&self, id: &PositionId) -> Result<(), OrganizationError>;

    /// Create a salary record.
    async fn create_salary(&self, salary: NewSalary) -> Result<Salary, OrganizationError>;

    /// List all salary records.
    async fn list_salaries(&self) -> Result<Vec<Salary>, OrganizationError>;

    /// Retrieve a salary record.
    ///
    /// # Errors
    /// * `SalaryNotFound` - No salary with this id
    async fn get_salary(&self, id: &SalaryId) -> Result<Salary, OrganizationError>;

    /// Update amount and/or raise date of a salary record.
    async fn update_salary(
        &self,
        id: &SalaryId,
        changes: SalaryChanges,
    ) -> Result<Salary, OrganizationError>;

    /// Delete a salary record.
    async fn delete_salary(&self, id: &SalaryId) -> Result<(), OrganizationError>;
}

/// Persistence operations for departments.
#[async_trait]
pub trait DepartmentRepository: Send + Sync + 'static {
    /// Persist a new department; the id is assigned by storage.
    ///
    /// # Errors
    /// * `TitleAlreadyExists` - Title is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, title: &Title) -> Result<Department, OrganizationError>;

    /// Retrieve department by identifier.
    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, OrganizationError>;

    /// Retrieve all departments ordered by id.
    async fn list_all(&self) -> Result<Vec<Department>, OrganizationError>;

    /// Set a new title.
    ///
    /// # Errors
    /// * `DepartmentNotFound` - No department with this id
    /// * `TitleAlreadyExists` - Title is already taken
    async fn update_title(
        &self,
        id: &DepartmentId,
        title: &Title,
    ) -> Result<Department, OrganizationError>;

    /// Remove department from storage.
    ///
    /// # Errors
    /// * `DepartmentNotFound` - No department with this id
    async fn delete(&self, id: &DepartmentId) -> Result<(), OrganizationError>;
}

/// Persistence operations for positions.
#[async_trait]
pub trait PositionRepository: Send + Sync + 'static {
    async fn create(&self, title: &Title) -> Result<Position, OrganizationError>;

    async fn find_by_id(&self, id: &PositionId) -> Result<Option<Position>, OrganizationError>;

    async fn list_all(&self) -> Result<Vec<Position>, OrganizationError>;

    async fn update_title(
        &self,
        id: &PositionId,
        title: &Title,
    ) -> Result<Position, OrganizationError>;

    async fn delete(&self, id: &PositionId) -> Result<(), OrganizationError>;
}

/// Persistence operations for salaries.
#[async_trait]
pub trait SalaryRepository: Send + Sync + 'static {
    async fn create(&self, salary: &NewSalary) -> Result<Salary, OrganizationError>;

    async fn find_by_id(&self, id: &SalaryId) -> Result<Option<Salary>, OrganizationError>;

    async fn list_all(&self) -> Result<Vec<Salary>, OrganizationError>;

    /// Apply the non-empty fields of `changes`.
    ///
    /// # Errors
    /// * `SalaryNotFound` - No salary with this id
    async fn update_fields(
        &self,
        id: &SalaryId,
        changes: &SalaryChanges,
    ) -> Result<Salary, OrganizationError>;

    async fn delete(&self, id: &SalaryId) -> Result<(), OrganizationError>;
}
