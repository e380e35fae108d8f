use async_trait::async_trait;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeChanges;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::EmployeeProfile;
use crate::domain::employee::models::LoginName;
use crate::domain::employee::models::NewEmployee;
use crate::domain::employee::models::Role;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::domain::employee::models::UpdateSelfCommand;

/// Port for employee domain service operations.
#[async_trait]
pub trait EmployeeServicePort: Send + Sync + 'static {
    /// Register a new employee account.
    ///
    /// The password is hashed before storage. The account starts unblocked
    /// with the `employee` role.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `ReferenceNotFound` - Department, position or salary does not exist
    /// * `InvalidPassword` - Password longer than the hasher accepts
    /// * `PasswordHashing` - Hasher misconfigured
    /// * `DatabaseError` - Database operation failed
    async fn create_employee(
        &self,
        command: CreateEmployeeCommand,
    ) -> Result<Employee, EmployeeError>;

    /// List all employees ordered by id.
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// Retrieve employee by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, EmployeeError>;

    /// Resolve the department, position and salary an employee references.
    async fn get_profile(&self, employee: Employee) -> Result<EmployeeProfile, EmployeeError>;

    /// Update personal and organizational fields of an employee.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `ReferenceNotFound` - Department, position or salary does not exist
    async fn update_employee(
        &self,
        id: &EmployeeId,
        command: UpdateEmployeeCommand,
    ) -> Result<Employee, EmployeeError>;

    /// Update the personal fields of the calling employee.
    async fn update_self(
        &self,
        employee: &Employee,
        command: UpdateSelfCommand,
    ) -> Result<Employee, EmployeeError>;

    /// Assign a new role.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    async fn change_role(&self, id: &EmployeeId, role: Role) -> Result<Employee, EmployeeError>;

    /// Replace the password with a freshly hashed one.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `InvalidPassword` - Password longer than the hasher accepts
    /// * `PasswordHashing` - Hasher misconfigured
    async fn reset_password(
        &self,
        id: &EmployeeId,
        new_password: String,
    ) -> Result<Employee, EmployeeError>;

    /// Block the account. Outstanding tokens stop working immediately.
    async fn block(&self, id: &EmployeeId) -> Result<Employee, EmployeeError>;

    /// Lift a block.
    async fn unblock(&self, id: &EmployeeId) -> Result<Employee, EmployeeError>;

    /// Delete employee permanently.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), EmployeeError>;
}

/// Persistence operations for employee accounts.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// Persist a new employee; id and timestamps are assigned by storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username uniqueness violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, employee: NewEmployee) -> Result<Employee, EmployeeError>;

    /// Retrieve employee by identifier.
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError>;

    /// Retrieve employee by exact, case-sensitive username.
    async fn find_by_username(
        &self,
        username: &LoginName,
    ) -> Result<Option<Employee>, EmployeeError>;

    /// Whether an employee with `username` exists and, when `roles` is not
    /// empty, holds one of them.
    async fn exists_matching(
        &self,
        username: &LoginName,
        roles: &[Role],
    ) -> Result<bool, EmployeeError>;

    /// Retrieve all employees ordered by id.
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// Apply the present fields of `changes` and bump `updated_at`.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    async fn update_fields(
        &self,
        id: &EmployeeId,
        changes: EmployeeChanges,
    ) -> Result<Employee, EmployeeError>;

    /// Remove employee from storage.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeError>;
}
