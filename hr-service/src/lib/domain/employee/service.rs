use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeChanges;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::EmployeeProfile;
use crate::domain::employee::models::NewEmployee;
use crate::domain::employee::models::Role;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::domain::employee::models::UpdateSelfCommand;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::domain::organization::errors::OrganizationError;
use crate::domain::organization::models::DepartmentId;
use crate::domain::organization::models::PositionId;
use crate::domain::organization::models::SalaryId;
use crate::domain::organization::ports::DepartmentRepository;
use crate::domain::organization::ports::PositionRepository;
use crate::domain::organization::ports::SalaryRepository;

/// Domain service implementation for employee operations.
///
/// Organization repositories are only read, to check that references point
/// at existing records and to build profiles. Passwords are hashed by the
/// auth service, the same component that verifies them at login.
pub struct EmployeeService<ER, DR, PR, SR>
where
    ER: EmployeeRepository,
    DR: DepartmentRepository,
    PR: PositionRepository,
    SR: SalaryRepository,
{
    employees: Arc<ER>,
    departments: Arc<DR>,
    positions: Arc<PR>,
    salaries: Arc<SR>,
    auth_service: Arc<dyn AuthServicePort>,
}

impl<ER, DR, PR, SR> EmployeeService<ER, DR, PR, SR>
where
    ER: EmployeeRepository,
    DR: DepartmentRepository,
    PR: PositionRepository,
    SR: SalaryRepository,
{
    /// Create a new employee service with injected dependencies.
    ///
    /// # Arguments
    /// * `employees` - Employee persistence implementation
    /// * `departments` - Department lookup for reference checks
    /// * `positions` - Position lookup for reference checks
    /// * `salaries` - Salary lookup for reference checks
    /// * `auth_service` - Hashes new and reset passwords
    pub fn new(
        employees: Arc<ER>,
        departments: Arc<DR>,
        positions: Arc<PR>,
        salaries: Arc<SR>,
        auth_service: Arc<dyn AuthServicePort>,
    ) -> Self {
        Self {
            employees,
            departments,
            positions,
            salaries,
            auth_service,
        }
    }

    async fn ensure_references(
        &self,
        department_id: Option<DepartmentId>,
        position_id: Option<PositionId>,
        salary_id: Option<SalaryId>,
    ) -> Result<(), EmployeeError> {
        if let Some(id) = department_id {
            self.departments
                .find_by_id(&id)
                .await
                .map_err(reference_lookup_failed)?
                .ok_or_else(|| EmployeeError::ReferenceNotFound(format!("department {}", id)))?;
        }

        if let Some(id) = position_id {
            self.positions
                .find_by_id(&id)
                .await
                .map_err(reference_lookup_failed)?
                .ok_or_else(|| EmployeeError::ReferenceNotFound(format!("position {}", id)))?;
        }

        if let Some(id) = salary_id {
            self.salaries
                .find_by_id(&id)
                .await
                .map_err(reference_lookup_failed)?
                .ok_or_else(|| EmployeeError::ReferenceNotFound(format!("salary {}", id)))?;
        }

        Ok(())
    }

    async fn apply(
        &self,
        id: &EmployeeId,
        changes: EmployeeChanges,
    ) -> Result<Employee, EmployeeError> {
        if changes.is_empty() {
            return self.get_employee(id).await;
        }
        self.employees.update_fields(id, changes).await
    }
}

fn hashing_failed(err: AuthError) -> EmployeeError {
    match err {
        AuthError::InvalidPassword(msg) => EmployeeError::InvalidPassword(msg),
        other => EmployeeError::PasswordHashing(other.to_string()),
    }
}

fn reference_lookup_failed(err: OrganizationError) -> EmployeeError {
    match err {
        OrganizationError::DatabaseError(msg) => EmployeeError::DatabaseError(msg),
        other => EmployeeError::Unknown(other.to_string()),
    }
}

#[async_trait]
impl<ER, DR, PR, SR> EmployeeServicePort for EmployeeService<ER, DR, PR, SR>
where
    ER: EmployeeRepository,
    DR: DepartmentRepository,
    PR: PositionRepository,
    SR: SalaryRepository,
{
    async fn create_employee(
        &self,
        command: CreateEmployeeCommand,
    ) -> Result<Employee, EmployeeError> {
        self.ensure_references(command.department_id, command.position_id, command.salary_id)
            .await?;

        let password_hash = self
            .auth_service
            .hash_password(&command.password)
            .await
            .map_err(hashing_failed)?;

        let employee = NewEmployee {
            username: command.username,
            password_hash,
            role: Role::default(),
            is_blocked: false,
            first_name: command.first_name,
            last_name: command.last_name,
            date_of_birth: command.date_of_birth,
            department_id: command.department_id,
            position_id: command.position_id,
            salary_id: command.salary_id,
        };

        let created = self.employees.create(employee).await?;
        tracing::info!(employee_id = %created.id, username = %created.username, "Employee created");
        Ok(created)
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        self.employees.list_all().await
    }

    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, EmployeeError> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(id.to_string()))
    }

    async fn get_profile(&self, employee: Employee) -> Result<EmployeeProfile, EmployeeError> {
        let department = match employee.department_id {
            Some(id) => self
                .departments
                .find_by_id(&id)
                .await
                .map_err(reference_lookup_failed)?,
            None => None,
        };

        let position = match employee.position_id {
            Some(id) => self
                .positions
                .find_by_id(&id)
                .await
                .map_err(reference_lookup_failed)?,
            None => None,
        };

        let salary = match employee.salary_id {
            Some(id) => self
                .salaries
                .find_by_id(&id)
                .await
                .map_err(reference_lookup_failed)?,
            None => None,
        };

        Ok(EmployeeProfile {
            employee,
            department,
            position,
            salary,
        })
    }

    async fn update_employee(
        &self,
        id: &EmployeeId,
        command: UpdateEmployeeCommand,
    ) -> Result<Employee, EmployeeError> {
        self.ensure_references(command.department_id, command.position_id, command.salary_id)
            .await?;

        let changes = EmployeeChanges {
            first_name: command.first_name,
            last_name: command.last_name,
            date_of_birth: command.date_of_birth,
            department_id: command.department_id,
            position_id: command.position_id,
            salary_id: command.salary_id,
            ..Default::default()
        };

        self.apply(id, changes).await
    }

    async fn update_self(
        &self,
        employee: &Employee,
        command: UpdateSelfCommand,
    ) -> Result<Employee, EmployeeError> {
        let changes = EmployeeChanges {
            first_name: command.first_name,
            last_name: command.last_name,
            date_of_birth: command.date_of_birth,
            ..Default::default()
        };

        self.apply(&employee.id, changes).await
    }

    async fn change_role(&self, id: &EmployeeId, role: Role) -> Result<Employee, EmployeeError> {
        let changes = EmployeeChanges {
            role: Some(role),
            ..Default::default()
        };

        let updated = self.employees.update_fields(id, changes).await?;
        tracing::info!(employee_id = %id, role = %role, "Employee role changed");
        Ok(updated)
    }

    async fn reset_password(
        &self,
        id: &EmployeeId,
        new_password: String,
    ) -> Result<Employee, EmployeeError> {
        let password_hash = self
            .auth_service
            .hash_password(&new_password)
            .await
            .map_err(hashing_failed)?;
        let changes = EmployeeChanges {
            password_hash: Some(password_hash),
            ..Default::default()
        };

        let updated = self.employees.update_fields(id, changes).await?;
        tracing::info!(employee_id = %id, "Employee password reset");
        Ok(updated)
    }

    async fn block(&self, id: &EmployeeId) -> Result<Employee, EmployeeError> {
        let changes = EmployeeChanges {
            is_blocked: Some(true),
            ..Default::default()
        };

        let updated = self.employees.update_fields(id, changes).await?;
        tracing::info!(employee_id = %id, "Employee blocked");
        Ok(updated)
    }

    async fn unblock(&self, id: &EmployeeId) -> Result<Employee, EmployeeError> {
        let changes = EmployeeChanges {
            is_blocked: Some(false),
            ..Default::default()
        };

        let updated = self.employees.update_fields(id, changes).await?;
        tracing::info!(employee_id = %id, "Employee unblocked");
        Ok(updated)
    }

    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), EmployeeError> {
        self.employees.delete(id).await?;
        tracing::info!(employee_id = %id, "Employee deleted");
        Ok(())
    }
}
