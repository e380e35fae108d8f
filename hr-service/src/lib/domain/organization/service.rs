use std::sync::Arc;

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
use crate::domain::organization::ports::DepartmentRepository;
use crate::domain::organization::ports::OrganizationServicePort;
use crate::domain::organization::ports::PositionRepository;
use crate::domain::organization::ports::SalaryRepository;

/// Domain service for the records employees are attached to.
pub struct OrganizationService<DR, PR, SR>
where
    DR: DepartmentRepository,
    PR: PositionRepository,
    SR: SalaryRepository,
{
    departments: Arc<DR>,
    positions: Arc<PR>,
    salaries: Arc<SR>,
}

impl<DR, PR, SR> OrganizationService<DR, PR, SR>
where
    DR: DepartmentRepository,
    PR: PositionRepository,
    SR: SalaryRepository,
{
    pub fn new(departments: Arc<DR>, positions: Arc<PR>, salaries: Arc<SR>) -> Self {
        Self {
            departments,
            positions,
            salaries,
        }
    }
}

#[async_trait]
impl<DR, PR, SR> OrganizationServicePort for OrganizationService<DR, PR, SR>
where
    DR: DepartmentRepository,
    PR: PositionRepository,
    SR: SalaryRepository,
{
    async fn create_department(&self, title: Title) -> Result<Department, OrganizationError> {
        let department = self.departments.create(&title).await?;
        tracing::info!(department_id = %department.id, "Department created");
        Ok(department)
    }

    async fn list_departments(&self) -> Result<Vec<Department>, OrganizationError> {
        self.departments.list_all().await
    }

    async fn get_department(&self, id: &DepartmentId) -> Result<Department, OrganizationError> {
        self.departments
            .find_by_id(id)
            .await?
            .ok_or(OrganizationError::DepartmentNotFound(id.to_string()))
    }

    async fn update_department(
        &self,
        id: &DepartmentId,
        title: Option<Title>,
    ) -> Result<Department, OrganizationError> {
        match title {
            Some(title) => self.departments.update_title(id, &title).await,
            None => self.get_department(id).await,
        }
    }

    async fn delete_department(&self, id: &DepartmentId) -> Result<(), OrganizationError> {
        self.departments.delete(id).await?;
        tracing::info!(department_id = %id, "Department deleted");
        Ok(())
    }

    async fn create_position(&self, title: Title) -> Result<Position, OrganizationError> {
        let position = self.positions.create(&title).await?;
        tracing::info!(position_id = %position.id, "Position created");
        Ok(position)
    }

    async fn list_positions(&self) -> Result<Vec<Position>, OrganizationError> {
        self.positions.list_all().await
    }

    async fn get_position(&self, id: &PositionId) -> Result<Position, OrganizationError> {
        self.positions
            .find_by_id(id)
            .await?
            .ok_or(OrganizationError::PositionNotFound(id.to_string()))
    }

    async fn update_position(
        &self,
        id: &PositionId,
        title: Option<Title>,
    ) -> Result<Position, OrganizationError> {
        match title {
            Some(title) => self.positions.update_title(id, &title).await,
            None => self.get_position(id).await,
        }
    }

    async fn delete_position(&self, id: &PositionId) -> Result<(), OrganizationError> {
        self.positions.delete(id).await?;
        tracing::info!(position_id = %id, "Position deleted");
        Ok(())
    }

    async fn create_salary(&self, salary: NewSalary) -> Result<Salary, OrganizationError> {
        let salary = self.salaries.create(&salary).await?;
        tracing::info!(salary_id = %salary.id, "Salary created");
        Ok(salary)
    }

    async fn list_salaries(&self) -> Result<Vec<Salary>, OrganizationError> {
        self.salaries.list_all().await
    }

    async fn get_salary(&self, id: &SalaryId) -> Result<Salary, OrganizationError> {
        self.salaries
            .find_by_id(id)
            .await?
            .ok_or(OrganizationError::SalaryNotFound(id.to_string()))
    }

    async fn update_salary(
        &self,
        id: &SalaryId,
        changes: SalaryChanges,
    ) -> Result<Salary, OrganizationError> {
        if changes.amount.is_none() && changes.raise_date.is_none() {
            return self.get_salary(id).await;
        }
        self.salaries.update_fields(id, &changes).await
    }

    async fn delete_salary(&self, id: &SalaryId) -> Result<(), OrganizationError> {
        self.salaries.delete(id).await?;
        tracing::info!(salary_id = %id, "Salary deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::organization::models::RaiseDate;
    use crate::domain::organization::models::SalaryAmount;

    mock! {
        pub TestDepartmentRepository {}

        #[async_trait]
        impl DepartmentRepository for TestDepartmentRepository {
            async fn create(&self, title: &Title) -> Result<Department, OrganizationError>;
            async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, OrganizationError>;
            async fn list_all(&self) -> Result<Vec<Department>, OrganizationError>;
            async fn update_title(&self, id: &DepartmentId, title: &Title) -> Result<Department, OrganizationError>;
            async fn delete(&self, id: &DepartmentId) -> Result<(), OrganizationError>;
        }
    }

    mock! {
        pub TestPositionRepository {}

        #[async_trait]
        impl PositionRepository for TestPositionRepository {
            async fn create(&self, title: &Title) -> Result<Position, OrganizationError>;
            async fn find_by_id(&self, id: &PositionId) -> Result<Option<Position>, OrganizationError>;
            async fn list_all(&self) -> Result<Vec<Position>, OrganizationError>;
            async fn update_title(&self, id: &PositionId, title: &Title) -> Result<Position, OrganizationError>;
            async fn delete(&self, id: &PositionId) -> Result<(), OrganizationError>;
        }
    }

    mock! {
        pub TestSalaryRepository {}

        #[async_trait]
        impl SalaryRepository for TestSalaryRepository {
            async fn create(&self, salary: &NewSalary) -> Result<Salary, OrganizationError>;
            async fn find_by_id(&self, id: &SalaryId) -> Result<Option<Salary>, OrganizationError>;
            async fn list_all(&self) -> Result<Vec<Salary>, OrganizationError>;
            async fn update_fields(&self, id: &SalaryId, changes: &SalaryChanges) -> Result<Salary, OrganizationError>;
            async fn delete(&self, id: &SalaryId) -> Result<(), OrganizationError>;
        }
    }

    fn department(id: i64, title: &str) -> Department {
        Department {
            id: DepartmentId(id),
            title: Title::for_department(title.to_string()).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(
        departments: MockTestDepartmentRepository,
        positions: MockTestPositionRepository,
        salaries: MockTestSalaryRepository,
    ) -> OrganizationService<
        MockTestDepartmentRepository,
        MockTestPositionRepository,
        MockTestSalaryRepository,
    > {
        OrganizationService::new(Arc::new(departments), Arc::new(positions), Arc::new(salaries))
    }

    #[tokio::test]
    async fn test_create_department_success() {
        let mut departments = MockTestDepartmentRepository::new();
        departments
            .expect_create()
            .withf(|title| title.as_str() == "Accounting")
            .times(1)
            .returning(|title| Ok(department(1, title.as_str())));

        let service = service(
            departments,
            MockTestPositionRepository::new(),
            MockTestSalaryRepository::new(),
        );

        let created = service
            .create_department(Title::for_department("Accounting".to_string()).unwrap())
            .await
            .unwrap();
        assert_eq!(created.id, DepartmentId(1));
        assert_eq!(created.title.as_str(), "Accounting");
    }

    #[tokio::test]
    async fn test_create_department_duplicate_title() {
        let mut departments = MockTestDepartmentRepository::new();
        departments
            .expect_create()
            .times(1)
            .returning(|title| Err(OrganizationError::TitleAlreadyExists(title.to_string())));

        let service = service(
            departments,
            MockTestPositionRepository::new(),
            MockTestSalaryRepository::new(),
        );

        let result = service
            .create_department(Title::for_department("Accounting".to_string()).unwrap())
            .await;
        assert!(matches!(
            result,
            Err(OrganizationError::TitleAlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_get_department_not_found() {
        let mut departments = MockTestDepartmentRepository::new();
        departments
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(
            departments,
            MockTestPositionRepository::new(),
            MockTestSalaryRepository::new(),
        );

        let result = service.get_department(&DepartmentId(7)).await;
        assert!(matches!(
            result,
            Err(OrganizationError::DepartmentNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_department_without_title_reads_current() {
        let mut departments = MockTestDepartmentRepository::new();
        departments.expect_update_title().times(0);
        departments
            .expect_find_by_id()
            .withf(|id| *id == DepartmentId(3))
            .times(1)
            .returning(|_| Ok(Some(department(3, "Sales"))));

        let service = service(
            departments,
            MockTestPositionRepository::new(),
            MockTestSalaryRepository::new(),
        );

        let result = service.update_department(&DepartmentId(3), None).await;
        assert_eq!(result.unwrap().title.as_str(), "Sales");
    }

    #[tokio::test]
    async fn test_delete_position_not_found() {
        let mut positions = MockTestPositionRepository::new();
        positions
            .expect_delete()
            .times(1)
            .returning(|id| Err(OrganizationError::PositionNotFound(id.to_string())));

        let service = service(
            MockTestDepartmentRepository::new(),
            positions,
            MockTestSalaryRepository::new(),
        );

        let result = service.delete_position(&PositionId(9)).await;
        assert!(matches!(result, Err(OrganizationError::PositionNotFound(_))));
    }

    #[tokio::test]
    async fn test_update_salary_applies_changes() {
        let mut salaries = MockTestSalaryRepository::new();
        salaries
            .expect_update_fields()
            .withf(|id, changes| {
                *id == SalaryId(2)
                    && changes.amount == Some(SalaryAmount::from_cents(150_000))
                    && changes.raise_date.is_none()
            })
            .times(1)
            .returning(|id, changes| {
                Ok(Salary {
                    id: *id,
                    amount: changes.amount.unwrap(),
                    raise_date: RaiseDate::from_stored(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()),
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                })
            });

        let service = service(
            MockTestDepartmentRepository::new(),
            MockTestPositionRepository::new(),
            salaries,
        );

        let changes = SalaryChanges {
            amount: Some(SalaryAmount::from_cents(150_000)),
            raise_date: None,
        };
        let salary = service.update_salary(&SalaryId(2), changes).await.unwrap();
        assert_eq!(salary.amount.as_decimal(), 1500.0);
    }
}
