#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::PasswordHasher;
use auth::SigningSecret;
use auth::TokenService;
use chrono::NaiveDate;
use chrono::Utc;
use hr_service::domain::auth::service::AuthenticationService;
use hr_service::domain::employee::errors::EmployeeError;
use hr_service::domain::employee::models::BirthDate;
use hr_service::domain::employee::models::Employee;
use hr_service::domain::employee::models::EmployeeChanges;
use hr_service::domain::employee::models::EmployeeId;
use hr_service::domain::employee::models::LoginName;
use hr_service::domain::employee::models::NewEmployee;
use hr_service::domain::employee::models::PersonName;
use hr_service::domain::employee::models::Role;
use hr_service::domain::employee::ports::EmployeeRepository;
use hr_service::domain::employee::service::EmployeeService;
use hr_service::domain::organization::errors::OrganizationError;
use hr_service::domain::organization::models::Department;
use hr_service::domain::organization::models::DepartmentId;
use hr_service::domain::organization::models::NewSalary;
use hr_service::domain::organization::models::Position;
use hr_service::domain::organization::models::PositionId;
use hr_service::domain::organization::models::Salary;
use hr_service::domain::organization::models::SalaryChanges;
use hr_service::domain::organization::models::SalaryId;
use hr_service::domain::organization::models::Title;
use hr_service::domain::organization::ports::DepartmentRepository;
use hr_service::domain::organization::ports::PositionRepository;
use hr_service::domain::organization::ports::SalaryRepository;
use hr_service::domain::organization::service::OrganizationService;
use hr_service::inbound::http::router::create_router;
use serde_json::Value;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub employees: Arc<InMemoryEmployeeRepository>,
    pub api_client: reqwest::Client,
    pub token_service: TokenService,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let employees = Arc::new(InMemoryEmployeeRepository::default());
        let departments = Arc::new(InMemoryDepartmentRepository::default());
        let positions = Arc::new(InMemoryPositionRepository::default());
        let salaries = Arc::new(InMemorySalaryRepository::default());

        let secret = SigningSecret::from_bytes(TEST_SECRET.to_vec());
        let password_hasher = PasswordHasher::with_cost(4);
        let authenticator = Arc::new(Authenticator::from_parts(
            password_hasher,
            TokenService::new(&secret),
        ));

        let auth_service = Arc::new(AuthenticationService::new(
            Arc::clone(&employees),
            authenticator,
            chrono::Duration::days(7),
        ));
        let employee_service = Arc::new(EmployeeService::new(
            Arc::clone(&employees),
            Arc::clone(&departments),
            Arc::clone(&positions),
            Arc::clone(&salaries),
            auth_service.clone(),
        ));
        let organization_service =
            Arc::new(OrganizationService::new(departments, positions, salaries));

        let router = create_router(employee_service, organization_service, auth_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            employees,
            api_client: reqwest::Client::new(),
            token_service: TokenService::new(&secret),
        }
    }

    /// Store an account directly, bypassing registration.
    pub async fn seed_employee(&self, username: &str, password: &str, role: Role) -> Employee {
        let employee = NewEmployee {
            username: LoginName::new(username.to_string()).unwrap(),
            password_hash: PasswordHasher::with_cost(4).hash(password).unwrap(),
            role,
            is_blocked: false,
            first_name: PersonName::new("Test".to_string()).unwrap(),
            last_name: PersonName::new("Person".to_string()).unwrap(),
            date_of_birth: BirthDate::from_stored(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()),
            department_id: None,
            position_id: None,
            salary_id: None,
        };

        self.employees
            .create(employee)
            .await
            .expect("Failed to seed employee")
    }

    /// Seed an account with the given role and return a login token for it.
    pub async fn token_for(&self, username: &str, role: Role) -> String {
        self.seed_employee(username, "pass_word!", role).await;
        self.login(username, "pass_word!").await
    }

    /// Log in through the API and return the issued token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/v1/employees/login")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Login did not return a token")
            .to_string()
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }
}

struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Employee storage with the uniqueness rules of the real schema
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    table: Mutex<Table<Employee>>,
}

impl InMemoryEmployeeRepository {
    pub fn set_blocked(&self, username: &str, is_blocked: bool) {
        let mut table = self.table.lock().unwrap();
        for employee in table.rows.iter_mut() {
            if employee.username.as_str() == username {
                employee.is_blocked = is_blocked;
            }
        }
    }

    pub fn remove(&self, username: &str) {
        let mut table = self.table.lock().unwrap();
        table.rows.retain(|e| e.username.as_str() != username);
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, employee: NewEmployee) -> Result<Employee, EmployeeError> {
        let mut table = self.table.lock().unwrap();
        if table.rows.iter().any(|e| e.username == employee.username) {
            return Err(EmployeeError::UsernameAlreadyExists(
                employee.username.to_string(),
            ));
        }

        let now = Utc::now();
        let created = Employee {
            id: EmployeeId(table.next_id()),
            username: employee.username,
            password_hash: employee.password_hash,
            role: employee.role,
            is_blocked: employee.is_blocked,
            first_name: employee.first_name,
            last_name: employee.last_name,
            date_of_birth: employee.date_of_birth,
            department_id: employee.department_id,
            position_id: employee.position_id,
            salary_id: employee.salary_id,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().find(|e| e.id == *id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &LoginName,
    ) -> Result<Option<Employee>, EmployeeError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().find(|e| e.username == *username).cloned())
    }

    async fn exists_matching(
        &self,
        username: &LoginName,
        roles: &[Role],
    ) -> Result<bool, EmployeeError> {
        let table = self.table.lock().unwrap();
        Ok(table
            .rows
            .iter()
            .any(|e| e.username == *username && e.has_any_role(roles)))
    }

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        Ok(self.table.lock().unwrap().rows.clone())
    }

    async fn update_fields(
        &self,
        id: &EmployeeId,
        changes: EmployeeChanges,
    ) -> Result<Employee, EmployeeError> {
        let mut table = self.table.lock().unwrap();
        let employee = table
            .rows
            .iter_mut()
            .find(|e| e.id == *id)
            .ok_or(EmployeeError::NotFound(id.to_string()))?;

        changes.apply_to(employee);
        employee.updated_at = Utc::now();
        Ok(employee.clone())
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeError> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|e| e.id != *id);
        if table.rows.len() == before {
            return Err(EmployeeError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryDepartmentRepository {
    table: Mutex<Table<Department>>,
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn create(&self, title: &Title) -> Result<Department, OrganizationError> {
        let mut table = self.table.lock().unwrap();
        if table.rows.iter().any(|d| d.title == *title) {
            return Err(OrganizationError::TitleAlreadyExists(title.to_string()));
        }

        let now = Utc::now();
        let department = Department {
            id: DepartmentId(table.next_id()),
            title: title.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.push(department.clone());
        Ok(department)
    }

    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, OrganizationError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().find(|d| d.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Department>, OrganizationError> {
        Ok(self.table.lock().unwrap().rows.clone())
    }

    async fn update_title(
        &self,
        id: &DepartmentId,
        title: &Title,
    ) -> Result<Department, OrganizationError> {
        let mut table = self.table.lock().unwrap();
        if table.rows.iter().any(|d| d.title == *title && d.id != *id) {
            return Err(OrganizationError::TitleAlreadyExists(title.to_string()));
        }

        let department = table
            .rows
            .iter_mut()
            .find(|d| d.id == *id)
            .ok_or(OrganizationError::DepartmentNotFound(id.to_string()))?;
        department.title = title.clone();
        department.updated_at = Utc::now();
        Ok(department.clone())
    }

    async fn delete(&self, id: &DepartmentId) -> Result<(), OrganizationError> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|d| d.id != *id);
        if table.rows.len() == before {
            return Err(OrganizationError::DepartmentNotFound(id.to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPositionRepository {
    table: Mutex<Table<Position>>,
}

#[async_trait]
impl PositionRepository for InMemoryPositionRepository {
    async fn create(&self, title: &Title) -> Result<Position, OrganizationError> {
        let mut table = self.table.lock().unwrap();
        if table.rows.iter().any(|p| p.title == *title) {
            return Err(OrganizationError::TitleAlreadyExists(title.to_string()));
        }

        let now = Utc::now();
        let position = Position {
            id: PositionId(table.next_id()),
            title: title.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.push(position.clone());
        Ok(position)
    }

    async fn find_by_id(&self, id: &PositionId) -> Result<Option<Position>, OrganizationError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().find(|p| p.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Position>, OrganizationError> {
        Ok(self.table.lock().unwrap().rows.clone())
    }

    async fn update_title(
        &self,
        id: &PositionId,
        title: &Title,
    ) -> Result<Position, OrganizationError> {
        let mut table = self.table.lock().unwrap();
        let position = table
            .rows
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or(OrganizationError::PositionNotFound(id.to_string()))?;
        position.title = title.clone();
        position.updated_at = Utc::now();
        Ok(position.clone())
    }

    async fn delete(&self, id: &PositionId) -> Result<(), OrganizationError> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|p| p.id != *id);
        if table.rows.len() == before {
            return Err(OrganizationError::PositionNotFound(id.to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySalaryRepository {
    table: Mutex<Table<Salary>>,
}

#[async_trait]
impl SalaryRepository for InMemorySalaryRepository {
    async fn create(&self, salary: &NewSalary) -> Result<Salary, OrganizationError> {
        let mut table = self.table.lock().unwrap();
        let now = Utc::now();
        let created = Salary {
            id: SalaryId(table.next_id()),
            amount: salary.amount,
            raise_date: salary.raise_date,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &SalaryId) -> Result<Option<Salary>, OrganizationError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().find(|s| s.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Salary>, OrganizationError> {
        Ok(self.table.lock().unwrap().rows.clone())
    }

    async fn update_fields(
        &self,
        id: &SalaryId,
        changes: &SalaryChanges,
    ) -> Result<Salary, OrganizationError> {
        let mut table = self.table.lock().unwrap();
        let salary = table
            .rows
            .iter_mut()
            .find(|s| s.id == *id)
            .ok_or(OrganizationError::SalaryNotFound(id.to_string()))?;
        if let Some(amount) = changes.amount {
            salary.amount = amount;
        }
        if let Some(raise_date) = changes.raise_date {
            salary.raise_date = raise_date;
        }
        salary.updated_at = Utc::now();
        Ok(salary.clone())
    }

    async fn delete(&self, id: &SalaryId) -> Result<(), OrganizationError> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|s| s.id != *id);
        if table.rows.len() == before {
            return Err(OrganizationError::SalaryNotFound(id.to_string()));
        }
        Ok(())
    }
}
