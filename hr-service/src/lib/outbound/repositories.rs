pub mod department;
pub mod employee;
pub mod position;
pub mod salary;

pub use department::PostgresDepartmentRepository;
pub use employee::PostgresEmployeeRepository;
pub use position::PostgresPositionRepository;
pub use salary::PostgresSalaryRepository;
