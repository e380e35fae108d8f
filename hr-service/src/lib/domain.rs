pub mod auth;
pub mod employee;
pub mod errors;
pub mod organization;
