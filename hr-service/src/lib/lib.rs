pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::auth;
pub use domain::employee;
pub use domain::organization;
pub use outbound::repositories;
