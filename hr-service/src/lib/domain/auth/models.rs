use crate::domain::employee::models::Employee;
use crate::domain::employee::models::LoginName;
use crate::domain::employee::models::Role;

/// Role requirement attached to a group of routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Any existing, unblocked account.
    Authenticated,
    Admin,
    AdminOrStaff,
}

impl AccessPolicy {
    /// Roles admitted by the policy. Empty means no role restriction.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            AccessPolicy::Authenticated => &[],
            AccessPolicy::Admin => &[Role::Admin],
            AccessPolicy::AdminOrStaff => &[Role::Admin, Role::Staff],
        }
    }
}

/// Credentials presented at login.
pub struct LoginCommand {
    pub username: LoginName,
    pub password: String,
}

/// Successful login: a bearer token and the authenticated account.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub employee: Employee,
}
