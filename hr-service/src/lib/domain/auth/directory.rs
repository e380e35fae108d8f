use std::sync::Arc;

use crate::domain::auth::errors::AuthError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::LoginName;
use crate::domain::employee::models::Role;
use crate::domain::employee::ports::EmployeeRepository;

/// Read-only view of employee accounts used by authentication.
pub struct UserDirectory<ER>
where
    ER: EmployeeRepository,
{
    repository: Arc<ER>,
}

impl<ER> UserDirectory<ER>
where
    ER: EmployeeRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }

    /// Fetch the account with exactly this username.
    ///
    /// # Errors
    /// * `AccountNotFound` - No such account
    /// * `Internal` - Repository failure
    pub async fn find_by_login(&self, username: &LoginName) -> Result<Employee, AuthError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(AuthError::AccountNotFound)
    }

    /// Whether the account exists and, if `allowed_roles` is not empty, holds
    /// one of those roles.
    pub async fn exists(
        &self,
        username: &LoginName,
        allowed_roles: &[Role],
    ) -> Result<bool, AuthError> {
        Ok(self
            .repository
            .exists_matching(username, allowed_roles)
            .await?)
    }
}
