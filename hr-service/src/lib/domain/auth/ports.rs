use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::LoginResult;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::Role;

/// Port for authentication and authorization decisions.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    /// * `AccountNotFound` - Unknown username
    /// * `BlockedAccount` - Account is blocked
    /// * `InvalidCredentials` - Password does not match
    /// * `Internal` - Repository or token encoding failure
    async fn login(&self, command: LoginCommand) -> Result<LoginResult, AuthError>;

    /// Resolve a bearer token to its account.
    ///
    /// # Errors
    /// * `Unauthorized` - Token invalid or expired, or its account is gone
    /// * `BlockedAccount` - Account is blocked
    async fn resolve_current_user(&self, token: &str) -> Result<Employee, AuthError>;

    /// Decide whether a token grants access to a resource restricted to
    /// `allowed_roles` (empty means any role).
    ///
    /// # Errors
    /// * `Unauthorized` - Token invalid or expired
    /// * `Forbidden` - Account missing or role not allowed
    /// * `BlockedAccount` - Account is blocked
    async fn check_authorized(&self, token: &str, allowed_roles: &[Role])
        -> Result<(), AuthError>;

    /// Hash a plaintext password for storage.
    async fn hash_password(&self, plaintext: &str) -> Result<String, AuthError>;
}
