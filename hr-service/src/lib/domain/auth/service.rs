use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::auth::directory::UserDirectory;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::LoginResult;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::LoginName;
use crate::domain::employee::models::Role;
use crate::domain::employee::ports::EmployeeRepository;

/// Authentication and authorization over employee accounts.
///
/// Holds only injected collaborators; every call is independent.
pub struct AuthenticationService<ER>
where
    ER: EmployeeRepository,
{
    directory: UserDirectory<ER>,
    authenticator: Arc<Authenticator>,
    login_ttl: chrono::Duration,
}

impl<ER> AuthenticationService<ER>
where
    ER: EmployeeRepository,
{
    /// Create a new authentication service.
    ///
    /// # Arguments
    /// * `repository` - Employee persistence used for account lookups
    /// * `authenticator` - Password verification and token issuance
    /// * `login_ttl` - Lifetime of tokens minted by `login`
    pub fn new(
        repository: Arc<ER>,
        authenticator: Arc<Authenticator>,
        login_ttl: chrono::Duration,
    ) -> Self {
        Self {
            directory: UserDirectory::new(repository),
            authenticator,
            login_ttl,
        }
    }

    fn verified_subject(&self, token: &str) -> Option<String> {
        match self.authenticator.validate_token(token) {
            Ok(subject) => Some(subject),
            Err(e) => {
                tracing::debug!(error = %e, "Token rejected");
                None
            }
        }
    }
}

#[async_trait]
impl<ER> AuthServicePort for AuthenticationService<ER>
where
    ER: EmployeeRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<LoginResult, AuthError> {
        let employee = match self.directory.find_by_login(&command.username).await {
            Ok(employee) => employee,
            Err(AuthError::AccountNotFound) => {
                tracing::warn!(username = %command.username, "Login failed: unknown account");
                return Err(AuthError::AccountNotFound);
            }
            Err(e) => return Err(e),
        };

        if employee.is_blocked {
            tracing::warn!(employee_id = %employee.id, "Login refused: account blocked");
            return Err(AuthError::BlockedAccount);
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let stored_hash = employee.password_hash.clone();
        let subject = employee.username.to_string();
        let ttl = self.login_ttl;

        let outcome = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &subject, Some(ttl))
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Authentication task failed: {}", e)))?;

        match outcome {
            Ok(result) => {
                tracing::info!(employee_id = %employee.id, "Login succeeded");
                Ok(LoginResult {
                    token: result.access_token,
                    employee,
                })
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::warn!(employee_id = %employee.id, "Login failed: wrong password");
                Err(AuthError::InvalidCredentials)
            }
            Err(AuthenticationError::JwtError(e)) => Err(AuthError::Internal(e.to_string())),
        }
    }

    async fn resolve_current_user(&self, token: &str) -> Result<Employee, AuthError> {
        let subject = self.verified_subject(token).ok_or(AuthError::Unauthorized)?;
        let username = LoginName::new(subject).map_err(|_| AuthError::Unauthorized)?;

        let employee = match self.directory.find_by_login(&username).await {
            Ok(employee) => employee,
            Err(AuthError::AccountNotFound) => return Err(AuthError::Unauthorized),
            Err(e) => return Err(e),
        };

        if employee.is_blocked {
            return Err(AuthError::BlockedAccount);
        }

        Ok(employee)
    }

    async fn check_authorized(
        &self,
        token: &str,
        allowed_roles: &[Role],
    ) -> Result<(), AuthError> {
        let subject = self.verified_subject(token).ok_or(AuthError::Unauthorized)?;
        let username = LoginName::new(subject).map_err(|_| AuthError::Forbidden)?;

        if !self.directory.exists(&username, allowed_roles).await? {
            tracing::debug!(username = %username, "Access denied: role not allowed");
            return Err(AuthError::Forbidden);
        }

        // The account may disappear between the two lookups.
        let employee = match self.directory.find_by_login(&username).await {
            Ok(employee) => employee,
            Err(AuthError::AccountNotFound) => return Err(AuthError::Forbidden),
            Err(e) => return Err(e),
        };

        if employee.is_blocked {
            tracing::debug!(employee_id = %employee.id, "Access denied: account blocked");
            return Err(AuthError::BlockedAccount);
        }

        Ok(())
    }

    async fn hash_password(&self, plaintext: &str) -> Result<String, AuthError> {
        let authenticator = Arc::clone(&self.authenticator);
        let plaintext = plaintext.to_string();
        let hash = tokio::task::spawn_blocking(move || authenticator.hash_password(&plaintext))
            .await
            .map_err(|e| AuthError::Internal(format!("Hashing task failed: {}", e)))??;
        Ok(hash)
    }
}
