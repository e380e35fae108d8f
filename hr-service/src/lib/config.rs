use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Token settings. Without `secret` a random one is generated at start-up,
/// so tokens do not survive a restart.
#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default = "default_ttl_minutes")]
    pub default_ttl_minutes: i64,
    #[serde(default = "login_ttl_minutes")]
    pub login_ttl_minutes: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("default_ttl_minutes", &self.default_ttl_minutes)
            .field("login_ttl_minutes", &self.login_ttl_minutes)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: auth::PasswordHasher::new().cost(),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_ttl_minutes() -> i64 {
    auth::TokenService::DEFAULT_TTL_MINUTES
}

fn login_ttl_minutes() -> i64 {
    7 * 24 * 60
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__LOGIN_TTL_MINUTES=60 overrides jwt.login_ttl_minutes
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings that would only fail once requests arrive.
    ///
    /// # Errors
    /// * `ConfigError::Message` - Out-of-range bcrypt cost or non-positive token lifetime
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cost = self.password.bcrypt_cost;
        let allowed = auth::PasswordHasher::MIN_COST..=auth::PasswordHasher::MAX_COST;
        if !allowed.contains(&cost) {
            return Err(ConfigError::Message(format!(
                "password.bcrypt_cost must be between {} and {}, got {}",
                allowed.start(),
                allowed.end(),
                cost
            )));
        }

        if self.jwt.default_ttl_minutes <= 0 || self.jwt.login_ttl_minutes <= 0 {
            return Err(ConfigError::Message(format!(
                "jwt token lifetimes must be positive, got default {} and login {}",
                self.jwt.default_ttl_minutes, self.jwt.login_ttl_minutes
            )));
        }

        Ok(())
    }

    /// Lifetime of tokens issued without an explicit ttl.
    pub fn default_token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.jwt.default_ttl_minutes)
    }

    /// Lifetime of tokens issued at login.
    pub fn login_token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.jwt.login_ttl_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_cost(bcrypt_cost: u32) -> Config {
        Config {
            database: DatabaseConfig {
                url: "postgres://localhost/hr".to_string(),
                max_connections: default_max_connections(),
            },
            server: ServerConfig { http_port: 8080 },
            jwt: JwtConfig {
                secret: None,
                default_ttl_minutes: default_ttl_minutes(),
                login_ttl_minutes: login_ttl_minutes(),
            },
            password: PasswordConfig { bcrypt_cost },
        }
    }

    #[test]
    fn test_default_cost_is_valid() {
        let config = config_with_cost(PasswordConfig::default().bcrypt_cost);
        assert!(config.validate().is_ok());
        assert!(config_with_cost(4).validate().is_ok());
        assert!(config_with_cost(31).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_cost_rejected() {
        for cost in [0, 3, 32, 100] {
            let result = config_with_cost(cost).validate();
            assert!(
                matches!(result, Err(ConfigError::Message(_))),
                "cost {} accepted",
                cost
            );
        }
    }

    #[test]
    fn test_non_positive_ttl_rejected() {
        let mut config = config_with_cost(12);
        config.jwt.login_ttl_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_secret_is_redacted() {
        let mut config = config_with_cost(12);
        config.jwt.secret = Some("hunter2".to_string());

        let printed = format!("{:?}", config.jwt);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
    }
}
