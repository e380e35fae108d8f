use chrono::Duration;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;
use super::secret::SigningSecret;

/// Issues and verifies time-limited bearer tokens.
///
/// Tokens are never stored: verification is pure computation over the
/// signature and the embedded expiry, so a `TokenService` can be shared
/// read-only between any number of concurrent requests.
pub struct TokenService {
    handler: JwtHandler,
    default_ttl: Duration,
}

impl TokenService {
    /// Lifetime applied when `issue` is called without an explicit ttl.
    pub const DEFAULT_TTL_MINUTES: i64 = 15;

    /// Create a token service signing with HS256.
    pub fn new(secret: &SigningSecret) -> Self {
        Self {
            handler: JwtHandler::new(secret.as_bytes()),
            default_ttl: Duration::minutes(Self::DEFAULT_TTL_MINUTES),
        }
    }

    /// Override the default token lifetime.
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Issue a token for `subject` expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - Login name embedded in the token
    /// * `ttl` - Lifetime, or `None` for the default lifetime
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, subject: &str, ttl: Option<Duration>) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, ttl.unwrap_or(self.default_ttl));
        self.handler.encode(&claims)
    }

    /// Verify a token and return its subject.
    ///
    /// # Errors
    /// * `InvalidToken` - Tampered, malformed or expired token (indistinguishable)
    pub fn verify(&self, token: &str) -> Result<String, JwtError> {
        let claims: Claims = self.handler.decode(token)?;
        Ok(claims.sub)
    }
}
