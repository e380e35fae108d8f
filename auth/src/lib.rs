//! Authentication utilities library
//!
//! Provides the credential primitives used by the HR service:
//! - Password hashing (bcrypt)
//! - Signed, time-limited bearer tokens (JWT, HMAC family)
//! - Authentication coordination
//!
//! Account lookup and role checks are not part of this crate; the service
//! combines these primitives with its own directory of accounts.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(4);
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{SigningSecret, TokenService};
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(&SigningSecret::generate());
//! let token = tokens.issue("alice", Some(Duration::days(7))).unwrap();
//! assert_eq!(tokens.verify(&token).unwrap(), "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordHasher, SigningSecret, TokenService};
//!
//! let auth = Authenticator::from_parts(
//!     PasswordHasher::with_cost(4),
//!     TokenService::new(&SigningSecret::from_bytes("secret_key_at_least_32_bytes_long!")),
//! );
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, "alice", None).unwrap();
//!
//! // Validate token
//! assert_eq!(auth.validate_token(&result.access_token).unwrap(), "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SigningSecret;
pub use jwt::TokenService;
pub use password::PasswordError;
pub use password::PasswordHasher;
