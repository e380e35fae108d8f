use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;

/// Key material used to sign and verify access tokens.
///
/// Either supplied by configuration or generated once at start-up.
/// A generated secret lives only as long as the process: every token issued
/// before a restart stops verifying afterwards. Persist the secret in
/// configuration when tokens must survive restarts.
#[derive(Clone)]
pub struct SigningSecret {
    bytes: Vec<u8>,
    generated: bool,
}

impl SigningSecret {
    /// Length in bytes of a generated secret.
    pub const GENERATED_LENGTH: usize = 32;

    /// Wrap configured key material.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            generated: false,
        }
    }

    /// Generate a random secret from the operating system RNG.
    pub fn generate() -> Self {
        let mut bytes = vec![0u8; Self::GENERATED_LENGTH];
        OsRng.fill_bytes(&mut bytes);
        Self {
            bytes,
            generated: true,
        }
    }

    /// Use the configured value, or generate one when it is absent or blank.
    pub fn from_config(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|s| !s.is_empty()) {
            Some(secret) => Self::from_bytes(secret.as_bytes()),
            None => Self::generate(),
        }
    }

    /// Whether this secret was generated for the current process.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningSecret")
            .field("len", &self.bytes.len())
            .field("generated", &self.generated)
            .finish()
    }
}
