use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Salted, adaptive-cost one-way hashing (internally uses bcrypt).
/// Hashes are stored in the modular crypt format (`$2b$<cost>$...`),
/// so the cost used at hashing time travels with every stored hash.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// bcrypt only reads this many bytes of input and ignores the rest.
    pub const MAX_PASSWORD_BYTES: usize = 72;

    /// Range of work factors bcrypt accepts.
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 31;

    /// Create a new password hasher with the default bcrypt cost.
    pub fn new() -> Self {
        Self::with_cost(::bcrypt::DEFAULT_COST)
    }

    /// Create a password hasher with an explicit work factor.
    ///
    /// # Arguments
    /// * `cost` - bcrypt cost (log2 of the number of rounds, `MIN_COST..=MAX_COST`)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Configured work factor.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password.
    ///
    /// A fresh random salt is generated for every call, so hashing the same
    /// password twice yields two different strings.
    ///
    /// # Errors
    /// * `TooLong` - Password exceeds `MAX_PASSWORD_BYTES`
    /// * `HashingFailed` - The configured cost is outside the range bcrypt accepts
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.len() > Self::MAX_PASSWORD_BYTES {
            return Err(PasswordError::TooLong {
                max: Self::MAX_PASSWORD_BYTES,
                actual: password.len(),
            });
        }

        ::bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Returns `false` on mismatch and also when `hash` cannot be parsed.
    /// A corrupt stored hash must read as "not verified", never as a fault
    /// that callers could mistake for something else. Passwords longer than
    /// `MAX_PASSWORD_BYTES` never verify, since none of them can be hashed.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        if password.len() > Self::MAX_PASSWORD_BYTES {
            return false;
        }

        ::bcrypt::verify(password, hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
