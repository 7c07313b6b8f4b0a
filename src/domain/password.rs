//! Password value object - Domain layer password handling.
//!
//! Plain text never leaves this module; callers only see the bcrypt hash.

use crate::config::{MIN_PASSWORD_LENGTH, MSG_INVALID_PASSWORD};
use crate::errors::{AppError, AppResult};

/// Hashed password ready for storage.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text with the given bcrypt cost.
    ///
    /// # Errors
    /// Returns a validation error if the password is shorter than
    /// `MIN_PASSWORD_LENGTH` characters, and an internal error if bcrypt
    /// rejects the cost.
    pub fn new(plain_text: &str, cost: u32) -> AppResult<Self> {
        if (plain_text.chars().count() as u64) < MIN_PASSWORD_LENGTH {
            return Err(AppError::validation(MSG_INVALID_PASSWORD));
        }

        let hash = Self::hash(plain_text, cost)?;
        Ok(Self { hash })
    }

    /// Consume and return the hash string for storage.
    pub fn into_string(self) -> String {
        self.hash
    }

    fn hash(plain_text: &str, cost: u32) -> AppResult<String> {
        bcrypt::hash(plain_text, cost)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))
    }
}
