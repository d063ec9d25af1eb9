//! Password hash verification
//!
//! Stored hashes are bcrypt (`$2a$`, `$2b$`, `$2y$`) or argon2id PHC strings
//! (`$argon2id$...`). The scheme is picked from the hash prefix.
//!
//! # Performance Considerations
//!
//! Both schemes are intentionally CPU-intensive. Use the `_async` variant
//! from request handlers so the work runs on the blocking thread pool.

use anyhow::Result;
use argon2::{
    password_hash::{self, PasswordHash, PasswordVerifier},
    Argon2,
};

/// Password verification service
pub struct PasswordService;

impl PasswordService {
    /// Verify a password against a stored hash (blocking operation)
    ///
    /// Returns `Ok(false)` for a wrong password and `Err` for a hash that
    /// cannot be parsed.
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        if hash.starts_with("$argon2") {
            let parsed_hash = PasswordHash::new(hash)
                .map_err(|e| anyhow::anyhow!("Invalid argon2 hash format: {}", e))?;
            if parsed_hash.salt.is_none() || parsed_hash.hash.is_none() {
                anyhow::bail!("Argon2 hash is missing its salt or output");
            }
            return match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(e) => Err(anyhow::anyhow!("Argon2 verification failed: {}", e)),
            };
        }

        bcrypt::verify(password, hash)
            .map_err(|e| anyhow::anyhow!("Invalid bcrypt hash format: {}", e))
    }

    /// Verify a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool.
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}
