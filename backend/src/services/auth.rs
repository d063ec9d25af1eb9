//! Authentication service: credential checks and token issuance
//!
//! # Performance Optimizations
//!
//! - Password verification runs on the blocking thread pool
//! - The token service is passed by reference (keys decoded once at startup)

use crate::auth::{PasswordService, TokenService};
use crate::config::SeedUser;
use crate::error::ApiError;
use crate::repositories::UserRepository;
use student_records_shared::types::AuthResponse;
use student_records_shared::AuthError;
use tracing::{info, warn};

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Check a username and password against the stored hash
    ///
    /// Unknown users and wrong passwords both yield `AuthenticationFailed`.
    pub async fn authenticate(
        users: &dyn UserRepository,
        username: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let user = users
            .find_by_username(username)
            .await?
            .ok_or(AuthError::AuthenticationFailed)?;

        let valid = PasswordService::verify_async(password.to_string(), user.password_hash)
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(AuthError::AuthenticationFailed.into());
        }

        Ok(())
    }

    /// Authenticate and issue a token for the username
    pub async fn login(
        users: &dyn UserRepository,
        tokens: &TokenService,
        username: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        if let Err(err) = Self::authenticate(users, username, password).await {
            warn!(username = %username, "Login rejected");
            return Err(err);
        }

        let token = tokens.issue(username).map_err(ApiError::Internal)?;
        info!(username = %username, "Login succeeded");

        Ok(AuthResponse { token })
    }

    /// Provision configured users, replacing stored hashes
    pub async fn seed_users(users: &dyn UserRepository, seeds: &[SeedUser]) -> Result<(), ApiError> {
        for seed in seeds {
            if seed.username.trim().is_empty() {
                return Err(ApiError::invalid_field("username", "Seed username cannot be empty"));
            }
            users.upsert(&seed.username, &seed.password_hash).await?;
        }
        if !seeds.is_empty() {
            info!(count = seeds.len(), "Provisioned users from configuration");
        }
        Ok(())
    }
}
