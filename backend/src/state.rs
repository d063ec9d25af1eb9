//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! # Design Principles
//!
//! 1. **Pre-compute expensive resources**: signing keys and DB pools are created once
//! 2. **Cheap cloning**: All fields use Arc or are already Clone-cheap
//! 3. **Immutable after creation**: State is read-only during request handling

use crate::auth::{KeyError, TokenService};
use crate::config::AppConfig;
use crate::repositories::{
    InMemoryStudentRepository, InMemoryUserRepository, PgStudentRepository, PgUserRepository,
    StudentRepository, UserRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
///
/// # Performance
///
/// - `students`/`users`: trait objects behind Arc, cloning is O(1)
/// - `config`: Wrapped in Arc, cloning is O(1)
/// - `tokens`: Pre-computed keys wrapped in Arc, cloning is O(1)
#[derive(Clone)]
pub struct AppState {
    /// Student record storage
    pub students: Arc<dyn StudentRepository>,
    /// Login account storage
    pub users: Arc<dyn UserRepository>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Token service with decoded signing keys
    pub tokens: TokenService,
}

impl AppState {
    /// Create state backed by Postgres
    ///
    /// Fails if the configured signing key or TTL is unusable.
    pub fn new(pool: PgPool, config: AppConfig) -> Result<Self, KeyError> {
        Self::with_repositories(
            Arc::new(PgStudentRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool)),
            config,
        )
    }

    /// Create state backed by in-memory repositories
    pub fn in_memory(config: AppConfig) -> Result<Self, KeyError> {
        Self::with_repositories(
            Arc::new(InMemoryStudentRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            config,
        )
    }

    /// Create state from explicit repositories
    pub fn with_repositories(
        students: Arc<dyn StudentRepository>,
        users: Arc<dyn UserRepository>,
        config: AppConfig,
    ) -> Result<Self, KeyError> {
        let tokens = TokenService::new(&config.jwt)?;

        Ok(Self {
            students,
            users,
            config: Arc::new(config),
            tokens,
        })
    }

    /// Get the student repository
    #[inline]
    pub fn students(&self) -> &dyn StudentRepository {
        self.students.as_ref()
    }

    /// Get the user repository
    #[inline]
    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the token service
    #[inline]
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}
