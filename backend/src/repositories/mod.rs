//! Database repositories
//!
//! Data access is expressed as traits so services can run against Postgres
//! in production and an in-memory store in tests or local development.

pub mod memory;
pub mod student;
pub mod user;

use async_trait::async_trait;
use student_records_shared::Student;
use thiserror::Error;

pub use memory::{InMemoryStudentRepository, InMemoryUserRepository};
pub use student::PgStudentRepository;
pub use user::{PgUserRepository, UserRecord};

/// Failures reported by any repository implementation
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Duplicate {field}")]
    Duplicate { field: &'static str },

    #[error("Storage error: {0}")]
    Storage(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                let field = match db_err.constraint() {
                    Some(constraint) if constraint.contains("email") => "email",
                    Some(constraint) if constraint.contains("username") => "username",
                    _ => "id",
                };
                return RepositoryError::Duplicate { field };
            }
        }
        RepositoryError::Storage(err)
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Persistence for student records
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// All students ordered by id
    async fn find_all(&self) -> RepositoryResult<Vec<Student>>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Student>>;

    /// Store a new student; an existing id or email is `Duplicate`
    async fn insert(&self, student: &Student) -> RepositoryResult<Student>;

    /// Create or replace the student with this id
    async fn save(&self, student: &Student) -> RepositoryResult<Student>;

    /// Returns whether a row was removed
    async fn delete_by_id(&self, id: i64) -> RepositoryResult<bool>;

    async fn health_check(&self) -> RepositoryResult<()>;
}

/// Persistence for login accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<UserRecord>>;

    /// Create the user or replace its password hash
    async fn upsert(&self, username: &str, password_hash: &str) -> RepositoryResult<()>;
}
