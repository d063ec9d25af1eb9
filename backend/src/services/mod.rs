//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the token service.

pub mod auth;
pub mod student;

pub use auth::AuthService;
pub use student::StudentService;
