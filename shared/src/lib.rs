//! Student Records Shared Library
//!
//! Types shared between the backend and its clients: the `Student` model,
//! request/response bodies, authentication errors and field validation.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::Student;
pub use types::*;
