//! Authentication module
//!
//! Provides signed-token authentication with bcrypt/argon2 password checks.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, KeyError, TokenKeys, TokenService, MAX_TTL_MS, MIN_KEY_BYTES};
pub use middleware::{require_auth, AuthUser};
pub use password::PasswordService;
