//! Error types for the Student Records application

use thiserror::Error;

/// Authentication error types
///
/// `AuthenticationFailed` covers both an unknown username and a wrong
/// password so callers cannot tell the two apart.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    AuthenticationFailed,

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Missing token")]
    MissingToken,
}

impl AuthError {
    /// Stable machine-readable code used in API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::AuthenticationFailed => "AUTHENTICATION_FAILED",
            AuthError::ExpiredToken => "TOKEN_EXPIRED",
            AuthError::InvalidToken => "INVALID_TOKEN",
            AuthError::MissingToken => "MISSING_TOKEN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            AuthError::AuthenticationFailed.code(),
            AuthError::ExpiredToken.code(),
            AuthError::InvalidToken.code(),
            AuthError::MissingToken.code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_display_does_not_leak_detail() {
        assert_eq!(AuthError::AuthenticationFailed.to_string(), "Invalid credentials");
    }
}
