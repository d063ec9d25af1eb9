//! Signed token issuance and verification
//!
//! Tokens are compact HS256 JWTs. Timestamps are Unix milliseconds so
//! sub-second TTLs behave exactly: a token is expired once `now >= exp`, with
//! no leeway. They travel as the private claims `iat_ms`/`exp_ms`, never as
//! the registered second-based `iat`/`exp`, so the tokens are only meaningful
//! to this service.

use crate::config::JwtConfig;
use anyhow::Result;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use student_records_shared::AuthError;
use thiserror::Error;

/// Minimum decoded key length for HMAC-SHA256
pub const MIN_KEY_BYTES: usize = 32;

/// Longest accepted token lifetime (one year)
pub const MAX_TTL_MS: i64 = 365 * 24 * 60 * 60 * 1000;

/// Token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Issued at (Unix milliseconds)
    #[serde(rename = "iat_ms")]
    pub iat: i64,
    /// Expiration time (Unix milliseconds)
    #[serde(rename = "exp_ms")]
    pub exp: i64,
}

/// Reasons the signing key or TTL cannot be used
#[derive(Error, Debug, PartialEq, Eq)]
pub enum KeyError {
    #[error("Signing secret is not configured")]
    Missing,

    #[error("Signing secret is not valid base64")]
    Malformed,

    #[error("Signing secret must decode to at least 32 bytes, got {0}")]
    TooShort(usize),

    #[error("Token TTL must be between 1ms and one year, got {0}ms")]
    InvalidTtl(i64),
}

/// Pre-computed signing keys
#[derive(Clone)]
pub struct TokenKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl TokenKeys {
    /// Decode a base64 secret into signing keys
    pub fn from_base64(secret: &str) -> Result<Self, KeyError> {
        let secret = secret.trim();
        if secret.is_empty() {
            return Err(KeyError::Missing);
        }

        let bytes = BASE64.decode(secret).map_err(|_| KeyError::Malformed)?;
        if bytes.len() < MIN_KEY_BYTES {
            return Err(KeyError::TooShort(bytes.len()));
        }

        Ok(Self {
            encoding: Arc::new(EncodingKey::from_secret(&bytes)),
            decoding: Arc::new(DecodingKey::from_secret(&bytes)),
        })
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// Token service for issuing and verifying credentials
///
/// Built once at startup from configuration and shared through `AppState`.
/// Clones share the same keys.
#[derive(Clone)]
pub struct TokenService {
    keys: TokenKeys,
    ttl: Duration,
    validation: Validation,
}

impl TokenService {
    /// Create a token service, failing fast on a bad key or TTL
    pub fn new(config: &JwtConfig) -> Result<Self, KeyError> {
        Self::from_parts(config.secret.expose_secret(), config.expiration_ms)
    }

    /// Create a token service from a base64 secret and a TTL in milliseconds
    pub fn from_parts(secret: &str, ttl_ms: i64) -> Result<Self, KeyError> {
        if ttl_ms <= 0 || ttl_ms > MAX_TTL_MS {
            return Err(KeyError::InvalidTtl(ttl_ms));
        }
        let keys = TokenKeys::from_base64(secret)?;

        // Expiry is checked here in milliseconds, not by jsonwebtoken in seconds.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub"]);

        Ok(Self {
            keys,
            ttl: Duration::milliseconds(ttl_ms),
            validation,
        })
    }

    /// Issue a token for an already-authenticated subject
    #[inline]
    pub fn issue(&self, subject: &str) -> Result<String> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String> {
        if subject.is_empty() {
            anyhow::bail!("Cannot issue a token for an empty subject");
        }

        let expires = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| anyhow::anyhow!("Token expiry is out of range"))?;

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp_millis(),
            exp: expires.timestamp_millis(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))
    }

    /// Verify a token and return its subject
    #[inline]
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`
    ///
    /// The signature is checked before anything in the payload is trusted,
    /// so a tampered token is `InvalidToken` even when it is also expired.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = self.decode_claims(token)?;

        if now.timestamp_millis() >= claims.exp {
            return Err(AuthError::ExpiredToken);
        }

        Ok(claims.sub)
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, self.keys.decoding(), &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            AuthError::InvalidToken
        })?;

        if data.claims.sub.is_empty() {
            return Err(AuthError::InvalidToken);
        }

        Ok(data.claims)
    }

    /// Configured token lifetime
    #[inline]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
