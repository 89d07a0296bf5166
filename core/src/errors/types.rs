//! Token-specific error types.
//!
//! Validation failures on access tokens are recovered locally into a `None`
//! result and only logged; the variants here still name the reason so the
//! log line says what went wrong. Configuration (`KeyTooShort`) and
//! authorization (`InvalidRefreshToken`) failures surface to the caller.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Signing secret is {actual} bytes, below the {minimum}-byte HMAC-SHA256 minimum")]
    KeyTooShort { actual: usize, minimum: usize },

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Issuer or audience mismatch")]
    InvalidClaims,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
