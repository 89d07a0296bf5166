//! Configuration for the token service

use crate::domain::entities::token::DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES;

/// Minimum signing secret length for HMAC-SHA256, in bytes
///
/// Secrets below this length are rejected outright rather than padded.
pub const MIN_HMAC_SECRET_BYTES: usize = 32;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Shared JWT signing secret
    pub secret: String,
    /// Issuer claim, embedded on issuance and checked on validation
    pub issuer: String,
    /// Audience claim, embedded on issuance and checked on validation
    pub audience: String,
    /// Access token expiry in minutes; the refresh token lives twice as long
    pub expiry_minutes: i64,
}

impl TokenServiceConfig {
    /// Create a configuration with the given secret and default expiry
    pub fn new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            expiry_minutes: DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES,
        }
    }

    /// Set the access token expiry in minutes
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.expiry_minutes = minutes;
        self
    }

    /// Refresh token expiry in minutes (2x the access token expiry)
    pub fn refresh_expiry_minutes(&self) -> i64 {
        self.expiry_minutes * 2
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "development-secret-please-change-in-production".to_string());
        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| "keyforge".to_string());
        let audience =
            std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "keyforge-api".to_string());
        let expiry_minutes = std::env::var("JWT_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES);

        Self {
            secret,
            issuer,
            audience,
            expiry_minutes,
        }
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            issuer: "keyforge".to_string(),
            audience: "keyforge-api".to_string(),
            expiry_minutes: DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES,
        }
    }
}
