//! Access token validation

use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

/// Verifies signature, issuer, audience and expiry of access tokens
///
/// Validation is read-only and safe to run fully in parallel. Failures are
/// recovered into `None` and logged with the reason; they never surface as
/// errors to the caller.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    /// Creates a new validator for the given configuration
    pub fn new(config: &TokenServiceConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        // Exact boundary enforcement, no clock-skew grace window
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    /// Validates an access token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Some(Claims)` - Signature, issuer, audience and expiry all check out
    /// * `None` - Any failure; the reason is logged at warn level
    pub fn validate(&self, token: &str) -> Option<Claims> {
        match self.decode(token) {
            Ok(claims) => Some(claims),
            Err(reason) => {
                tracing::warn!(%reason, "access token validation failed");
                None
            }
        }
    }

    /// Validates an access token and extracts the subject as a user id
    ///
    /// # Returns
    ///
    /// * `Some(Uuid)` - Token valid and subject parses as a UUID
    /// * `None` - Validation failed or the subject claim is unparsable
    pub fn user_id(&self, token: &str) -> Option<Uuid> {
        self.validate(token).and_then(|claims| claims.user_id().ok())
    }

    fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => TokenError::InvalidClaims,
                _ => TokenError::InvalidTokenFormat,
            })
    }
}
