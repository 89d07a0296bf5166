//! Access token issuance

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::{TokenServiceConfig, MIN_HMAC_SECRET_BYTES};

/// Builds signed access tokens from a user identity and configuration
///
/// Issuance is a pure function of (user, config, clock); nothing is
/// persisted. Validity of the produced token is entirely self-contained in
/// its signature and embedded expiry.
pub struct TokenIssuer {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    /// Creates a new issuer for the given configuration
    ///
    /// # Returns
    ///
    /// * `Ok(TokenIssuer)` - Ready to sign
    /// * `Err(DomainError)` - The secret is below the HMAC-SHA256 minimum
    ///   key length; short secrets are rejected rather than padded
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        let secret_len = config.secret.as_bytes().len();
        if secret_len < MIN_HMAC_SECRET_BYTES {
            return Err(TokenError::KeyTooShort {
                actual: secret_len,
                minimum: MIN_HMAC_SECRET_BYTES,
            }
            .into());
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());

        Ok(Self {
            config,
            encoding_key,
        })
    }

    /// Issues a signed access token for a user
    ///
    /// Claims carry the subject id, the `UserIdentifier` duplicate, the
    /// display name and email (empty string when absent), plus the
    /// configured issuer/audience and expiry = now + TTL.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact JWT
    /// * `Err(DomainError)` - User identity incomplete or signing failed
    pub fn issue(&self, user: &User) -> Result<String, DomainError> {
        if user.id.is_nil() {
            return Err(DomainError::Validation {
                message: "User id must not be nil".to_string(),
            });
        }
        if user.username.is_empty() {
            return Err(DomainError::Validation {
                message: "Username must not be empty".to_string(),
            });
        }

        let claims = Claims::new_access_token(
            user,
            &self.config.issuer,
            &self.config.audience,
            self.config.expiry_minutes,
        );

        let header = Header::new(Algorithm::HS256);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }
}
