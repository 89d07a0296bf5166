//! Main token service implementation

use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::{TokenRepository, UserRepository};

use super::cache::TokenCache;
use super::config::TokenServiceConfig;
use super::issuer::TokenIssuer;
use super::store::RefreshTokenStore;
use super::validator::TokenValidator;

/// Orchestrates issuance, validation, rotation and the token-pair cache
pub struct TokenService<R: TokenRepository, U: UserRepository> {
    issuer: TokenIssuer,
    validator: TokenValidator,
    pub(crate) store: RefreshTokenStore<R, U>,
    pub(crate) cache: TokenCache,
}

impl<R: TokenRepository, U: UserRepository> TokenService<R, U> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `token_repository` - Refresh token persistence collaborator
    /// * `user_repository` - Identity lookup collaborator
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or an error when the signing secret is below
    /// the HMAC-SHA256 minimum key length
    pub fn new(
        token_repository: R,
        user_repository: U,
        config: TokenServiceConfig,
    ) -> Result<Self, DomainError> {
        let validator = TokenValidator::new(&config);
        let refresh_ttl = chrono::Duration::minutes(config.refresh_expiry_minutes());
        let issuer = TokenIssuer::new(config)?;

        Ok(Self {
            issuer,
            validator,
            store: RefreshTokenStore::new(token_repository, user_repository, refresh_ttl),
            cache: TokenCache::new(),
        })
    }

    /// Issues a fresh token pair after successful authentication
    ///
    /// Mints an access token, rotates the user's refresh token (deleting
    /// any prior one), records the pair in the cache and returns it.
    pub async fn issue_initial(&self, user: &User) -> Result<TokenPair, DomainError> {
        let access_token = self.issuer.issue(user)?;
        let refresh_token = self.store.rotate(user.id).await?;

        let pair = TokenPair::new(access_token, refresh_token.id);
        self.cache.put(user.id, pair.clone()).await;

        Ok(pair)
    }

    /// Validates an access token and returns its claims
    ///
    /// Any failure yields `None`; the reason is logged, never surfaced.
    pub fn validate(&self, token: &str) -> Option<Claims> {
        self.validator.validate(token)
    }

    /// Validates an access token and extracts the subject as a user id
    pub fn user_id(&self, token: &str) -> Option<Uuid> {
        self.validator.user_id(token)
    }

    /// Checks whether a refresh token is known, unrevoked and unexpired
    pub async fn validate_refresh(&self, refresh_token: Uuid) -> Result<bool, DomainError> {
        self.store.is_valid(refresh_token).await
    }

    /// Exchanges a refresh token for a new token pair
    ///
    /// Resolves the presented id to its owner and re-runs the issuance
    /// path for that user, which rotates again and invalidates the
    /// presented id.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - New pair for the resolved owner
    /// * `Err(DomainError)` - `TokenError::InvalidRefreshToken` when the id
    ///   is unknown, expired or revoked; persistence failures propagate
    pub async fn refresh(&self, refresh_token: Uuid) -> Result<TokenPair, DomainError> {
        let (_, user) = self
            .store
            .resolve(refresh_token)
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidRefreshToken))?;

        self.issue_initial(&user).await
    }

    /// Drops the cached token pair for a user
    ///
    /// Logout clears the in-memory cache only; the persisted refresh token
    /// stays valid until the next rotation or its expiry.
    pub async fn logout(&self, user_id: Uuid) {
        self.cache.remove(user_id).await;
    }
}
