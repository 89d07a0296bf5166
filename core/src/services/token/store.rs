//! Refresh token store enforcing the single-active-token invariant

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::{TokenRepository, UserRepository};

/// Durable single-active-token-per-user refresh store
///
/// Rotation is a delete-all-then-insert read-modify-write, so it is
/// serialized per user: two concurrent rotations for the same owner must
/// not each delete the other's freshly inserted token or both insert.
/// Validation paths stay lock-free.
pub struct RefreshTokenStore<R: TokenRepository, U: UserRepository> {
    tokens: R,
    users: U,
    refresh_ttl: Duration,
    rotation_locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl<R: TokenRepository, U: UserRepository> RefreshTokenStore<R, U> {
    /// Creates a new store over the given persistence collaborators
    pub fn new(tokens: R, users: U, refresh_ttl: Duration) -> Self {
        Self {
            tokens,
            users,
            refresh_ttl,
            rotation_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Replaces the user's active refresh token with a fresh one
    ///
    /// Deletes every existing token owned by `user_id`, then persists a new
    /// token with a random 128-bit id and expiry = now + refresh TTL. The
    /// two steps run under a per-user lock so the invariant holds across
    /// concurrent callers. Persistence failures propagate unmodified; there
    /// is no retry.
    pub async fn rotate(&self, user_id: Uuid) -> Result<RefreshToken, DomainError> {
        let lock = self.user_lock(user_id).await;
        let _guard = lock.lock().await;

        self.tokens.delete_user_tokens(user_id).await?;

        let token = RefreshToken::new(user_id, self.refresh_ttl);
        self.tokens.save_refresh_token(token).await
    }

    /// Checks whether a refresh token exists, is unrevoked and unexpired
    ///
    /// A missing token is an expected outcome, logged at warn, never an
    /// error.
    pub async fn is_valid(&self, token_id: Uuid) -> Result<bool, DomainError> {
        let token = self.tokens.find_by_id(token_id).await?;
        Ok(self.check_liveness(token_id, token.as_ref()))
    }

    /// Resolves a refresh token to itself and its owning user
    ///
    /// Yields `None` under the same conditions as [`Self::is_valid`]
    /// returns false, and additionally when the owner no longer exists in
    /// the identity store.
    pub async fn resolve(
        &self,
        token_id: Uuid,
    ) -> Result<Option<(RefreshToken, User)>, DomainError> {
        let token = self.tokens.find_by_id(token_id).await?;
        if !self.check_liveness(token_id, token.as_ref()) {
            return Ok(None);
        }
        // liveness implies the token is present
        let Some(token) = token else {
            return Ok(None);
        };

        match self.users.find_by_id(token.user_id).await? {
            Some(user) => Ok(Some((token, user))),
            None => {
                tracing::warn!(token_id = %token_id, user_id = %token.user_id,
                    "refresh token owner no longer exists");
                Ok(None)
            }
        }
    }

    fn check_liveness(&self, token_id: Uuid, token: Option<&RefreshToken>) -> bool {
        let Some(token) = token else {
            tracing::warn!(token_id = %token_id, "refresh token not found");
            return false;
        };

        let mut live = true;
        if token.is_revoked {
            tracing::warn!(token_id = %token_id, "refresh token is revoked");
            live = false;
        }
        if token.is_expired() {
            tracing::warn!(token_id = %token_id, "refresh token expired");
            live = false;
        }
        live
    }

    async fn user_lock(&self, user_id: Uuid) -> Arc<Mutex<()>> {
        let mut locks = self.rotation_locks.lock().await;
        Arc::clone(locks.entry(user_id).or_default())
    }
}
