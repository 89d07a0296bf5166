//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken entity persistence operations
///
/// This is the collaborator boundary towards the database: create,
/// find-by-id, delete-by-owner. Rotation atomicity is handled above this
/// trait by [`crate::services::token::RefreshTokenStore`], so plain row
/// operations are enough here.
///
/// Any failure is a data-integrity problem and must be propagated, never
/// retried or mapped to a "token missing" result.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new refresh token to the repository
    ///
    /// # Arguments
    /// * `token` - The RefreshToken entity to persist
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved token
    /// * `Err(DomainError)` - Save failed (e.g., duplicate id)
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its identifier
    ///
    /// # Arguments
    /// * `id` - The identifier presented by the client
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Token found
    /// * `Ok(None)` - No token with the given id
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RefreshToken>, DomainError>;

    /// Delete every refresh token owned by a user
    ///
    /// # Arguments
    /// * `user_id` - The owning user
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of tokens deleted
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_user_tokens(&self, user_id: Uuid) -> Result<usize, DomainError>;
}
