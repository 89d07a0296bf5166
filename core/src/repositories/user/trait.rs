//! User lookup trait consumed by the refresh flow.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Lookup interface towards the external identity store
///
/// The refresh flow only ever needs to resolve a refresh token's owner back
/// into a [`User`] value to mint new claims; registration, credential
/// verification and the rest of user management live outside this crate.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Lookup failed
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;
}
