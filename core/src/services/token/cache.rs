//! Per-user cache of the most recently issued token pair

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;

/// Process-wide map from user id to the latest issued token pair
///
/// Written on every issuance and cleared on logout. The orchestration
/// logic never reads it; the cache is a write-only side-channel, and
/// [`TokenCache::get`] exists for observation only — it is deliberately
/// not wired into validation or refresh.
pub struct TokenCache {
    entries: RwLock<HashMap<Uuid, TokenPair>>,
}

impl TokenCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Overwrite-only upsert of the latest pair for a user
    pub async fn put(&self, user_id: Uuid, pair: TokenPair) {
        let mut entries = self.entries.write().await;
        entries.insert(user_id, pair);
    }

    /// Idempotent removal of a user's entry
    pub async fn remove(&self, user_id: Uuid) {
        let mut entries = self.entries.write().await;
        entries.remove(&user_id);
    }

    /// Returns the latest pair recorded for a user, if any
    pub async fn get(&self, user_id: Uuid) -> Option<TokenPair> {
        let entries = self.entries.read().await;
        entries.get(&user_id).cloned()
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(access: &str) -> TokenPair {
        TokenPair::new(access.to_string(), Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_put_overwrites_prior_entry() {
        let cache = TokenCache::new();
        let user_id = Uuid::new_v4();

        cache.put(user_id, pair("first")).await;
        cache.put(user_id, pair("second")).await;

        let entry = cache.get(user_id).await.unwrap();
        assert_eq!(entry.access_token, "second");
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let cache = TokenCache::new();
        let user_id = Uuid::new_v4();

        cache.put(user_id, pair("only")).await;
        cache.remove(user_id).await;
        cache.remove(user_id).await;

        assert!(cache.get(user_id).await.is_none());
    }

    #[tokio::test]
    async fn test_entries_are_independent_per_user() {
        let cache = TokenCache::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        cache.put(a, pair("a")).await;
        cache.put(b, pair("b")).await;
        cache.remove(a).await;

        assert!(cache.get(a).await.is_none());
        assert_eq!(cache.get(b).await.unwrap().access_token, "b");
    }
}
