//! User identity value consumed by token issuance.
//!
//! Keyforge does not manage user records; registration, credential checks
//! and lookup-by-username belong to the external identity store. The core
//! only needs enough of a user to mint claims for it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal user identity consumed by the token service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name embedded into access-token claims
    pub username: String,

    /// Email address, if the identity store has one
    pub email: Option<String>,
}

impl User {
    /// Creates a new user identity with a fresh id
    pub fn new(username: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email,
        }
    }

    /// Creates a user identity for an existing id
    pub fn with_id(id: Uuid, username: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email,
        }
    }
}
