//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;

/// Default access token expiration time (15 minutes)
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Duplicate of the subject, kept for consumers that read the
    /// `UserIdentifier` claim instead of `sub`
    #[serde(rename = "UserIdentifier")]
    pub user_identifier: String,

    /// Display name
    pub name: String,

    /// Email address (empty string when the user has none)
    pub email: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for an access token
    pub fn new_access_token(
        user: &User,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        expiry_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(expiry_minutes);

        Self {
            sub: user.id.to_string(),
            user_identifier: user.id.to_string(),
            name: user.username.clone(),
            email: user.email.clone().unwrap_or_default(),
            iss: issuer.into(),
            aud: audience.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Gets the user ID from the subject claim
    ///
    /// # Returns
    ///
    /// `Ok(Uuid)` if the subject can be parsed as a UUID, `Err` otherwise
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token entity held by the persistence backend
///
/// Invariant: at most one non-deleted refresh token exists per user at any
/// time. Issuing a new token deletes every prior token for that owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Random 128-bit identifier; the value presented by clients
    pub id: Uuid,

    /// User ID this token belongs to
    pub user_id: Uuid,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been revoked
    ///
    /// No issuance path sets this; rotation deletes superseded tokens
    /// outright. The flag is still honored by validation so an operator
    /// or a future audit path can flip it.
    pub is_revoked: bool,
}

impl RefreshToken {
    /// Creates a new refresh token for a user with the given lifetime
    pub fn new(user_id: Uuid, ttl: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            expires_at: Utc::now() + ttl,
            is_revoked: false,
        }
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the refresh token is valid
    ///
    /// A token is valid if it hasn't expired and hasn't been revoked
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && !self.is_revoked
    }

    /// Revokes the refresh token
    pub fn revoke(&mut self) {
        self.is_revoked = true;
    }
}

/// Token pair returned to the client after issuance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed JWT access token
    pub access_token: String,

    /// Identifier of the active refresh token
    pub refresh_token: Uuid,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: Uuid) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new("alice", Some("alice@example.com".to_string()))
    }

    #[test]
    fn test_access_token_claims() {
        let user = test_user();
        let claims = Claims::new_access_token(&user, "keyforge", "keyforge-api", 15);

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.user_identifier, claims.sub);
        assert_eq!(claims.name, "alice");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.iss, "keyforge");
        assert_eq!(claims.aud, "keyforge-api");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_empty_email_for_user_without_one() {
        let user = User::new("bob", None);
        let claims = Claims::new_access_token(&user, "keyforge", "keyforge-api", 15);

        assert_eq!(claims.email, "");
    }

    #[test]
    fn test_claims_user_id_parsing() {
        let user = test_user();
        let claims = Claims::new_access_token(&user, "keyforge", "keyforge-api", 15);

        assert_eq!(claims.user_id().unwrap(), user.id);
    }

    #[test]
    fn test_claims_expiration() {
        let user = test_user();
        let mut claims = Claims::new_access_token(&user, "keyforge", "keyforge-api", 15);
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
    }

    #[test]
    fn test_claims_serialization_uses_user_identifier_name() {
        let user = test_user();
        let claims = Claims::new_access_token(&user, "keyforge", "keyforge-api", 15);

        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"UserIdentifier\""));

        let deserialized: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(claims, deserialized);
    }

    #[test]
    fn test_refresh_token_creation() {
        let user_id = Uuid::new_v4();
        let token = RefreshToken::new(user_id, Duration::minutes(30));

        assert_eq!(token.user_id, user_id);
        assert!(!token.is_revoked);
        assert!(!token.is_expired());
        assert!(token.is_valid());
    }

    #[test]
    fn test_refresh_token_ids_are_random() {
        let user_id = Uuid::new_v4();
        let a = RefreshToken::new(user_id, Duration::minutes(30));
        let b = RefreshToken::new(user_id, Duration::minutes(30));

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_refresh_token_revocation() {
        let mut token = RefreshToken::new(Uuid::new_v4(), Duration::minutes(30));
        assert!(token.is_valid());

        token.revoke();

        assert!(token.is_revoked);
        assert!(!token.is_valid());
    }

    #[test]
    fn test_refresh_token_expiration() {
        let mut token = RefreshToken::new(Uuid::new_v4(), Duration::minutes(30));
        token.expires_at = Utc::now() - Duration::minutes(1);

        assert!(token.is_expired());
        assert!(!token.is_valid());
    }

    #[test]
    fn test_token_pair_serialization() {
        let pair = TokenPair::new("access.jwt.token".to_string(), Uuid::new_v4());

        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: TokenPair = serde_json::from_str(&json).unwrap();

        assert_eq!(pair, deserialized);
    }
}
