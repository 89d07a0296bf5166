//! End-to-end walkthrough of the token lifecycle through the public API

use std::sync::Arc;

use uuid::Uuid;

use kf_core::domain::entities::user::User;
use kf_core::errors::{DomainError, TokenError};
use kf_core::repositories::{MockTokenRepository, MockUserRepository};
use kf_core::services::token::{TokenService, TokenServiceConfig};

const SECRET: &str = "integration-test-secret-0123456789abcdef";

async fn service_with_user() -> (
    TokenService<MockTokenRepository, MockUserRepository>,
    MockTokenRepository,
    User,
) {
    let tokens = MockTokenRepository::new();
    let users = MockUserRepository::new();
    let user = User::new("alice", Some("alice@example.com".to_string()));
    users.insert(user.clone()).await;

    let config = TokenServiceConfig::new(SECRET, "keyforge", "keyforge-api");
    let service = TokenService::new(tokens.clone(), users, config).unwrap();
    (service, tokens, user)
}

#[tokio::test]
async fn test_login_refresh_logout_walkthrough() {
    let (service, tokens, user) = service_with_user().await;

    // Login: pair with a decodable subject and an active refresh token
    let pair1 = service.issue_initial(&user).await.unwrap();
    let claims = service.validate(&pair1.access_token).unwrap();
    assert_eq!(claims.sub, user.id.to_string());
    assert!(service.validate_refresh(pair1.refresh_token).await.unwrap());

    // Refresh: new pair, presented id invalidated, new id resolves
    let pair2 = service.refresh(pair1.refresh_token).await.unwrap();
    assert!(!service.validate_refresh(pair1.refresh_token).await.unwrap());
    assert!(service.validate_refresh(pair2.refresh_token).await.unwrap());
    assert_eq!(service.user_id(&pair2.access_token), Some(user.id));

    // Logout: the persisted refresh token stays valid
    service.logout(user.id).await;
    assert!(service.validate_refresh(pair2.refresh_token).await.unwrap());

    // Throughout, exactly one refresh token for the user exists
    assert_eq!(tokens.count_user_tokens(user.id).await, 1);
}

#[tokio::test]
async fn test_refresh_with_random_id_never_issues() {
    let (service, _, _) = service_with_user().await;

    for _ in 0..5 {
        let result = service.refresh(Uuid::new_v4()).await;
        assert!(matches!(
            result.err(),
            Some(DomainError::Token(TokenError::InvalidRefreshToken))
        ));
    }
}

#[tokio::test]
async fn test_garbage_access_token_yields_none() {
    let (service, _, _) = service_with_user().await;

    assert!(service.validate("not.a.jwt").is_none());
    assert!(service.user_id("not.a.jwt").is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_mixed_issuance_and_refresh() {
    let (service, tokens, user) = service_with_user().await;
    let service = Arc::new(service);

    let seed = service.issue_initial(&user).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..12 {
        let service = Arc::clone(&service);
        let user = user.clone();
        let refresh_id = seed.refresh_token;
        handles.push(tokio::spawn(async move {
            if i % 2 == 0 {
                service.issue_initial(&user).await.map(|_| ())
            } else {
                // Losing a rotation race fails visibly; it must never
                // leave a second active token behind
                service.refresh(refresh_id).await.map(|_| ())
            }
        }));
    }

    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => {}
            Err(DomainError::Token(TokenError::InvalidRefreshToken)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(tokens.count_user_tokens(user.id).await, 1);
}
