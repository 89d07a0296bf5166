//! Token service module for the access/refresh token lifecycle
//!
//! This module handles all token-related operations including:
//! - JWT access token issuance and validation
//! - Refresh token rotation with a single-active-token-per-user invariant
//! - The per-user cache of the most recently issued token pair

mod cache;
mod config;
mod issuer;
mod service;
mod store;
mod validator;

#[cfg(test)]
mod tests;

pub use cache::TokenCache;
pub use config::{TokenServiceConfig, MIN_HMAC_SECRET_BYTES};
pub use issuer::TokenIssuer;
pub use service::TokenService;
pub use store::RefreshTokenStore;
pub use validator::TokenValidator;
