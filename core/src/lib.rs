//! # Keyforge Core
//!
//! Token lifecycle core for the Keyforge toolkit. This crate contains the
//! domain entities, token services, repository interfaces, and error types
//! behind stateless access-token issuance and stateful refresh-token
//! rotation.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use repositories::*;
pub use errors::*;
