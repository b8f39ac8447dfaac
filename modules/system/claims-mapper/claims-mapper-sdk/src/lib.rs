//! Claims Mapper SDK
//!
//! This crate provides the public API for the `claims_mapper` module:
//!
//! - [`ClaimsMapperClient`] - Public API trait for consumers (token issuance)
//! - [`AccessTokenClaimContributor`] - Plugin API trait for mapper implementations
//! - [`TokenClaims`], [`UserProfile`], [`Realm`] - Token issuance models
//! - [`MapperDescriptor`] - Read-only registration metadata of a mapper
//! - [`ClaimsMapperError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use claims_mapper_sdk::{ClaimsMapperClient, TokenClaims, TokenKind};
//!
//! let mut claims = TokenClaims::default();
//! let report = mapper.issue(TokenKind::Access, &user, &realm, &mut claims);
//! ```

pub mod api;
pub mod descriptor;
pub mod error;
pub mod models;
pub mod plugin_api;

// Re-export main types at crate root
pub use api::ClaimsMapperClient;
pub use descriptor::{
    ConfigProperty, ConfigPropertyType, MapperDescriptor, TOKEN_MAPPER_CATEGORY,
    include_in_tokens_properties,
};
pub use error::ClaimsMapperError;
pub use models::{
    IncludeInTokens, IssuanceReport, Realm, RealmAccess, TokenClaims, TokenKind, UserProfile,
};
pub use plugin_api::AccessTokenClaimContributor;
