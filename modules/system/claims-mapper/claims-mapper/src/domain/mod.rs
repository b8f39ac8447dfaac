//! Domain layer for the claims mapper.

pub mod error;
pub mod local_client;
pub mod service;

pub use error::DomainError;
pub use local_client::ClaimsMapperLocalClient;
pub use service::Service;
