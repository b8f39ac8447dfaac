//! Error types for the claims mapper module.

use thiserror::Error;

/// Errors that can occur when using the claims mapper API.
#[derive(Debug, Error)]
pub enum ClaimsMapperError {
    /// No mapper is registered under the given provider id.
    #[error("unknown mapper provider: {0}")]
    UnknownProvider(String),

    /// A mapper with the same provider id is already registered.
    #[error("mapper provider already registered: {0}")]
    AlreadyRegistered(String),
}
