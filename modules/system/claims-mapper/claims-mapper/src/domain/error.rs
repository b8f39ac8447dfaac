//! Domain errors for the claims mapper.

use claims_mapper_sdk::ClaimsMapperError;

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("no mapper registered under provider id '{provider_id}'")]
    UnknownProvider { provider_id: String },

    #[error("mapper provider '{provider_id}' is already registered")]
    AlreadyRegistered { provider_id: String },
}

impl From<ClaimsMapperError> for DomainError {
    fn from(e: ClaimsMapperError) -> Self {
        match e {
            ClaimsMapperError::UnknownProvider(provider_id) => Self::UnknownProvider { provider_id },
            ClaimsMapperError::AlreadyRegistered(provider_id) => {
                Self::AlreadyRegistered { provider_id }
            }
        }
    }
}

impl From<DomainError> for ClaimsMapperError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::UnknownProvider { provider_id } => Self::UnknownProvider(provider_id),
            DomainError::AlreadyRegistered { provider_id } => Self::AlreadyRegistered(provider_id),
        }
    }
}
