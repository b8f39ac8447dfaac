//! Local (in-process) client for the claims mapper.

use std::sync::Arc;

use claims_mapper_sdk::{
    ClaimsMapperClient, ClaimsMapperError, IssuanceReport, MapperDescriptor, Realm, TokenClaims,
    TokenKind, UserProfile,
};

use super::{DomainError, Service};

/// Local client wrapping the service.
///
/// Handed to token issuance as `Arc<dyn ClaimsMapperClient>`.
pub struct ClaimsMapperLocalClient {
    svc: Arc<Service>,
}

impl ClaimsMapperLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> ClaimsMapperError {
    tracing::error!(operation = op, error = ?e, "claims_mapper call failed");
    e.into()
}

impl ClaimsMapperClient for ClaimsMapperLocalClient {
    fn issue(
        &self,
        kind: TokenKind,
        user: &UserProfile,
        realm: &Realm,
        claims: &mut TokenClaims,
    ) -> IssuanceReport {
        self.svc.issue(kind, user, realm, claims)
    }

    fn descriptors(&self) -> Vec<MapperDescriptor> {
        self.svc.descriptors()
    }

    fn descriptor(&self, provider_id: &str) -> Result<MapperDescriptor, ClaimsMapperError> {
        self.svc
            .descriptor(provider_id)
            .map_err(|e| log_and_convert("descriptor", e))
    }
}
