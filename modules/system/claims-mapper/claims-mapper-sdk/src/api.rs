//! Public API trait for the claims mapper.
//!
//! This trait defines the interface token issuance uses to run the configured
//! mapper instances over a token. The module implements it by delegating to
//! the registered contributors.

use crate::descriptor::MapperDescriptor;
use crate::error::ClaimsMapperError;
use crate::models::{IssuanceReport, Realm, TokenClaims, TokenKind, UserProfile};

/// Public API trait for the claims mapper.
///
/// ```ignore
/// let mut claims = TokenClaims::for_subject(user_id);
/// let report = mapper.issue(TokenKind::Access, &user, &realm, &mut claims);
/// tracing::debug!(roles = ?report.roles_added, "claims mapped");
/// ```
pub trait ClaimsMapperClient: Send + Sync {
    /// Run every mapper instance enabled for `kind` over `claims`.
    ///
    /// Instances run in priority order. Mapping itself has no failure mode;
    /// the report says which mappers ran and which realm roles they added.
    fn issue(
        &self,
        kind: TokenKind,
        user: &UserProfile,
        realm: &Realm,
        claims: &mut TokenClaims,
    ) -> IssuanceReport;

    /// Descriptors of all registered mappers, in registration order.
    fn descriptors(&self) -> Vec<MapperDescriptor>;

    /// Descriptor of a single registered mapper.
    ///
    /// # Errors
    ///
    /// - `UnknownProvider` if no mapper is registered under `provider_id`
    fn descriptor(&self, provider_id: &str) -> Result<MapperDescriptor, ClaimsMapperError>;
}
