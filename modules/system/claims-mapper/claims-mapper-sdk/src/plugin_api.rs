//! Plugin API trait for claim mapper implementations.
//!
//! Plugins implement this trait to contribute claims while a token is being
//! built. The `claims_mapper` pipeline owns the registry of contributors and
//! decides, per token kind and per mapper instance, whether a contributor runs.

use crate::descriptor::MapperDescriptor;
use crate::models::{Realm, TokenClaims, UserProfile};

/// Plugin API trait for claim contributors.
///
/// Implementations must be stateless with respect to a single issuance: the
/// same user, realm and claims must always yield the same mutation, so that
/// contributors can run concurrently for different tokens without locking.
pub trait AccessTokenClaimContributor: Send + Sync {
    /// Registration metadata. Its `provider_id` is the registry key.
    fn descriptor(&self) -> &MapperDescriptor;

    /// Contribute claims for `user` in `realm` to the token under construction.
    ///
    /// Contributors never fail: conditions under which nothing applies are
    /// expressed by leaving `claims` untouched.
    fn contribute(&self, user: &UserProfile, realm: &Realm, claims: &mut TokenClaims);
}
