//! Client implementation for the email-domain role mapper.
//!
//! Implements `AccessTokenClaimContributor` using the domain service.

use claims_mapper_sdk::{
    AccessTokenClaimContributor, MapperDescriptor, Realm, TokenClaims, UserProfile,
};

use super::service::EmailDomainRoleService;

impl AccessTokenClaimContributor for EmailDomainRoleService {
    fn descriptor(&self) -> &MapperDescriptor {
        EmailDomainRoleService::descriptor(self)
    }

    fn contribute(&self, user: &UserProfile, realm: &Realm, claims: &mut TokenClaims) {
        self.grant(user, realm, claims);
    }
}
