//! Service implementation for the email-domain role mapper.

use std::sync::LazyLock;

use claims_mapper_sdk::{MapperDescriptor, Realm, TokenClaims, TokenKind, UserProfile};

use super::rule;

/// Registry key of the mapper.
pub const PROVIDER_ID: &str = "oidc-email-domain-role-mapper";

const DISPLAY_TYPE: &str = "Email Domain Role Mapper";

const HELP_TEXT: &str =
    "Assigns the 'PARTNER' role to users with an email domain of 'fortiumpartners.com'.";

/// The mapper writes into access tokens only.
const TOKEN_KINDS: &[TokenKind] = &[TokenKind::Access, TokenKind::LightweightAccess];

static DESCRIPTOR: LazyLock<MapperDescriptor> = LazyLock::new(|| {
    MapperDescriptor::token_mapper(PROVIDER_ID, DISPLAY_TYPE, HELP_TEXT, TOKEN_KINDS)
});

/// Email-domain role mapper service.
///
/// Holds no per-issuance state; one instance serves every token.
#[derive(Debug, Clone)]
pub struct EmailDomainRoleService {
    descriptor: &'static MapperDescriptor,
}

impl Default for EmailDomainRoleService {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailDomainRoleService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptor: &DESCRIPTOR,
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> &'static MapperDescriptor {
        self.descriptor
    }

    /// Grant the target role in `claims` when `user` qualifies in `realm`.
    ///
    /// Reads only the user's email and the realm's role set; writes only the
    /// realm roles of `claims`.
    pub fn grant(&self, user: &UserProfile, realm: &Realm, claims: &mut TokenClaims) {
        let _span = tracing::trace_span!(
            "email_domain_role",
            provider_id = self.descriptor.provider_id,
            realm = realm.name(),
        )
        .entered();

        rule::apply(
            user.email(),
            |name| realm.role_exists(name),
            |name| {
                claims.add_realm_role(name);
            },
        );
    }
}
