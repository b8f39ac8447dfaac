#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use claims_mapper::{ClaimsMapperConfig, ClaimsMapperLocalClient, MapperInstanceConfig, Service};
use claims_mapper_sdk::{
    AccessTokenClaimContributor, ClaimsMapperClient, IncludeInTokens, Realm, TokenClaims,
    TokenKind, UserProfile,
};
use email_domain_role_plugin::{EmailDomainRoleService, PROVIDER_ID};

fn client_with(instance: MapperInstanceConfig) -> Arc<dyn ClaimsMapperClient> {
    let cfg = ClaimsMapperConfig {
        mappers: vec![instance],
    };
    let contributors: Vec<Arc<dyn AccessTokenClaimContributor>> =
        vec![Arc::new(EmailDomainRoleService::new())];
    let service = Service::from_config(&cfg, contributors).unwrap();
    Arc::new(ClaimsMapperLocalClient::new(Arc::new(service)))
}

fn default_client() -> Arc<dyn ClaimsMapperClient> {
    client_with(MapperInstanceConfig::new(PROVIDER_ID))
}

fn fortium() -> Realm {
    Realm::new("fortium").with_roles(["PARTNER", "CLIENT"])
}

#[test]
fn access_token_for_partner_email_gets_partner_role() {
    let client = default_client();
    let mut claims = TokenClaims::for_subject("alice");

    let report = client.issue(
        TokenKind::Access,
        &UserProfile::with_email("alice@fortiumpartners.com"),
        &fortium(),
        &mut claims,
    );

    assert_eq!(report.applied_mappers, vec![PROVIDER_ID]);
    assert_eq!(report.roles_added, vec!["PARTNER"]);
    assert_eq!(
        serde_json::to_value(&claims).unwrap(),
        serde_json::json!({ "sub": "alice", "realm_access": { "roles": ["PARTNER"] } })
    );
}

#[test]
fn id_token_is_never_touched() {
    let client = default_client();
    let mut claims = TokenClaims::for_subject("alice");

    let report = client.issue(
        TokenKind::Id,
        &UserProfile::with_email("alice@fortiumpartners.com"),
        &fortium(),
        &mut claims,
    );

    assert!(report.applied_mappers.is_empty());
    assert!(claims.realm_access().is_none());
}

#[test]
fn lightweight_access_token_follows_lightweight_switch() {
    let user = UserProfile::with_email("alice@fortiumpartners.com");

    let mut claims = TokenClaims::default();
    default_client().issue(TokenKind::LightweightAccess, &user, &fortium(), &mut claims);
    assert!(!claims.has_realm_role("PARTNER"));

    let enabled = client_with(MapperInstanceConfig {
        include_in_tokens: IncludeInTokens {
            lightweight: true,
            ..IncludeInTokens::default()
        },
        ..MapperInstanceConfig::new(PROVIDER_ID)
    });
    let mut claims = TokenClaims::default();
    enabled.issue(TokenKind::LightweightAccess, &user, &fortium(), &mut claims);
    assert!(claims.has_realm_role("PARTNER"));
}

#[test]
fn access_switch_off_disables_mapper() {
    let client = client_with(MapperInstanceConfig {
        include_in_tokens: IncludeInTokens {
            access: false,
            ..IncludeInTokens::default()
        },
        ..MapperInstanceConfig::new(PROVIDER_ID)
    });
    let mut claims = TokenClaims::default();

    let report = client.issue(
        TokenKind::Access,
        &UserProfile::with_email("alice@fortiumpartners.com"),
        &fortium(),
        &mut claims,
    );

    assert!(report.applied_mappers.is_empty());
    assert!(claims.realm_access().is_none());
}

#[test]
fn reissuing_over_same_claims_is_idempotent() {
    let client = default_client();
    let user = UserProfile::with_email("bob@fortiumpartners.com");
    let mut claims = TokenClaims::for_subject("bob");
    claims.add_realm_role("CLIENT");

    client.issue(TokenKind::Access, &user, &fortium(), &mut claims);
    let first = claims.clone();
    let report = client.issue(TokenKind::Access, &user, &fortium(), &mut claims);

    assert_eq!(claims, first);
    assert!(report.roles_added.is_empty());
    assert_eq!(claims.realm_roles().collect::<Vec<_>>(), vec!["CLIENT", "PARTNER"]);
}

#[test]
fn concurrent_issuance_shares_one_client() {
    let client = default_client();
    let realm = fortium();
    let emails = [
        "a@fortiumpartners.com",
        "b@other.com",
        "c@fortiumpartners.com",
        "d@FortiumPartners.com",
    ];

    let results: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = emails
            .iter()
            .map(|email| {
                let client = Arc::clone(&client);
                let realm = &realm;
                scope.spawn(move || {
                    let mut claims = TokenClaims::default();
                    client.issue(
                        TokenKind::Access,
                        &UserProfile::with_email(*email),
                        realm,
                        &mut claims,
                    );
                    claims.has_realm_role("PARTNER")
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec![true, false, true, false]);
}

#[test]
fn unknown_provider_in_config_fails_startup() {
    let cfg = ClaimsMapperConfig {
        mappers: vec![MapperInstanceConfig::new("oidc-hardcoded-role-mapper")],
    };
    let contributors: Vec<Arc<dyn AccessTokenClaimContributor>> =
        vec![Arc::new(EmailDomainRoleService::new())];

    let err = Service::from_config(&cfg, contributors).err().unwrap();
    assert_eq!(
        err.to_string(),
        "no mapper registered under provider id 'oidc-hardcoded-role-mapper'"
    );
}

#[test]
fn descriptor_lookup_through_client() {
    let client = default_client();

    let descriptor = client.descriptor(PROVIDER_ID).unwrap();
    assert_eq!(descriptor.display_type, "Email Domain Role Mapper");
    assert_eq!(client.descriptors(), vec![descriptor]);
}
