//! Domain models for token issuance.
//!
//! [`UserProfile`] and [`Realm`] are owned by the identity store and only read
//! by mappers. [`TokenClaims`] is the claim set under construction; mappers
//! mutate it in place.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Authenticated user as seen by claim mappers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Email address. Absent when the identity store has none for the user.
    #[serde(default)]
    email: Option<String>,
}

impl UserProfile {
    #[must_use]
    pub fn new(email: Option<String>) -> Self {
        Self { email }
    }

    /// User with the given email address.
    #[must_use]
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Security realm owning the set of role names that may be granted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realm {
    name: String,
    #[serde(default)]
    roles: BTreeSet<String>,
}

impl Realm {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: BTreeSet::new(),
        }
    }

    /// Add the given role names to the realm.
    #[must_use]
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles.extend(roles.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a role with exactly this name is defined in the realm.
    #[must_use]
    pub fn role_exists(&self, name: &str) -> bool {
        self.roles.contains(name)
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }
}

/// The `realm_access` claim: realm-level roles granted to the subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmAccess {
    #[serde(default)]
    roles: BTreeSet<String>,
}

impl RealmAccess {
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

/// Claims held in typed fields of [`TokenClaims`].
const RESERVED_CLAIMS: &[&str] = &["sub", "realm_access"];

/// Claim set of a token under construction.
///
/// `realm_access` is created on the first realm role grant, so a token that
/// never receives a realm role carries no `realm_access` claim at all.
/// Claims the mapper pipeline does not model are kept verbatim in `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    realm_access: Option<RealmAccess>,
    #[serde(flatten)]
    other: BTreeMap<String, Value>,
}

impl TokenClaims {
    #[must_use]
    pub fn for_subject(subject: impl Into<String>) -> Self {
        Self {
            sub: Some(subject.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    #[must_use]
    pub fn realm_access(&self) -> Option<&RealmAccess> {
        self.realm_access.as_ref()
    }

    /// Realm roles currently granted, in lexical order.
    pub fn realm_roles(&self) -> impl Iterator<Item = &str> {
        self.realm_access.iter().flat_map(RealmAccess::roles)
    }

    #[must_use]
    pub fn has_realm_role(&self, role: &str) -> bool {
        self.realm_access
            .as_ref()
            .is_some_and(|access| access.contains(role))
    }

    /// Grant a realm role. Returns `false` if the role was already present.
    pub fn add_realm_role(&mut self, role: &str) -> bool {
        self.realm_access
            .get_or_insert_with(RealmAccess::default)
            .roles
            .insert(role.to_owned())
    }

    /// Set an arbitrary claim that the pipeline does not model.
    ///
    /// Returns `false` and leaves the claims untouched when `name` is one of
    /// the modelled claims (`sub`, `realm_access`).
    pub fn set_claim(&mut self, name: impl Into<String>, value: Value) -> bool {
        let name = name.into();
        if RESERVED_CLAIMS.contains(&name.as_str()) {
            return false;
        }
        self.other.insert(name, value);
        true
    }

    #[must_use]
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.other.get(name)
    }
}

/// Kind of token being issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    /// Access token stripped down to the claims explicitly marked lightweight.
    LightweightAccess,
    Id,
    #[serde(rename = "userinfo")]
    UserInfo,
    Introspection,
}

impl TokenKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::LightweightAccess => "lightweight_access",
            Self::Id => "id",
            Self::UserInfo => "userinfo",
            Self::Introspection => "introspection",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-instance switches selecting which tokens a mapper writes into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct IncludeInTokens {
    pub access: bool,
    pub lightweight: bool,
    pub id: bool,
    pub userinfo: bool,
    pub introspection: bool,
}

impl Default for IncludeInTokens {
    fn default() -> Self {
        Self {
            access: true,
            lightweight: false,
            id: true,
            userinfo: true,
            introspection: true,
        }
    }
}

impl IncludeInTokens {
    /// Whether the instance is switched on for `kind`.
    #[must_use]
    pub fn includes(&self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::Access => self.access,
            TokenKind::LightweightAccess => self.lightweight,
            TokenKind::Id => self.id,
            TokenKind::UserInfo => self.userinfo,
            TokenKind::Introspection => self.introspection,
        }
    }
}

/// Outcome of one pass of the mapper pipeline over a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuanceReport {
    pub kind: TokenKind,
    /// Provider ids of the mapper instances that ran, in execution order.
    pub applied_mappers: Vec<String>,
    /// Realm roles that were absent before the pass and present after it.
    pub roles_added: Vec<String>,
}
