//! Registration metadata for claim mappers.
//!
//! A [`MapperDescriptor`] is the read-only description an admin surface needs
//! to list a mapper: its provider id, display strings, the token kinds it can
//! contribute to and the configuration switches it exposes. Plugins build one
//! at load time and hand out shared references to it.

use serde::Serialize;

use crate::models::TokenKind;

/// Display category shared by all token claim mappers.
pub const TOKEN_MAPPER_CATEGORY: &str = "Token mapper";

/// Value type of a configuration property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigPropertyType {
    Boolean,
}

/// A single configurable field of a mapper instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigProperty {
    pub name: &'static str,
    pub label: &'static str,
    pub help_text: &'static str,
    #[serde(rename = "type")]
    pub property_type: ConfigPropertyType,
    pub default_value: &'static str,
}

const fn include_switch(
    name: &'static str,
    label: &'static str,
    help_text: &'static str,
    default_value: &'static str,
) -> ConfigProperty {
    ConfigProperty {
        name,
        label,
        help_text,
        property_type: ConfigPropertyType::Boolean,
        default_value,
    }
}

pub const INCLUDE_IN_ID_TOKEN: ConfigProperty = include_switch(
    "id.token.claim",
    "Add to ID token",
    "Indicates if the claim should be added to the ID token.",
    "true",
);

pub const INCLUDE_IN_ACCESS_TOKEN: ConfigProperty = include_switch(
    "access.token.claim",
    "Add to access token",
    "Indicates if the claim should be added to the access token.",
    "true",
);

pub const INCLUDE_IN_LIGHTWEIGHT_ACCESS_TOKEN: ConfigProperty = include_switch(
    "lightweight.claim",
    "Add to lightweight access token",
    "Indicates if the claim should be added to the lightweight access token.",
    "false",
);

pub const INCLUDE_IN_USERINFO: ConfigProperty = include_switch(
    "userinfo.token.claim",
    "Add to userinfo",
    "Indicates if the claim should be added to the userinfo response.",
    "true",
);

pub const INCLUDE_IN_INTROSPECTION: ConfigProperty = include_switch(
    "introspection.token.claim",
    "Add to token introspection",
    "Indicates if the claim should be added to the token introspection response.",
    "true",
);

/// The "include in tokens" switches applicable to a mapper handling `kinds`.
///
/// Each switch is offered only for a kind the mapper handles. Properties come
/// out in a fixed order regardless of the order of `kinds`.
#[must_use]
pub fn include_in_tokens_properties(kinds: &[TokenKind]) -> Vec<ConfigProperty> {
    let handles = |kind: TokenKind| kinds.contains(&kind);

    let mut props = Vec::new();
    if handles(TokenKind::Id) {
        props.push(INCLUDE_IN_ID_TOKEN);
    }
    if handles(TokenKind::Access) {
        props.push(INCLUDE_IN_ACCESS_TOKEN);
    }
    if handles(TokenKind::LightweightAccess) {
        props.push(INCLUDE_IN_LIGHTWEIGHT_ACCESS_TOKEN);
    }
    if handles(TokenKind::UserInfo) {
        props.push(INCLUDE_IN_USERINFO);
    }
    if handles(TokenKind::Introspection) {
        props.push(INCLUDE_IN_INTROSPECTION);
    }
    props
}

/// Read-only registration metadata of a mapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapperDescriptor {
    pub provider_id: &'static str,
    pub display_type: &'static str,
    pub display_category: &'static str,
    pub help_text: &'static str,
    /// Token kinds the mapper is able to contribute to.
    pub token_kinds: Vec<TokenKind>,
    pub config_properties: Vec<ConfigProperty>,
}

impl MapperDescriptor {
    /// Descriptor for a token mapper; config properties follow from `token_kinds`.
    #[must_use]
    pub fn token_mapper(
        provider_id: &'static str,
        display_type: &'static str,
        help_text: &'static str,
        token_kinds: &[TokenKind],
    ) -> Self {
        Self {
            provider_id,
            display_type,
            display_category: TOKEN_MAPPER_CATEGORY,
            help_text,
            token_kinds: token_kinds.to_vec(),
            config_properties: include_in_tokens_properties(token_kinds),
        }
    }

    #[must_use]
    pub fn supports(&self, kind: TokenKind) -> bool {
        self.token_kinds.contains(&kind)
    }
}
