//! Configuration for the claims mapper.

use claims_mapper_sdk::IncludeInTokens;
use serde::{Deserialize, Serialize};

/// Configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClaimsMapperConfig {
    /// Mapper instances to run. Each refers to a registered provider id.
    pub mappers: Vec<MapperInstanceConfig>,
}

/// One configured use of a registered mapper.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MapperInstanceConfig {
    /// Provider id of the registered contributor.
    pub provider_id: String,

    /// Execution priority (lower runs first). Ties keep configuration order.
    #[serde(default = "default_priority")]
    pub priority: i16,

    /// Token kinds this instance writes into.
    #[serde(default)]
    pub include_in_tokens: IncludeInTokens,
}

fn default_priority() -> i16 {
    100
}

impl MapperInstanceConfig {
    /// Instance of `provider_id` with default priority and include switches.
    #[must_use]
    pub fn new(provider_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            priority: default_priority(),
            include_in_tokens: IncludeInTokens::default(),
        }
    }
}
