//! Application configuration.
//!
//! Layers, later wins: built-in defaults, the YAML file given with `--config`,
//! then `CLAIMS_MAPPER__*` environment variables (`__` separates nesting,
//! e.g. `CLAIMS_MAPPER__LOGGING__LEVEL=debug`).

use std::path::Path;

use anyhow::{Context, bail};
use claims_mapper::{ClaimsMapperConfig, MapperInstanceConfig};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables overriding configuration.
pub const ENV_PREFIX: &str = "CLAIMS_MAPPER__";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub claims_mapper: ClaimsMapperConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            claims_mapper: ClaimsMapperConfig {
                mappers: vec![MapperInstanceConfig::new(
                    email_domain_role_plugin::PROVIDER_ID,
                )],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
    /// Emit logs as JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

/// Load configuration from defaults, an optional YAML file and the environment.
///
/// # Errors
///
/// Returns an error if `path` does not exist, or if the merged configuration
/// does not deserialize (unknown keys, wrong types).
pub fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if let Some(path) = path {
        if !path.is_file() {
            bail!("config file not found: {}", path.display());
        }
        figment = figment.merge(Yaml::file(path));
    }

    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .context("invalid configuration")
}
