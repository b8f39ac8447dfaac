//! Domain service for the claims mapper.

use std::collections::BTreeSet;
use std::sync::Arc;

use claims_mapper_sdk::{
    AccessTokenClaimContributor, IssuanceReport, MapperDescriptor, Realm, TokenClaims, TokenKind,
    UserProfile,
};
use tracing::{debug, info};

use super::error::DomainError;
use crate::config::{ClaimsMapperConfig, MapperInstanceConfig};

struct MapperInstance {
    config: MapperInstanceConfig,
    contributor: Arc<dyn AccessTokenClaimContributor>,
}

impl MapperInstance {
    fn applies_to(&self, kind: TokenKind) -> bool {
        self.contributor.descriptor().supports(kind)
            && self.config.include_in_tokens.includes(kind)
    }
}

/// Claims mapper service.
///
/// Contributors are registered once at startup; instances are kept sorted by
/// priority so issuance is a single pass. After setup the service is only read,
/// so one `Arc<Service>` serves concurrent issuances.
#[derive(Default)]
pub struct Service {
    contributors: Vec<Arc<dyn AccessTokenClaimContributor>>,
    instances: Vec<MapperInstance>,
}

impl Service {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a service from the given contributors and the configured instances.
    ///
    /// # Errors
    ///
    /// - `AlreadyRegistered` if two contributors share a provider id
    /// - `UnknownProvider` if an instance refers to an unregistered provider id
    pub fn from_config<I>(cfg: &ClaimsMapperConfig, contributors: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = Arc<dyn AccessTokenClaimContributor>>,
    {
        let mut service = Self::new();
        for contributor in contributors {
            service.register(contributor)?;
        }
        for instance in &cfg.mappers {
            service.add_instance(instance.clone())?;
        }
        Ok(service)
    }

    /// Register a contributor under its descriptor's provider id.
    ///
    /// # Errors
    ///
    /// - `AlreadyRegistered` if the provider id is taken
    pub fn register(
        &mut self,
        contributor: Arc<dyn AccessTokenClaimContributor>,
    ) -> Result<(), DomainError> {
        let provider_id = contributor.descriptor().provider_id;
        if self.find(provider_id).is_some() {
            return Err(DomainError::AlreadyRegistered {
                provider_id: provider_id.to_owned(),
            });
        }

        info!(provider_id, "Registered claim mapper");
        self.contributors.push(contributor);
        Ok(())
    }

    /// Add a mapper instance of a registered contributor.
    ///
    /// # Errors
    ///
    /// - `UnknownProvider` if no contributor is registered under the instance's provider id
    pub fn add_instance(&mut self, config: MapperInstanceConfig) -> Result<(), DomainError> {
        let contributor = self
            .find(&config.provider_id)
            .cloned()
            .ok_or_else(|| DomainError::UnknownProvider {
                provider_id: config.provider_id.clone(),
            })?;

        debug!(
            provider_id = %config.provider_id,
            priority = config.priority,
            "Added mapper instance"
        );

        // After every instance of equal priority, so ties keep insertion order.
        let pos = self
            .instances
            .partition_point(|i| i.config.priority <= config.priority);
        self.instances.insert(
            pos,
            MapperInstance {
                config,
                contributor,
            },
        );
        Ok(())
    }

    fn find(&self, provider_id: &str) -> Option<&Arc<dyn AccessTokenClaimContributor>> {
        self.contributors
            .iter()
            .find(|c| c.descriptor().provider_id == provider_id)
    }

    /// Run every instance enabled for `kind` over `claims`, in priority order.
    #[tracing::instrument(skip_all, fields(kind = %kind, realm = realm.name()))]
    pub fn issue(
        &self,
        kind: TokenKind,
        user: &UserProfile,
        realm: &Realm,
        claims: &mut TokenClaims,
    ) -> IssuanceReport {
        let roles_before: BTreeSet<String> = claims.realm_roles().map(str::to_owned).collect();

        let mut applied_mappers = Vec::new();
        for instance in self.instances.iter().filter(|i| i.applies_to(kind)) {
            instance.contributor.contribute(user, realm, claims);
            applied_mappers.push(instance.config.provider_id.clone());
        }

        let roles_added: Vec<String> = claims
            .realm_roles()
            .filter(|role| !roles_before.contains(*role))
            .map(str::to_owned)
            .collect();

        debug!(
            mappers = applied_mappers.len(),
            roles_added = roles_added.len(),
            "Mapped token claims"
        );

        IssuanceReport {
            kind,
            applied_mappers,
            roles_added,
        }
    }

    /// Descriptors of all registered contributors, in registration order.
    #[must_use]
    pub fn descriptors(&self) -> Vec<MapperDescriptor> {
        self.contributors
            .iter()
            .map(|c| c.descriptor().clone())
            .collect()
    }

    /// Descriptor of the contributor registered under `provider_id`.
    ///
    /// # Errors
    ///
    /// - `UnknownProvider` if nothing is registered under `provider_id`
    pub fn descriptor(&self, provider_id: &str) -> Result<MapperDescriptor, DomainError> {
        self.find(provider_id)
            .map(|c| c.descriptor().clone())
            .ok_or_else(|| DomainError::UnknownProvider {
                provider_id: provider_id.to_owned(),
            })
    }
}
