// Copyright (c) 2025 - Cowboy AI, Inc.
//! OCCI Resource Registry
//!
//! The public resolution API over the provider's live inventory. The
//! registry persists nothing: every resolution re-constructs its resource
//! graph fragment from provider reads, and the only state shared across
//! requests is the immutable static network catalog plus the mixin backend
//! table.
//!
//! # Resolution Flow
//!
//! ```text
//! key ──▶ split_key ──▶ dispatch by location ──▶ provider fetch
//!                                                    │
//!                             links (storage, network) per attachment
//!                                                    │
//!                                          Entity back to the caller
//! ```
//!
//! Provider not-found is absorbed into the registry's own [`RegistryError::NotFound`]
//! at this layer; all other provider errors propagate unchanged.

pub mod backend;
pub mod key;
pub mod networks;

mod construct;
mod links;

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::AdapterConfig;
use crate::domain::schema::{
    COMPUTE_LOCATION, NETWORK_INTERFACE_LOCATION, NETWORK_LOCATION, SEC_GROUP_CAPABILITY,
    STORAGE_LINK_LOCATION, STORAGE_LOCATION,
};
use crate::domain::{Entity, Mixin, Resource};
use crate::errors::{RegistryError, RegistryResult};
use crate::provider::{
    ComputeProvider, NetworkProvider, RequestContext, SecurityGroupProvider, StorageProvider,
    TemplateCatalog,
};

use backend::{MixinBackend, SecurityGroupBackend};
use key::{split_key, split_link_identifier};
use networks::StaticNetworks;

/// The provider subsystem collaborators the registry resolves against
#[derive(Clone)]
pub struct ProviderSet {
    /// Compute subsystem (instances)
    pub compute: Arc<dyn ComputeProvider>,
    /// Storage subsystem (volumes, attachments)
    pub storage: Arc<dyn StorageProvider>,
    /// Network subsystem (interface attachments)
    pub network: Arc<dyn NetworkProvider>,
    /// Flavor/image template lookup
    pub templates: Arc<dyn TemplateCatalog>,
    /// Security-group lifecycle collaborator
    pub security_groups: Arc<dyn SecurityGroupProvider>,
}

/// State-free OCCI registry over a cloud provider's inventory
pub struct ResourceRegistry {
    providers: ProviderSet,
    config: AdapterConfig,
    hostname: String,
    networks: StaticNetworks,
    backends: RwLock<HashMap<String, Arc<dyn MixinBackend>>>,
}

impl ResourceRegistry {
    /// Create a registry over the given provider collaborators
    pub fn new(providers: ProviderSet, config: AdapterConfig) -> Self {
        Self {
            providers,
            config,
            hostname: String::new(),
            networks: StaticNetworks::new(),
            backends: RwLock::new(HashMap::new()),
        }
    }

    /// Record the hostname advertised in rendered locations. A configured
    /// `custom_location_hostname` overrides whatever the transport passes.
    pub fn set_hostname(&mut self, hostname: impl Into<String>) {
        self.hostname = self
            .config
            .custom_location_hostname
            .clone()
            .unwrap_or_else(|| hostname.into());
    }

    /// The advertised hostname
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// The shared static network catalog
    pub fn networks(&self) -> &StaticNetworks {
        &self.networks
    }

    /// No-op: the registry never persists constructed entities, the
    /// provider subsystems remain the source of truth.
    pub fn add_resource(&self, _key: &str, _resource: &Resource, _ctx: &RequestContext) {}

    /// No-op counterpart of [`Self::add_resource`].
    pub fn delete_resource(&self, _key: &str, _ctx: &RequestContext) {}

    /// Resolve one addressable key to a freshly constructed entity.
    pub async fn resolve_one(&self, key: &str, ctx: &RequestContext) -> RegistryResult<Entity> {
        let (location, identifier) = split_key(key)?;
        debug!("Resolving key {} (location {}, id {})", key, location, identifier);

        self.dispatch(key, &location, identifier, ctx)
            .await
            .map_err(|e| e.absorb_not_found(key))
    }

    async fn dispatch(
        &self,
        key: &str,
        location: &str,
        identifier: &str,
        ctx: &RequestContext,
    ) -> RegistryResult<Entity> {
        match location {
            COMPUTE_LOCATION => {
                let record = self.providers.compute.instance(identifier, ctx).await?;
                let compute = self.construct_compute(&record, ctx).await?;
                Ok(Entity::Resource(Arc::new(compute)))
            }
            STORAGE_LOCATION => {
                let record = self.providers.storage.volume(identifier, ctx).await?;
                Ok(Entity::Resource(Arc::new(self.construct_storage(&record, ctx))))
            }
            // Link keys embed the owning compute id before the first
            // underscore; the parent is reconstructed and its links
            // scanned for an identifier match.
            STORAGE_LINK_LOCATION | NETWORK_INTERFACE_LOCATION => {
                let (compute_id, _remainder) = split_link_identifier(key, identifier)?;
                let record = self.providers.compute.instance(&compute_id, ctx).await?;
                let compute = self.construct_compute(&record, ctx).await?;
                compute
                    .links
                    .iter()
                    .find(|link| link.identifier == key)
                    .cloned()
                    .map(Entity::Link)
                    .ok_or_else(|| RegistryError::NotFound(key.to_string()))
            }
            NETWORK_LOCATION => self
                .networks
                .by_name(identifier)
                .map(|network| Entity::Resource(Arc::clone(network)))
                .ok_or_else(|| RegistryError::NotFound(key.to_string())),
            _ => Err(RegistryError::MalformedKey(key.to_string())),
        }
    }

    /// Resolve every entity visible to the request's scope: all compute
    /// resources with their links, all volumes, and the two static
    /// networks. Links appear both embedded in their parent and as
    /// top-level entries, so every addressable identifier is covered.
    pub async fn resolve_all(&self, ctx: &RequestContext) -> RegistryResult<Vec<Entity>> {
        let mut result = Vec::new();

        for record in self.providers.compute.instances(ctx).await? {
            let compute = Arc::new(self.construct_compute(&record, ctx).await?);
            let links = compute.links.clone();
            result.push(Entity::Resource(compute));
            result.extend(links.into_iter().map(Entity::Link));
        }

        for record in self.providers.storage.volumes(ctx).await? {
            let storage = self.construct_storage(&record, ctx);
            result.push(Entity::Resource(Arc::new(storage)));
        }

        for network in self.networks.all() {
            result.push(Entity::Resource(Arc::clone(network)));
        }

        debug!("Resolved {} entities", result.len());
        Ok(result)
    }

    /// The identifiers of everything [`Self::resolve_all`] returns.
    pub async fn list_keys(&self, ctx: &RequestContext) -> RegistryResult<Vec<String>> {
        let entities = self.resolve_all(ctx).await?;
        Ok(entities
            .iter()
            .map(|entity| entity.identifier().to_string())
            .collect())
    }

    /// Delete a user-defined mixin. When the mixin carries the
    /// security-group capability its backend's destroy hook runs first;
    /// the backend registration is removed either way.
    pub async fn delete_mixin(&self, mixin: &Mixin, ctx: &RequestContext) -> RegistryResult<()> {
        if mixin.has_capability(SEC_GROUP_CAPABILITY) {
            let registered = {
                let backends = self.backends.read().await;
                backends.get(&mixin.type_identifier()).cloned()
            };
            if let Some(backend) = registered {
                backend.destroy(mixin, ctx).await?;
            }
        }

        self.backends.write().await.remove(&mixin.type_identifier());
        Ok(())
    }

    /// Register a backend for a user-defined mixin. A mixin carrying the
    /// security-group capability gets a freshly constructed and
    /// initialized [`SecurityGroupBackend`] bound to it, in place of the
    /// supplied backend.
    pub async fn set_backend(
        &self,
        category: &Mixin,
        backend: Arc<dyn MixinBackend>,
        ctx: &RequestContext,
    ) -> RegistryResult<()> {
        let backend = if category.has_capability(SEC_GROUP_CAPABILITY) {
            let sec_backend: Arc<dyn MixinBackend> =
                Arc::new(SecurityGroupBackend::new(self.providers.security_groups.clone()));
            sec_backend.init(category, ctx).await?;
            sec_backend
        } else {
            backend
        };

        self.backends
            .write()
            .await
            .insert(category.type_identifier(), backend);
        Ok(())
    }

    /// Look up the registered backend for a mixin
    pub async fn backend(&self, mixin: &Mixin) -> Option<Arc<dyn MixinBackend>> {
        self.backends.read().await.get(&mixin.type_identifier()).cloned()
    }
}
