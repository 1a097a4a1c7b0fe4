// Copyright (c) 2025 - Cowboy AI, Inc.
//! Mixin Backends
//!
//! Backends carry the provider-side lifecycle of user-defined mixins. The
//! registry stores one backend per category type identifier; the hooks in
//! the facade decide which backend implementation to bind based on the
//! mixin's capability set, never on its concrete type.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::domain::Mixin;
use crate::provider::{ProviderError, RequestContext, SecurityGroupProvider};

/// Provider-side lifecycle of a user-defined mixin
#[async_trait]
pub trait MixinBackend: Send + Sync {
    /// Called when the mixin is registered
    async fn init(&self, mixin: &Mixin, ctx: &RequestContext) -> Result<(), ProviderError>;

    /// Called before the mixin is deleted
    async fn destroy(&self, mixin: &Mixin, ctx: &RequestContext) -> Result<(), ProviderError>;
}

/// Backend bound to security-group mixins, delegating group lifecycle to
/// the provider's security-group subsystem
pub struct SecurityGroupBackend {
    provider: Arc<dyn SecurityGroupProvider>,
}

impl SecurityGroupBackend {
    pub fn new(provider: Arc<dyn SecurityGroupProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl MixinBackend for SecurityGroupBackend {
    async fn init(&self, mixin: &Mixin, ctx: &RequestContext) -> Result<(), ProviderError> {
        info!("Creating security group for mixin {}", mixin.type_identifier());
        self.provider.create_group(mixin, ctx).await
    }

    async fn destroy(&self, mixin: &Mixin, ctx: &RequestContext) -> Result<(), ProviderError> {
        info!("Deleting security group for mixin {}", mixin.type_identifier());
        self.provider.delete_group(mixin, ctx).await
    }
}

/// Backend with no provider-side lifecycle, for mixins that are pure tags
pub struct NoopBackend;

#[async_trait]
impl MixinBackend for NoopBackend {
    async fn init(&self, _mixin: &Mixin, _ctx: &RequestContext) -> Result<(), ProviderError> {
        Ok(())
    }

    async fn destroy(&self, _mixin: &Mixin, _ctx: &RequestContext) -> Result<(), ProviderError> {
        Ok(())
    }
}
