// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provider Subsystem Ports
//!
//! The adapter never talks to the cloud provider directly; it consumes these
//! ports, implemented elsewhere against the provider's compute, volume and
//! network subsystems. All reads are issued with the caller's
//! [`RequestContext`] so the provider can apply tenant scoping.
//!
//! Every port returns [`ProviderError`] in the provider's own vocabulary;
//! the registry translates not-found at its boundary and passes everything
//! else through unchanged.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Extras, Mixin};

/// Errors surfaced by provider subsystems
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider has no matching entity
    #[error("provider entity not found: {0}")]
    NotFound(String),

    /// The provider could not be reached
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Any other provider-side failure
    #[error("provider backend error: {0}")]
    Backend(String),
}

/// Caller identity and correlation data, injected by the authentication
/// layer. The adapter assumes the caller is already authorized and scoped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Caller's user id
    pub user_id: String,
    /// Caller's project/tenant id
    pub project_id: String,
    /// Correlation ID for request tracing
    pub correlation_id: Uuid,
}

impl RequestContext {
    pub fn new(user_id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            project_id: project_id.into(),
            correlation_id: Uuid::now_v7(),
        }
    }

    /// Derive the owner extras copied into every entity constructed for
    /// this request
    pub fn extras(&self) -> Extras {
        Extras::new(&self.user_id, &self.project_id)
    }
}

/// A virtual machine as the compute subsystem reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRecord {
    /// Provider instance id
    pub id: String,
    /// Flavor reference used for resource-template lookup
    pub flavor_id: String,
    /// Image reference used for os-template lookup
    pub image_ref: String,
}

/// A block volume as the storage subsystem reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeRecord {
    /// Provider volume id
    pub id: String,
}

/// A volume attached to an instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeAttachment {
    /// Provider volume id
    pub volume_id: String,
    /// Device mountpoint inside the instance
    pub mountpoint: String,
}

/// A network interface attached to an instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAttachment {
    /// Interface name (e.g. `eth0`)
    pub interface: String,
    /// MAC address
    pub mac: String,
    /// Interface state
    pub state: String,
    /// Assigned address; also the tie-break in the link identifier
    pub address: String,
    /// Gateway address
    pub gateway: String,
    /// Allocation mode (`static` / `dynamic`)
    pub allocation: String,
}

/// Per-instance network attachments, grouped by logical network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAttachments {
    /// Attachments on the public network
    pub public: Vec<NetworkAttachment>,
    /// Attachments on the admin network
    pub admin: Vec<NetworkAttachment>,
}

/// Compute subsystem port
#[async_trait]
pub trait ComputeProvider: Send + Sync {
    /// Fetch one instance by id
    async fn instance(
        &self,
        id: &str,
        ctx: &RequestContext,
    ) -> Result<InstanceRecord, ProviderError>;

    /// List all instances visible to the request's scope
    async fn instances(&self, ctx: &RequestContext) -> Result<Vec<InstanceRecord>, ProviderError>;
}

/// Storage subsystem port
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Fetch one volume by id
    async fn volume(&self, id: &str, ctx: &RequestContext)
        -> Result<VolumeRecord, ProviderError>;

    /// List all volumes visible to the request's scope
    async fn volumes(&self, ctx: &RequestContext) -> Result<Vec<VolumeRecord>, ProviderError>;

    /// List the volumes attached to an instance
    async fn attached_volumes(
        &self,
        instance_id: &str,
        ctx: &RequestContext,
    ) -> Result<Vec<VolumeAttachment>, ProviderError>;
}

/// Network subsystem port
#[async_trait]
pub trait NetworkProvider: Send + Sync {
    /// Fetch an instance's network attachments, grouped by logical network
    async fn attachments(
        &self,
        instance_id: &str,
        ctx: &RequestContext,
    ) -> Result<NetworkAttachments, ProviderError>;
}

/// Flavor/image template lookup port
///
/// A miss is not an error: a compute resource whose flavor or image has no
/// registered template mixin is simply constructed without that mixin.
pub trait TemplateCatalog: Send + Sync {
    /// Look up a registered template mixin by its location path
    fn category(&self, path: &str, ctx: &RequestContext) -> Option<Mixin>;
}

/// Security-group subsystem port, consumed by the mixin lifecycle hooks
#[async_trait]
pub trait SecurityGroupProvider: Send + Sync {
    /// Create the provider-side group backing a security-group mixin
    async fn create_group(&self, mixin: &Mixin, ctx: &RequestContext)
        -> Result<(), ProviderError>;

    /// Delete the provider-side group backing a security-group mixin
    async fn delete_group(&self, mixin: &Mixin, ctx: &RequestContext)
        -> Result<(), ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extras_are_identical_within_one_context() {
        let ctx = RequestContext::new("user-1", "tenant-9");
        assert_eq!(ctx.extras(), ctx.extras());
    }

    #[test]
    fn test_correlation_ids_differ_across_contexts() {
        let a = RequestContext::new("user-1", "tenant-9");
        let b = RequestContext::new("user-1", "tenant-9");
        assert_ne!(a.correlation_id, b.correlation_id);
    }

    #[test]
    fn test_network_attachments_default_is_empty() {
        let atts = NetworkAttachments::default();
        assert!(atts.public.is_empty());
        assert!(atts.admin.is_empty());
    }
}
