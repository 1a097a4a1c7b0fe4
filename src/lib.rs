//! OCCI resource-model adapter for cloud compute inventory
//!
//! Exposes a compute provider's virtual machines, block volumes and network
//! attachments as a graph of typed, URI-addressed OCCI resources and links.
//! The adapter is state-free: a key is resolved to a freshly constructed
//! entity on every call, and the provider subsystems (consumed behind the
//! [`provider`] ports) remain the source of truth.

pub mod config;
pub mod domain;
pub mod errors;
pub mod provider;
pub mod registry;
pub mod telemetry;

// Re-export commonly used types
pub use config::AdapterConfig;
pub use domain::{Entity, Extras, Kind, Link, Mixin, Resource};
pub use errors::{RegistryError, RegistryResult};
pub use provider::{ProviderError, RequestContext};
pub use registry::{ProviderSet, ResourceRegistry};
