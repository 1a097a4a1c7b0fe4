// Copyright (c) 2025 - Cowboy AI, Inc.
//! Static Network Catalog
//!
//! Exactly two logical networks exist for the lifetime of the process:
//! `admin` and `public`. Their attributes are assigned once here and never
//! recomputed from the provider. Every network link targets one of these
//! shared instances; callers must never mutate them, which is why the
//! catalog hands out `Arc` clones only.

use std::sync::Arc;

use crate::domain::schema::{
    ATTR_INTERFACE_ADDRESS, ATTR_INTERFACE_ALLOCATION, ATTR_INTERFACE_GATEWAY,
    ATTR_NETWORK_LABEL, ATTR_NETWORK_STATE, ATTR_NETWORK_VLAN, NETWORK_LOCATION,
};
use crate::domain::{Kind, Mixin, Resource};

/// Logical network names recognized by the catalog
pub const ADMIN_NETWORK: &str = "admin";
/// See [`ADMIN_NETWORK`]
pub const PUBLIC_NETWORK: &str = "public";

/// The two process-lifetime network resources, shared by reference across
/// every network link
#[derive(Debug)]
pub struct StaticNetworks {
    admin: Arc<Resource>,
    public: Arc<Resource>,
}

impl StaticNetworks {
    pub fn new() -> Self {
        Self {
            admin: Arc::new(build_network(
                ADMIN_NETWORK,
                "admin",
                "10.0.0.0/24",
                "10.0.0.1",
            )),
            public: Arc::new(build_network(
                PUBLIC_NETWORK,
                "external",
                "192.168.0.0/24",
                "192.168.0.1",
            )),
        }
    }

    /// Look up a network by its logical name
    pub fn by_name(&self, name: &str) -> Option<&Arc<Resource>> {
        match name {
            ADMIN_NETWORK => Some(&self.admin),
            PUBLIC_NETWORK => Some(&self.public),
            _ => None,
        }
    }

    /// The admin network
    pub fn admin(&self) -> &Arc<Resource> {
        &self.admin
    }

    /// The public network
    pub fn public(&self) -> &Arc<Resource> {
        &self.public
    }

    /// Both networks, in catalog order
    pub fn all(&self) -> [&Arc<Resource>; 2] {
        [&self.admin, &self.public]
    }
}

impl Default for StaticNetworks {
    fn default() -> Self {
        Self::new()
    }
}

fn build_network(name: &str, vlan: &str, address: &str, gateway: &str) -> Resource {
    let mut network = Resource::new(
        format!("{NETWORK_LOCATION}{name}"),
        Kind::network(),
        vec![Mixin::ip_network()],
    );
    network
        .attributes
        .insert(ATTR_NETWORK_VLAN.into(), vlan.into());
    network
        .attributes
        .insert(ATTR_NETWORK_LABEL.into(), "default".into());
    network
        .attributes
        .insert(ATTR_NETWORK_STATE.into(), "active".into());
    network
        .attributes
        .insert(ATTR_INTERFACE_ADDRESS.into(), address.into());
    network
        .attributes
        .insert(ATTR_INTERFACE_GATEWAY.into(), gateway.into());
    network
        .attributes
        .insert(ATTR_INTERFACE_ALLOCATION.into(), "static".into());
    network
}
