// Copyright (c) 2025 - Cowboy AI, Inc.
//! OCCI Infrastructure Scheme
//!
//! Fixed categories of the OCCI infrastructure extension plus the
//! provider add-on categories (OS VM mixin, security-group capability).
//! The schema is externally owned; this module only mirrors the identifiers
//! the adapter needs to decorate constructed entities.

use super::category::{Kind, Mixin};

/// OCCI infrastructure scheme URI
pub const INFRASTRUCTURE_SCHEME: &str = "http://schemas.ogf.org/occi/infrastructure";
/// Network sub-scheme for the IP networking mixin
pub const NETWORK_SCHEME: &str = "http://schemas.ogf.org/occi/infrastructure/network";
/// Network-interface sub-scheme for the IP interface mixin
pub const NETWORK_INTERFACE_SCHEME: &str =
    "http://schemas.ogf.org/occi/infrastructure/networkinterface";
/// Provider add-on scheme for the OS VM mixin
pub const COMPUTE_ADDON_SCHEME: &str = "http://schemas.openstack.org/compute/instance";

/// Security-group capability tag. A user-defined mixin whose `related` set
/// contains this identifier is treated as a security group by the lifecycle
/// hooks.
pub const SEC_GROUP_CAPABILITY: &str = "http://schemas.ogf.org/occi/infrastructure/security#group";

/// Location prefixes, always with trailing slash
pub const COMPUTE_LOCATION: &str = "/compute/";
pub const STORAGE_LOCATION: &str = "/storage/";
pub const NETWORK_LOCATION: &str = "/network/";
pub const STORAGE_LINK_LOCATION: &str = "/storagelink/";
pub const NETWORK_INTERFACE_LOCATION: &str = "/networkinterface/";

/// Core attribute names
pub const ATTR_CORE_ID: &str = "occi.core.id";
pub const ATTR_DEVICE_ID: &str = "occi.storagelink.deviceid";
pub const ATTR_NETWORK_VLAN: &str = "occi.network.vlan";
pub const ATTR_NETWORK_LABEL: &str = "occi.network.label";
pub const ATTR_NETWORK_STATE: &str = "occi.network.state";
pub const ATTR_INTERFACE: &str = "occi.networkinterface.interface";
pub const ATTR_INTERFACE_MAC: &str = "occi.networkinterface.mac";
pub const ATTR_INTERFACE_STATE: &str = "occi.networkinterface.state";
pub const ATTR_INTERFACE_ADDRESS: &str = "occi.networkinterface.address";
pub const ATTR_INTERFACE_GATEWAY: &str = "occi.networkinterface.gateway";
pub const ATTR_INTERFACE_ALLOCATION: &str = "occi.networkinterface.allocation";

impl Kind {
    /// Compute kind (`/compute/`)
    pub fn compute() -> Self {
        Kind::new(INFRASTRUCTURE_SCHEME, "compute", COMPUTE_LOCATION, "Compute Resource")
    }

    /// Storage kind (`/storage/`)
    pub fn storage() -> Self {
        Kind::new(INFRASTRUCTURE_SCHEME, "storage", STORAGE_LOCATION, "Storage Resource")
    }

    /// Network kind (`/network/`)
    pub fn network() -> Self {
        Kind::new(INFRASTRUCTURE_SCHEME, "network", NETWORK_LOCATION, "Network Resource")
    }

    /// Storage link kind (`/storagelink/`)
    pub fn storage_link() -> Self {
        Kind::new(
            INFRASTRUCTURE_SCHEME,
            "storagelink",
            STORAGE_LINK_LOCATION,
            "Storage Link",
        )
    }

    /// Network interface link kind (`/networkinterface/`)
    pub fn network_interface() -> Self {
        Kind::new(
            INFRASTRUCTURE_SCHEME,
            "networkinterface",
            NETWORK_INTERFACE_LOCATION,
            "Network Interface Link",
        )
    }
}

impl Mixin {
    /// IP networking mixin applied to the static networks
    pub fn ip_network() -> Self {
        Mixin::new(NETWORK_SCHEME, "ipnetwork", "/ipnetwork/", "IP Network Mixin")
    }

    /// IP interface mixin applied to every network link
    pub fn ip_network_interface() -> Self {
        Mixin::new(
            NETWORK_INTERFACE_SCHEME,
            "ipnetworkinterface",
            "/ipnetworkinterface/",
            "IP Network Interface Mixin",
        )
    }

    /// OS VM add-on mixin carried by every compute resource
    pub fn os_vm() -> Self {
        Mixin::new(COMPUTE_ADDON_SCHEME, "os_vm", "/os_vm/", "OS Virtual Machine")
    }
}
