// Copyright (c) 2025 - Cowboy AI, Inc.
//! Link Builders
//!
//! Derived link construction for the two link kinds. The composite link
//! identifier joins the parent's core id and a tie-break with an
//! underscore: the volume id for storage links, the interface address for
//! network links (interfaces are keyed by address, not a separate entity
//! id). External callers depend on both shapes; do not unify them.

use std::sync::Arc;

use super::ResourceRegistry;
use crate::domain::schema::{
    ATTR_CORE_ID, ATTR_DEVICE_ID, ATTR_INTERFACE, ATTR_INTERFACE_ADDRESS,
    ATTR_INTERFACE_ALLOCATION, ATTR_INTERFACE_GATEWAY, ATTR_INTERFACE_MAC, ATTR_INTERFACE_STATE,
    NETWORK_INTERFACE_LOCATION, STORAGE_LINK_LOCATION,
};
use crate::domain::{Attributes, Kind, Link, Mixin, Resource};
use crate::provider::{NetworkAttachment, RequestContext, VolumeAttachment, VolumeRecord};

impl ResourceRegistry {
    /// Build a storage link for one volume attachment. The target is a
    /// freshly constructed storage resource: the same volume resolved
    /// directly is a distinct object instance with an equal identifier.
    pub(crate) fn storage_link(
        &self,
        attachment: &VolumeAttachment,
        source: &Resource,
        ctx: &RequestContext,
    ) -> Link {
        let target = self.construct_storage(
            &VolumeRecord {
                id: attachment.volume_id.clone(),
            },
            ctx,
        );

        let link_id = format!(
            "{}_{}",
            source.attribute(ATTR_CORE_ID).unwrap_or_default(),
            target.attribute(ATTR_CORE_ID).unwrap_or_default(),
        );

        let mut attributes = Attributes::new();
        attributes.insert(ATTR_DEVICE_ID.into(), attachment.mountpoint.clone());

        Link {
            identifier: format!("{STORAGE_LINK_LOCATION}{link_id}"),
            kind: Kind::storage_link(),
            mixins: vec![],
            source: source.identifier.clone(),
            target: Arc::new(target),
            attributes,
            extras: Some(ctx.extras()),
        }
    }

    /// Build a network interface link for one attachment. The target is
    /// always one of the shared static networks, never newly constructed;
    /// descriptor fields are copied into the attributes verbatim.
    pub(crate) fn network_link(
        &self,
        attachment: &NetworkAttachment,
        source: &Resource,
        target: &Arc<Resource>,
        ctx: &RequestContext,
    ) -> Link {
        let link_id = format!(
            "{}_{}",
            source.attribute(ATTR_CORE_ID).unwrap_or_default(),
            attachment.address,
        );

        let mut attributes = Attributes::new();
        attributes.insert(ATTR_INTERFACE.into(), attachment.interface.clone());
        attributes.insert(ATTR_INTERFACE_MAC.into(), attachment.mac.clone());
        attributes.insert(ATTR_INTERFACE_STATE.into(), attachment.state.clone());
        attributes.insert(ATTR_INTERFACE_ADDRESS.into(), attachment.address.clone());
        attributes.insert(ATTR_INTERFACE_GATEWAY.into(), attachment.gateway.clone());
        attributes.insert(ATTR_INTERFACE_ALLOCATION.into(), attachment.allocation.clone());

        Link {
            identifier: format!("{NETWORK_INTERFACE_LOCATION}{link_id}"),
            kind: Kind::network_interface(),
            mixins: vec![Mixin::ip_network_interface()],
            source: source.identifier.clone(),
            target: Arc::clone(target),
            attributes,
            extras: Some(ctx.extras()),
        }
    }
}
