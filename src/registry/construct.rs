// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Constructors
//!
//! Build fully decorated resources for one provider entity kind. Compute
//! construction is the expensive path: it fetches the instance's volume
//! and network attachments and hands each descriptor to the link builders.

use tracing::debug;

use super::ResourceRegistry;
use crate::domain::schema::{ATTR_CORE_ID, COMPUTE_LOCATION, STORAGE_LOCATION};
use crate::domain::{Kind, Mixin, Resource};
use crate::errors::RegistryResult;
use crate::provider::{InstanceRecord, RequestContext, VolumeRecord};

impl ResourceRegistry {
    /// Construct a compute resource from an instance record, including its
    /// storage and network links.
    ///
    /// Template mixins are appended only when the catalog knows the
    /// flavor/image reference; a lookup miss silently omits the mixin.
    pub(crate) async fn construct_compute(
        &self,
        record: &InstanceRecord,
        ctx: &RequestContext,
    ) -> RegistryResult<Resource> {
        let mut compute = Resource::new(
            format!("{COMPUTE_LOCATION}{}", record.id),
            Kind::compute(),
            vec![Mixin::os_vm()],
        );
        compute
            .attributes
            .insert(ATTR_CORE_ID.into(), record.id.clone());
        compute.extras = Some(ctx.extras());

        if let Some(flavor) = self
            .providers
            .templates
            .category(&format!("/{}/", record.flavor_id), ctx)
        {
            compute.mixins.push(flavor);
        } else {
            debug!("No resource template registered for flavor {}", record.flavor_id);
        }

        if let Some(image) = self
            .providers
            .templates
            .category(&format!("/{}/", record.image_ref), ctx)
        {
            compute.mixins.push(image);
        } else {
            debug!("No os template registered for image {}", record.image_ref);
        }

        let mut links = Vec::new();

        for attachment in self
            .providers
            .storage
            .attached_volumes(&record.id, ctx)
            .await?
        {
            links.push(self.storage_link(&attachment, &compute, ctx));
        }

        let attachments = self.providers.network.attachments(&record.id, ctx).await?;
        for attachment in &attachments.public {
            links.push(self.network_link(attachment, &compute, self.networks.public(), ctx));
        }
        for attachment in &attachments.admin {
            links.push(self.network_link(attachment, &compute, self.networks.admin(), ctx));
        }

        compute.links = links;
        Ok(compute)
    }

    /// Construct a standalone storage resource from a volume record.
    pub(crate) fn construct_storage(
        &self,
        record: &VolumeRecord,
        ctx: &RequestContext,
    ) -> Resource {
        let mut storage = Resource::new(
            format!("{STORAGE_LOCATION}{}", record.id),
            Kind::storage(),
            vec![],
        );
        storage
            .attributes
            .insert(ATTR_CORE_ID.into(), record.id.clone());
        storage.extras = Some(ctx.extras());
        storage
    }
}
