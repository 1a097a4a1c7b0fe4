// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource and Link Entities
//!
//! Entities are constructed fresh per resolution and never mutated after
//! return. A [`Link`] references its source by identifier (the only handle
//! callers use to re-resolve a resource) and owns its target through an
//! `Arc`: storage links allocate a fresh target per construction while
//! network links share the registry's static network resources, so target
//! sharing is observable through `Arc::ptr_eq` but equality between
//! entities is always by identifier.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::category::{Kind, Mixin};
use super::extras::Extras;

/// String-typed attribute mapping, ordered by attribute name
pub type Attributes = BTreeMap<String, String>;

/// An addressable entity in the exposed resource model
#[derive(Debug, Clone)]
pub struct Resource {
    /// URI-shaped identifier, `<location-prefix><provider-instance-id>`
    pub identifier: String,
    /// Primary category
    pub kind: Kind,
    /// Additional capability tags, in decoration order
    pub mixins: Vec<Mixin>,
    /// Attribute mapping
    pub attributes: Attributes,
    /// Outbound links, in construction order
    pub links: Vec<Link>,
    /// Owner scoping; `None` for the static networks built at startup
    pub extras: Option<Extras>,
}

impl Resource {
    pub fn new(identifier: impl Into<String>, kind: Kind, mixins: Vec<Mixin>) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
            mixins,
            attributes: Attributes::new(),
            links: Vec::new(),
            extras: None,
        }
    }

    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Equality is by identifier: a volume resolved through a compute
/// resource's links and the same volume resolved directly are distinct
/// object instances but equal entities.
impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for Resource {}

/// A directed, typed relationship between two resources
#[derive(Debug, Clone)]
pub struct Link {
    /// Derived identifier, `<link-location><parent-id>_<tie-break>`
    pub identifier: String,
    /// Primary category (storage link or network interface)
    pub kind: Kind,
    /// Additional capability tags
    pub mixins: Vec<Mixin>,
    /// Identifier of the source resource
    pub source: String,
    /// Target resource; shared for network links, freshly built for
    /// storage links
    pub target: Arc<Resource>,
    /// Attribute mapping
    pub attributes: Attributes,
    /// Owner scoping
    pub extras: Option<Extras>,
}

impl Link {
    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for Link {}

/// A resolved entity: either a resource or one of its links
#[derive(Debug, Clone)]
pub enum Entity {
    Resource(Arc<Resource>),
    Link(Link),
}

impl Entity {
    /// The addressable identifier of this entity
    pub fn identifier(&self) -> &str {
        match self {
            Entity::Resource(resource) => &resource.identifier,
            Entity::Link(link) => &link.identifier,
        }
    }

    /// Borrow the resource, if this entity is one
    pub fn as_resource(&self) -> Option<&Arc<Resource>> {
        match self {
            Entity::Resource(resource) => Some(resource),
            Entity::Link(_) => None,
        }
    }

    /// Borrow the link, if this entity is one
    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Entity::Resource(_) => None,
            Entity::Link(link) => Some(link),
        }
    }
}
