// Copyright (c) 2025 - Cowboy AI, Inc.
//! OCCI Domain Model
//!
//! Core model the adapter exposes: typed, URI-addressed resources and links
//! decorated with categories and mixins, plus the request-scoped extras
//! copied into everything constructed during a resolution.
//!
//! # Value Objects
//!
//! - [`Kind`] - a resource's single primary category
//! - [`Mixin`] - additional capability tags with a `related` capability set
//! - [`Extras`] - tenant/user owner scoping
//!
//! # Entities
//!
//! - [`Resource`] - addressable entity with attributes and outbound links
//! - [`Link`] - directed, typed relationship, itself addressable
//! - [`Entity`] - either of the above, as returned by resolution

pub mod category;
pub mod entity;
pub mod extras;
pub mod schema;

pub use category::{Kind, Mixin};
pub use entity::{Attributes, Entity, Link, Resource};
pub use extras::Extras;
