// Copyright (c) 2025 - Cowboy AI, Inc.
//! OCCI Category Value Objects
//!
//! A [`Kind`] is the single immutable type tag of an entity; a [`Mixin`] is an
//! additional capability tag attachable beyond the kind. Mixins carry a
//! `related` set of type identifiers which acts as an explicit capability
//! set: lifecycle hooks check membership in that set, never the concrete
//! mixin type.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The kind (primary category) of a resource or link
///
/// # Invariants
/// - `location` always carries a trailing `/`; entity identifiers are formed
///   as `location + instance-id` and resolved back by location prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kind {
    /// Category scheme URI
    pub scheme: String,
    /// Term within the scheme
    pub term: String,
    /// Path prefix identifying this kind's namespace
    pub location: String,
    /// Human-readable title
    pub title: String,
}

impl Kind {
    pub fn new(
        scheme: impl Into<String>,
        term: impl Into<String>,
        location: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            term: term.into(),
            location: location.into(),
            title: title.into(),
        }
    }

    /// Full `scheme#term` identifier of this category
    pub fn type_identifier(&self) -> String {
        format!("{}#{}", self.scheme, self.term)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.scheme, self.term)
    }
}

/// An additional capability tag attachable to a resource beyond its kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mixin {
    /// Category scheme URI
    pub scheme: String,
    /// Term within the scheme
    pub term: String,
    /// Path prefix under which the mixin is addressable
    pub location: String,
    /// Human-readable title
    pub title: String,
    /// Capability set: type identifiers of the categories this mixin
    /// relates to. Lifecycle hooks dispatch on membership here.
    pub related: BTreeSet<String>,
}

impl Mixin {
    pub fn new(
        scheme: impl Into<String>,
        term: impl Into<String>,
        location: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            term: term.into(),
            location: location.into(),
            title: title.into(),
            related: BTreeSet::new(),
        }
    }

    /// Add a capability tag to the `related` set
    pub fn with_related(mut self, capability: impl Into<String>) -> Self {
        self.related.insert(capability.into());
        self
    }

    /// Full `scheme#term` identifier of this category
    pub fn type_identifier(&self) -> String {
        format!("{}#{}", self.scheme, self.term)
    }

    /// Check membership of `capability` in this mixin's capability set
    pub fn has_capability(&self, capability: &str) -> bool {
        self.related.contains(capability)
    }
}

impl fmt::Display for Mixin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.scheme, self.term)
    }
}
