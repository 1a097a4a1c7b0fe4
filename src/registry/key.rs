// Copyright (c) 2025 - Cowboy AI, Inc.
//! Addressable Key Parsing
//!
//! A key is split at the last `/` into a location prefix and a trailing
//! instance identifier. The location is normalized to carry a trailing
//! slash so it can be compared against the kinds' location prefixes.

use crate::errors::{RegistryError, RegistryResult};

/// Split `key` into `(location, identifier)`.
///
/// Pure and stateless. Fails with [`RegistryError::MalformedKey`] when the
/// key contains no path separator.
pub fn split_key(key: &str) -> RegistryResult<(String, &str)> {
    match key.rsplit_once('/') {
        Some((location, identifier)) => Ok((format!("{location}/"), identifier)),
        None => Err(RegistryError::MalformedKey(key.to_string())),
    }
}

/// Split a link identifier on the first `_` into the owning compute id and
/// the tie-break remainder (volume id for storage links, interface address
/// for network links).
pub fn split_link_identifier(key: &str, identifier: &str) -> RegistryResult<(String, String)> {
    match identifier.split_once('_') {
        Some((compute_id, remainder)) => Ok((compute_id.to_string(), remainder.to_string())),
        None => Err(RegistryError::MalformedKey(key.to_string())),
    }
}
