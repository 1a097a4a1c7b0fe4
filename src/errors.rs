//! Error types for registry operations
//!
//! The registry speaks its own error vocabulary: a key that cannot be split
//! is [`RegistryError::MalformedKey`], a missing entity is
//! [`RegistryError::NotFound`] regardless of how the provider signalled the
//! miss, and every other provider failure passes through unchanged as
//! [`RegistryError::Provider`].

use thiserror::Error;

use crate::provider::ProviderError;

/// Errors that can occur while resolving resources through the registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Key could not be split into a location and an instance identifier
    #[error("malformed resource key: {0}")]
    MalformedKey(String),

    /// No entity with this key exists, or the provider reported a miss
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Provider-side failure passed through unchanged
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl RegistryError {
    /// Translate a provider-level not-found into the registry's own
    /// [`RegistryError::NotFound`] for `key`, leaving every other error
    /// untouched. This is the single translation boundary between the
    /// provider's vocabulary and the registry's.
    pub fn absorb_not_found(self, key: &str) -> Self {
        match self {
            RegistryError::Provider(ProviderError::NotFound(_)) => {
                RegistryError::NotFound(key.to_string())
            }
            other => other,
        }
    }
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_not_found_is_absorbed() {
        let err = RegistryError::Provider(ProviderError::NotFound("instance abc".into()));
        match err.absorb_not_found("/compute/abc") {
            RegistryError::NotFound(key) => assert_eq!(key, "/compute/abc"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_other_provider_errors_propagate() {
        let err = RegistryError::Provider(ProviderError::Unavailable("compute api down".into()));
        match err.absorb_not_found("/compute/abc") {
            RegistryError::Provider(ProviderError::Unavailable(_)) => {}
            other => panic!("expected Provider error to pass through, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_key_display() {
        let err = RegistryError::MalformedKey("compute".into());
        assert!(err.to_string().contains("malformed"));
    }
}
