//! Property-based tests for key parsing
//!
//! Verifies that splitting an addressable key at the last separator is
//! total over well-formed keys and rejects everything without a separator.

use proptest::prelude::*;

use occi_adapter::registry::key::{split_key, split_link_identifier};
use occi_adapter::RegistryError;

/// Generate location prefixes shaped like the registry's namespaces
fn arb_location() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/compute/".to_string()),
        Just("/storage/".to_string()),
        Just("/network/".to_string()),
        Just("/storagelink/".to_string()),
        Just("/networkinterface/".to_string()),
    ]
}

proptest! {
    #[test]
    fn split_recovers_location_and_identifier(
        location in arb_location(),
        identifier in "[a-zA-Z0-9.-]{1,32}",
    ) {
        let key = format!("{location}{identifier}");
        let (loc, id) = split_key(&key).unwrap();
        prop_assert_eq!(loc, location);
        prop_assert_eq!(id, identifier);
    }

    #[test]
    fn location_always_ends_with_separator(key in ".*/.*") {
        let (loc, _) = split_key(&key).unwrap();
        prop_assert!(loc.ends_with('/'));
    }

    #[test]
    fn keys_without_separator_are_malformed(key in "[^/]*") {
        prop_assert!(matches!(
            split_key(&key),
            Err(RegistryError::MalformedKey(_))
        ));
    }

    #[test]
    fn link_identifier_split_rejoins(
        compute_id in "[a-z0-9]{1,16}",
        remainder in "[a-z0-9._]{1,16}",
    ) {
        let identifier = format!("{compute_id}_{remainder}");
        let key = format!("/storagelink/{identifier}");
        let (parent, rest) = split_link_identifier(&key, &identifier).unwrap();
        prop_assert_eq!(format!("{parent}_{rest}"), identifier);
        prop_assert_eq!(parent, compute_id);
    }
}
