// Copyright (c) 2025 - Cowboy AI, Inc.
//! Adapter Configuration

use serde::{Deserialize, Serialize};

/// Configuration for the OCCI adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Hostname advertised in rendered locations; when set it overrides
    /// whatever the transport layer passes to `set_hostname`
    #[serde(default)]
    pub custom_location_hostname: Option<String>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            custom_location_hostname: None,
        }
    }
}

impl AdapterConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            custom_location_hostname: std::env::var("OCCI_CUSTOM_LOCATION_HOSTNAME").ok(),
        }
    }
}
