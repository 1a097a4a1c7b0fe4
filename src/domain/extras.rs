// Copyright (c) 2025 - Cowboy AI, Inc.
//! Request-Scoped Extras
//!
//! Tenant/user identity copied by value into every resource and link
//! constructed during a request. Two entities built from the same request
//! context always carry identical extras.

use serde::{Deserialize, Serialize};

/// Owner scoping attached to every entity constructed during a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extras {
    /// Caller's user id
    pub user_id: String,
    /// Caller's project/tenant id
    pub project_id: String,
}

impl Extras {
    pub fn new(user_id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            project_id: project_id.into(),
        }
    }
}
