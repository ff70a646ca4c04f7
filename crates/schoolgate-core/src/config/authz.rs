//! Authorization policy configuration.
//!
//! Labels are kept as plain strings here; the authorization crate parses
//! and validates them when the policy is built.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Overrides applied on top of the built-in authorization tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthzConfig {
    /// Route that unauthenticated principals are sent to.
    #[serde(default = "default_sign_in_route")]
    pub sign_in_route: String,
    /// Replacement permission rows. Key is role label, value is permission labels.
    #[serde(default)]
    pub role_permissions: HashMap<String, Vec<String>>,
    /// Extra or replacement route requirements. Key is route path.
    #[serde(default)]
    pub route_permissions: HashMap<String, Vec<String>>,
    /// Landing route overrides. Key is role label.
    #[serde(default)]
    pub dashboards: HashMap<String, String>,
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            sign_in_route: default_sign_in_route(),
            role_permissions: HashMap::new(),
            route_permissions: HashMap::new(),
            dashboards: HashMap::new(),
        }
    }
}

fn default_sign_in_route() -> String {
    "/login".to_string()
}
