//! Per-instance guard settings.

use std::collections::HashSet;

use crate::catalogue::Role;

/// Optional role restriction and redirect override for a guard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardOptions {
    /// When set, only these roles pass the guard.
    pub allowed_roles: Option<HashSet<Role>>,
    /// Redirect target for forbidden principals instead of their dashboard.
    pub fallback_route: Option<String>,
}

impl GuardOptions {
    /// Options with no restriction beyond the route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the guard to the given roles.
    pub fn allowed_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.allowed_roles = Some(roles.into_iter().collect());
        self
    }

    /// Sets the forbidden redirect target.
    pub fn fallback_route(mut self, route: impl Into<String>) -> Self {
        self.fallback_route = Some(route.into());
        self
    }
}
