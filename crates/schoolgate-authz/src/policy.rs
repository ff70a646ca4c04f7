//! The immutable authorization policy.
//!
//! A [`Policy`] is assembled once at startup from the built-in tables and
//! the configuration overrides, then shared behind an `Arc` by every
//! facade, guard and render gate. Tests build alternate policies directly.

use schoolgate_core::AppResult;
use schoolgate_core::config::authz::AuthzConfig;

use crate::catalogue::{RolePermissionBinding, RouteTable};
use crate::dashboard::DashboardResolver;

/// Role binding, route table and redirect targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    binding: RolePermissionBinding,
    routes: RouteTable,
    dashboards: DashboardResolver,
}

impl Policy {
    /// Creates a policy from already-validated parts.
    pub fn new(
        binding: RolePermissionBinding,
        routes: RouteTable,
        dashboards: DashboardResolver,
    ) -> Self {
        Self {
            binding,
            routes,
            dashboards,
        }
    }

    /// The built-in policy with no configuration overrides.
    pub fn builtin() -> Self {
        Self::new(
            RolePermissionBinding::builtin(),
            RouteTable::builtin(),
            DashboardResolver::default(),
        )
    }

    /// Builds the policy from configuration, failing on any inconsistency.
    pub fn from_config(config: &AuthzConfig) -> AppResult<Self> {
        let binding = RolePermissionBinding::builtin().with_overrides(&config.role_permissions)?;
        let routes = RouteTable::builtin().with_overrides(&config.route_permissions)?;
        let dashboards = DashboardResolver::new(&config.sign_in_route)?
            .with_overrides(&config.dashboards)?;

        tracing::info!(
            routes = routes.len(),
            role_overrides = config.role_permissions.len(),
            route_overrides = config.route_permissions.len(),
            sign_in = %dashboards.sign_in_route(),
            "Authorization policy built"
        );

        Ok(Self::new(binding, routes, dashboards))
    }

    /// The role → permission binding.
    pub fn binding(&self) -> &RolePermissionBinding {
        &self.binding
    }

    /// The route requirement table.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// The redirect targets.
    pub fn dashboards(&self) -> &DashboardResolver {
        &self.dashboards
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::builtin()
    }
}
