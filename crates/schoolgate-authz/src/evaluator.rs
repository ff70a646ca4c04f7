//! Pure permission and route predicates over a [`Policy`].

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use schoolgate_core::AppError;
use schoolgate_core::AppResult;

use crate::catalogue::{Permission, Role};
use crate::policy::Policy;

/// Answers permission and route questions for a role.
///
/// Cloning is cheap; the policy is shared.
#[derive(Debug, Clone)]
pub struct PolicyEvaluator {
    policy: Arc<Policy>,
}

impl PolicyEvaluator {
    /// Creates an evaluator over a shared policy.
    pub fn new(policy: Arc<Policy>) -> Self {
        Self { policy }
    }

    /// Checks whether the role holds the permission.
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.policy.binding().contains(role, permission)
    }

    /// Checks whether the role holds every permission. True for an empty list.
    pub fn has_all_permissions(&self, role: Role, permissions: &[Permission]) -> bool {
        permissions.iter().all(|p| self.has_permission(role, *p))
    }

    /// Checks whether the role holds at least one permission. False for an empty list.
    pub fn has_any_permission(&self, role: Role, permissions: &[Permission]) -> bool {
        permissions.iter().any(|p| self.has_permission(role, *p))
    }

    /// Checks whether the role may reach the route.
    ///
    /// Unlisted routes are reachable by every role.
    pub fn can_access_route(&self, role: Role, route: &str) -> bool {
        match self.policy.routes().requirement(route) {
            None => true,
            Some(required) => required.iter().any(|p| self.has_permission(role, *p)),
        }
    }

    /// Listed routes the role may reach. For introspection only; enforcement
    /// always goes through [`Self::can_access_route`].
    pub fn allowed_routes(&self, role: Role) -> BTreeSet<String> {
        self.policy
            .routes()
            .routes()
            .into_iter()
            .filter(|route| self.can_access_route(role, route))
            .map(str::to_string)
            .collect()
    }

    /// Returns the permissions bound to the role.
    pub fn permissions_for_role(&self, role: Role) -> &HashSet<Permission> {
        self.policy.binding().permissions_for(role)
    }

    /// Checks the permission, returning `Err(AppError::authorization)` if denied.
    pub fn require_permission(&self, role: Role, permission: Permission) -> AppResult<()> {
        if self.has_permission(role, permission) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{role}' does not have permission '{permission}'"
            )))
        }
    }

    /// The underlying policy.
    pub fn policy(&self) -> &Arc<Policy> {
        &self.policy
    }
}

impl Default for PolicyEvaluator {
    fn default() -> Self {
        Self::new(Arc::new(Policy::builtin()))
    }
}
