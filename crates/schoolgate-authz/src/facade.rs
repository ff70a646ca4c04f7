//! Permission predicates bound to the current principal.

use std::collections::HashSet;

use crate::catalogue::{Permission, Role};
use crate::evaluator::PolicyEvaluator;
use crate::session::{SessionSnapshot, SessionSource};

/// Binds the [`PolicyEvaluator`] to the live session.
///
/// Every call re-reads the session, so a role change mid-session is seen by
/// the next check. An absent or unauthenticated principal fails every check.
#[derive(Debug, Clone)]
pub struct PermissionFacade<S> {
    evaluator: PolicyEvaluator,
    session: S,
}

impl<S: SessionSource> PermissionFacade<S> {
    /// Creates a facade over the evaluator and session source.
    pub fn new(evaluator: PolicyEvaluator, session: S) -> Self {
        Self { evaluator, session }
    }

    /// Current session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// The current principal's role, if resolved and authenticated.
    pub fn role(&self) -> Option<Role> {
        self.snapshot().role()
    }

    /// Whether a principal is resolved and authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.role().is_some()
    }

    /// Checks a single permission.
    pub fn check(&self, permission: Permission) -> bool {
        self.role()
            .is_some_and(|role| self.evaluator.has_permission(role, permission))
    }

    /// Checks that every permission is held.
    pub fn check_all(&self, permissions: &[Permission]) -> bool {
        self.role()
            .is_some_and(|role| self.evaluator.has_all_permissions(role, permissions))
    }

    /// Checks that at least one permission is held.
    pub fn check_any(&self, permissions: &[Permission]) -> bool {
        self.role()
            .is_some_and(|role| self.evaluator.has_any_permission(role, permissions))
    }

    /// Checks whether the principal may reach the route.
    pub fn can_access(&self, route: &str) -> bool {
        self.role()
            .is_some_and(|role| self.evaluator.can_access_route(role, route))
    }

    /// Role identity check. Does not consult the permission binding.
    pub fn is_role(&self, role: Role) -> bool {
        self.role() == Some(role)
    }

    /// Role identity check against a set of roles.
    pub fn is_any_of_roles(&self, roles: &HashSet<Role>) -> bool {
        self.role().is_some_and(|role| roles.contains(&role))
    }

    /// Whether the principal is administrator-like.
    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(|role| role.can_access_admin_routes())
    }

    /// Whether the principal is teacher-like.
    pub fn is_teacher(&self) -> bool {
        self.role()
            .is_some_and(|role| role.can_access_teacher_features())
    }
}
