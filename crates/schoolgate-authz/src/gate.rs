//! Fragment-level render gate.
//!
//! Unlike the guard, a render gate never navigates. It decides whether a
//! piece of UI is drawn, optionally substituting fallback content. Every
//! supplied criterion must pass: the single permission, then the permission
//! list under its [`MatchMode`], then the role set.

use std::collections::HashSet;

use crate::catalogue::{Permission, Role};
use crate::facade::PermissionFacade;
use crate::session::SessionSource;

/// How a permission list is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Every permission is required.
    #[default]
    All,
    /// Any one permission suffices.
    Any,
}

/// Criteria for drawing a UI fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderGate {
    permission: Option<Permission>,
    permissions: Option<(Vec<Permission>, MatchMode)>,
    roles: Option<HashSet<Role>>,
}

impl RenderGate {
    /// A gate with no criteria. Passes for any authenticated principal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires a single permission.
    pub fn permission(mut self, permission: Permission) -> Self {
        self.permission = Some(permission);
        self
    }

    /// Requires a list of permissions under the given mode.
    pub fn permissions(mut self, permissions: impl Into<Vec<Permission>>, mode: MatchMode) -> Self {
        self.permissions = Some((permissions.into(), mode));
        self
    }

    /// Requires the principal's role to be one of `roles`.
    pub fn roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles = Some(roles.into_iter().collect());
        self
    }

    /// Administrator-like roles only.
    pub fn admin_only() -> Self {
        Self::new().roles(Role::ADMIN_ROLES)
    }

    /// Teacher-like roles only.
    pub fn teacher_only() -> Self {
        Self::new().roles(Role::TEACHER_ROLES)
    }

    /// Students only.
    pub fn student_only() -> Self {
        Self::new().roles([Role::Student])
    }

    /// Parents and guardians only.
    pub fn parent_only() -> Self {
        Self::new().roles([Role::Parent])
    }

    /// Top-level administrators only.
    pub fn super_admin_only() -> Self {
        Self::new().roles([Role::SuperAdmin])
    }

    /// Whether the wrapped content may be drawn for the current principal.
    pub fn allows<S: SessionSource>(&self, facade: &PermissionFacade<S>) -> bool {
        if !facade.is_authenticated() {
            return false;
        }

        if let Some(permission) = self.permission {
            if !facade.check(permission) {
                return false;
            }
        }

        if let Some((permissions, mode)) = &self.permissions {
            let passed = match mode {
                MatchMode::All => facade.check_all(permissions),
                MatchMode::Any => facade.check_any(permissions),
            };
            if !passed {
                return false;
            }
        }

        match &self.roles {
            Some(roles) => facade.is_any_of_roles(roles),
            None => true,
        }
    }

    /// Draws `content` when allowed, else `fallback`, else nothing.
    pub fn render<S, T>(
        &self,
        facade: &PermissionFacade<S>,
        content: impl FnOnce() -> T,
        fallback: Option<T>,
    ) -> Option<T>
    where
        S: SessionSource,
    {
        if self.allows(facade) {
            Some(content())
        } else {
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::evaluator::PolicyEvaluator;
    use crate::session::{Principal, SessionSnapshot};

    fn facade(role: Role) -> PermissionFacade<SessionSnapshot> {
        let session = SessionSnapshot::authenticated(Principal::new(Uuid::new_v4(), role));
        PermissionFacade::new(PolicyEvaluator::default(), session)
    }

    #[test]
    fn test_single_permission() {
        let gate = RenderGate::new().permission(Permission::ManagePayments);
        assert!(gate.allows(&facade(Role::SchoolAdmin)));
        assert!(!gate.allows(&facade(Role::Parent)));
    }

    #[test]
    fn test_all_and_any_modes() {
        let list = [Permission::ManageGrades, Permission::ViewReports];
        let all = RenderGate::new().permissions(list, MatchMode::All);
        let any = RenderGate::new().permissions(list, MatchMode::Any);

        assert!(all.allows(&facade(Role::HomeroomTeacher)));
        assert!(!all.allows(&facade(Role::SubjectTeacher)));
        assert!(any.allows(&facade(Role::SubjectTeacher)));
        assert!(!any.allows(&facade(Role::Student)));
    }

    #[test]
    fn test_empty_list_follows_evaluator_semantics() {
        let all = RenderGate::new().permissions(Vec::<Permission>::new(), MatchMode::All);
        let any = RenderGate::new().permissions(Vec::<Permission>::new(), MatchMode::Any);
        assert!(all.allows(&facade(Role::Student)));
        assert!(!any.allows(&facade(Role::Student)));
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let gate = RenderGate::new()
            .permission(Permission::SendMessages)
            .roles(Role::TEACHER_ROLES);
        assert!(gate.allows(&facade(Role::SubjectTeacher)));
        // parents may send messages but are not teachers
        assert!(!gate.allows(&facade(Role::Parent)));
        // admins are not teachers either
        assert!(!gate.allows(&facade(Role::SchoolAdmin)));
    }

    #[test]
    fn test_presets() {
        assert!(RenderGate::admin_only().allows(&facade(Role::AssistantAdmin)));
        assert!(!RenderGate::admin_only().allows(&facade(Role::HomeroomTeacher)));
        assert!(RenderGate::teacher_only().allows(&facade(Role::HomeroomTeacher)));
        assert!(RenderGate::student_only().allows(&facade(Role::Student)));
        assert!(!RenderGate::student_only().allows(&facade(Role::Parent)));
        assert!(RenderGate::parent_only().allows(&facade(Role::Parent)));
        assert!(RenderGate::super_admin_only().allows(&facade(Role::SuperAdmin)));
        assert!(!RenderGate::super_admin_only().allows(&facade(Role::SchoolAdmin)));
    }

    #[test]
    fn test_render_uses_fallback() {
        let gate = RenderGate::super_admin_only();
        assert_eq!(
            gate.render(&facade(Role::SuperAdmin), || "settings", Some("upgrade")),
            Some("settings")
        );
        assert_eq!(
            gate.render(&facade(Role::Student), || "settings", Some("upgrade")),
            Some("upgrade")
        );
        assert_eq!(gate.render(&facade(Role::Student), || "settings", None), None);
    }

    #[test]
    fn test_unauthenticated_sees_nothing() {
        let anonymous =
            PermissionFacade::new(PolicyEvaluator::default(), SessionSnapshot::anonymous());
        assert!(!RenderGate::new().allows(&anonymous));
        let empty_all = RenderGate::new().permissions(Vec::<Permission>::new(), MatchMode::All);
        assert!(!empty_all.allows(&anonymous));
    }
}
