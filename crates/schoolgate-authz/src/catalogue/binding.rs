//! Role-to-permission binding.

use std::collections::{HashMap, HashSet};

use schoolgate_core::AppError;
use schoolgate_core::AppResult;

use super::permission::Permission;
use super::role::Role;

/// Total mapping from every [`Role`] to its set of [`Permission`]s.
///
/// Construction fails when a role has no row. An empty row is a legitimate
/// "no permissions" binding, a missing row is a configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePermissionBinding {
    /// Role → set of permissions.
    rows: HashMap<Role, HashSet<Permission>>,
}

impl RolePermissionBinding {
    /// Builds the application's built-in binding.
    pub fn builtin() -> Self {
        let rows = Role::ALL
            .into_iter()
            .map(|role| (role, builtin_row(role).into_iter().collect()))
            .collect();
        Self { rows }
    }

    /// Builds a binding from explicit rows, requiring exactly one row for
    /// every role.
    pub fn from_rows<I>(rows: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (Role, HashSet<Permission>)>,
    {
        let mut bound = HashMap::new();
        for (role, permissions) in rows {
            if bound.insert(role, permissions).is_some() {
                return Err(AppError::configuration(format!(
                    "Role permission binding has more than one row for: {role}"
                )));
            }
        }
        let rows = bound;
        let missing: Vec<&str> = Role::ALL
            .iter()
            .filter(|role| !rows.contains_key(role))
            .map(|role| role.as_str())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::configuration(format!(
                "Role permission binding has no row for: {}",
                missing.join(", ")
            )));
        }

        Ok(Self { rows })
    }

    /// Replaces whole rows using role and permission labels from configuration.
    ///
    /// Two labels naming the same role are rejected.
    pub fn with_overrides(mut self, overrides: &HashMap<String, Vec<String>>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for (role_label, permission_labels) in overrides {
            let role: Role = role_label.parse().map_err(|e: AppError| {
                AppError::configuration(format!("role_permissions: {}", e.message))
            })?;
            if !seen.insert(role) {
                return Err(AppError::configuration(format!(
                    "role_permissions: role '{role}' is listed more than once"
                )));
            }
            let permissions = permission_labels
                .iter()
                .map(|label| {
                    label.parse::<Permission>().map_err(|e| {
                        AppError::configuration(format!(
                            "role_permissions.{role}: {}",
                            e.message
                        ))
                    })
                })
                .collect::<AppResult<HashSet<Permission>>>()?;

            tracing::warn!(
                role = %role,
                count = permissions.len(),
                "Replacing built-in permission row from configuration"
            );
            self.rows.insert(role, permissions);
        }
        Ok(self)
    }

    /// Returns the permission set bound to the role.
    pub fn permissions_for(&self, role: Role) -> &HashSet<Permission> {
        // Every role has a row after construction.
        &self.rows[&role]
    }

    /// Checks whether the role's row contains the permission.
    pub fn contains(&self, role: Role, permission: Permission) -> bool {
        self.permissions_for(role).contains(&permission)
    }
}

impl Default for RolePermissionBinding {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Built-in permission row per role. The exhaustive match keeps the
/// built-in binding total whenever a role is added.
fn builtin_row(role: Role) -> Vec<Permission> {
    use Permission::*;

    match role {
        Role::SuperAdmin => Permission::ALL.to_vec(),
        Role::SchoolAdmin => vec![
            ManageUsers,
            ManageStaff,
            ManageStudents,
            ManageParents,
            ManageClasses,
            ManageSubjects,
            ViewAssignments,
            ManageSchedule,
            SendMessages,
            ViewReports,
            ViewAnalytics,
            ManageSchoolSettings,
            ViewFinancialReports,
            ManagePayments,
        ],
        Role::AssistantAdmin => vec![
            ManageStudents,
            ManageParents,
            ManageClasses,
            TakeAttendance,
            ViewAssignments,
            ManageSchedule,
            SendMessages,
            ViewReports,
        ],
        Role::HomeroomTeacher => vec![
            ManageGrades,
            TakeAttendance,
            CreateAssignments,
            ViewAssignments,
            SendMessages,
            ViewReports,
        ],
        Role::SubjectTeacher => vec![
            ManageGrades,
            TakeAttendance,
            CreateAssignments,
            ViewAssignments,
            SendMessages,
        ],
        Role::Student => vec![ViewAssignments],
        Role::Parent => vec![ViewAssignments, ViewReports, SendMessages],
    }
}
