//! Route-to-permission requirements.
//!
//! A listed route is reachable by any role holding at least one of its
//! permissions. An unlisted route is reachable by every authenticated
//! principal: this default-allow rule is a policy decision, so a new
//! protected page must be registered here to be protected at all.

use std::collections::{BTreeSet, HashMap, HashSet};

use schoolgate_core::AppError;
use schoolgate_core::AppResult;

use super::permission::Permission;

/// Mapping from route path to the permissions that satisfy it (ANY-of).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    /// Normalized path → non-empty permission set.
    requirements: HashMap<String, HashSet<Permission>>,
}

impl RouteTable {
    /// Builds the application's built-in route table.
    pub fn builtin() -> Self {
        let requirements = builtin_rows()
            .iter()
            .map(|(path, permissions)| (path.to_string(), permissions.iter().copied().collect()))
            .collect();
        Self { requirements }
    }

    /// Builds a route table from explicit rows.
    ///
    /// Every path must start with `/` and every permission set must be non-empty.
    pub fn from_rows<I, S>(rows: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (S, HashSet<Permission>)>,
        S: AsRef<str>,
    {
        let mut requirements = HashMap::new();
        for (path, permissions) in rows {
            let (path, permissions) = validate_row(path.as_ref(), permissions)?;
            if requirements.contains_key(&path) {
                return Err(AppError::configuration(format!(
                    "route '{path}' is listed more than once"
                )));
            }
            requirements.insert(path, permissions);
        }
        Ok(Self { requirements })
    }

    /// Adds or replaces rows using permission labels from configuration.
    ///
    /// Two keys normalizing to the same path are rejected.
    pub fn with_overrides(mut self, overrides: &HashMap<String, Vec<String>>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for (path, labels) in overrides {
            let permissions = labels
                .iter()
                .map(|label| {
                    label.parse::<Permission>().map_err(|e| {
                        AppError::configuration(format!("route_permissions.{path}: {}", e.message))
                    })
                })
                .collect::<AppResult<HashSet<Permission>>>()?;
            let (path, permissions) = validate_row(path, permissions)?;
            if !seen.insert(path.clone()) {
                return Err(AppError::configuration(format!(
                    "route_permissions: '{path}' is listed more than once"
                )));
            }

            if self.requirements.contains_key(&path) {
                tracing::warn!(
                    route = %path,
                    "Replacing built-in route requirement from configuration"
                );
            }
            self.requirements.insert(path, permissions);
        }
        Ok(self)
    }

    /// Returns the permissions satisfying the route, or `None` when unlisted.
    pub fn requirement(&self, route: &str) -> Option<&HashSet<Permission>> {
        self.requirements.get(normalize(route))
    }

    /// Returns every listed route, sorted.
    pub fn routes(&self) -> BTreeSet<&str> {
        self.requirements.keys().map(String::as_str).collect()
    }

    /// Number of listed routes.
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Whether no route is listed.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_row(
    path: &str,
    permissions: HashSet<Permission>,
) -> AppResult<(String, HashSet<Permission>)> {
    if !path.starts_with('/') {
        return Err(AppError::configuration(format!(
            "Route '{path}' must start with '/'"
        )));
    }
    if permissions.is_empty() {
        return Err(AppError::configuration(format!(
            "Route '{path}' has an empty permission set"
        )));
    }
    Ok((normalize(path).to_string(), permissions))
}

/// Strips the query string, fragment and trailing slash from a path.
pub(crate) fn normalize(route: &str) -> &str {
    let end = route.find(['?', '#']).unwrap_or(route.len());
    let path = &route[..end];
    match path.trim_end_matches('/') {
        "" if path.starts_with('/') => "/",
        trimmed => trimmed,
    }
}

fn builtin_rows() -> &'static [(&'static str, &'static [Permission])] {
    use Permission::*;

    const ROWS: &[(&str, &[Permission])] = &[
        // Administration
        ("/dashboard/admin/users", &[ManageUsers]),
        ("/dashboard/admin/staff", &[ManageStaff, ManageUsers]),
        ("/dashboard/admin/students", &[ManageStudents]),
        ("/dashboard/admin/parents", &[ManageParents]),
        ("/dashboard/admin/classes", &[ManageClasses, ManageUsers]),
        ("/dashboard/admin/subjects", &[ManageSubjects]),
        ("/dashboard/admin/schedule", &[ManageSchedule]),
        ("/dashboard/admin/settings", &[ManageSchoolSettings]),
        // Billing
        ("/dashboard/finance/reports", &[ViewFinancialReports]),
        ("/dashboard/finance/payments", &[ManagePayments]),
        // Teaching
        ("/dashboard/teacher/grades", &[ManageGrades]),
        ("/dashboard/teacher/attendance", &[TakeAttendance]),
        ("/dashboard/teacher/assignments", &[CreateAssignments]),
        // Shared
        ("/dashboard/assignments", &[ViewAssignments, CreateAssignments]),
        ("/dashboard/messages", &[SendMessages]),
        ("/dashboard/reports", &[ViewReports]),
        ("/dashboard/analytics", &[ViewAnalytics]),
    ];
    ROWS
}
