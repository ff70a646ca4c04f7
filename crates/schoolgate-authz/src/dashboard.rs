//! Canonical landing routes per role.
//!
//! Landing routes are redirect targets only and never grant access. The
//! mapping is total: every role resolves through an exhaustive match, so
//! there is no fallback chain for roles outside the enumeration.

use std::collections::{HashMap, HashSet};

use schoolgate_core::AppError;
use schoolgate_core::AppResult;

use crate::catalogue::Role;

/// Resolves the landing route for a role and the sign-in route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardResolver {
    /// Route unauthenticated principals are sent to.
    sign_in_route: String,
    /// Per-role overrides of the built-in landing routes.
    overrides: HashMap<Role, String>,
}

impl DashboardResolver {
    /// Creates a resolver with the given sign-in route and built-in landing routes.
    pub fn new(sign_in_route: &str) -> AppResult<Self> {
        Ok(Self {
            sign_in_route: validate_route("sign_in_route", sign_in_route)?,
            overrides: HashMap::new(),
        })
    }

    /// Applies landing route overrides keyed by role label. Two labels naming
    /// the same role are rejected.
    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for (role_label, route) in overrides {
            let role: Role = role_label.parse().map_err(|e: AppError| {
                AppError::configuration(format!("dashboards: {}", e.message))
            })?;
            if !seen.insert(role) {
                return Err(AppError::configuration(format!(
                    "dashboards: role '{role}' is listed more than once"
                )));
            }
            let route = validate_route(&format!("dashboards.{role}"), route)?;
            self.overrides.insert(role, route);
        }
        Ok(self)
    }

    /// Returns the canonical landing route for the role.
    pub fn dashboard_path_for(&self, role: Role) -> &str {
        self.overrides
            .get(&role)
            .map(String::as_str)
            .unwrap_or_else(|| builtin_dashboard(role))
    }

    /// Returns the sign-in route.
    pub fn sign_in_route(&self) -> &str {
        &self.sign_in_route
    }
}

impl Default for DashboardResolver {
    fn default() -> Self {
        Self {
            sign_in_route: "/login".to_string(),
            overrides: HashMap::new(),
        }
    }
}

/// Built-in landing route per role.
pub fn builtin_dashboard(role: Role) -> &'static str {
    match role {
        Role::SuperAdmin => "/dashboard/super-admin",
        Role::SchoolAdmin => "/dashboard/admin",
        Role::AssistantAdmin => "/dashboard/assistant-admin",
        Role::HomeroomTeacher | Role::SubjectTeacher => "/dashboard/teacher",
        Role::Student => "/dashboard/student",
        Role::Parent => "/dashboard/parent",
    }
}

fn validate_route(field: &str, route: &str) -> AppResult<String> {
    if route.starts_with('/') {
        Ok(route.to_string())
    } else {
        Err(AppError::configuration(format!(
            "{field}: route '{route}' must start with '/'"
        )))
    }
}
