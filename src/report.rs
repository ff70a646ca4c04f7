//! Role-by-role summary of the active policy.

use std::collections::BTreeSet;

use serde::Serialize;

use schoolgate_authz::{PolicyEvaluator, Role};

/// Everything one role can do.
#[derive(Debug, Serialize)]
pub struct RoleReport {
    pub role: Role,
    pub dashboard: String,
    pub permissions: BTreeSet<String>,
    pub routes: BTreeSet<String>,
}

/// Summary of the active policy.
#[derive(Debug, Serialize)]
pub struct PolicyReport {
    pub sign_in_route: String,
    pub roles: Vec<RoleReport>,
}

impl PolicyReport {
    pub fn build(evaluator: &PolicyEvaluator) -> Self {
        let dashboards = evaluator.policy().dashboards();
        let roles = Role::ALL
            .into_iter()
            .map(|role| RoleReport {
                role,
                dashboard: dashboards.dashboard_path_for(role).to_string(),
                permissions: evaluator
                    .permissions_for_role(role)
                    .iter()
                    .map(|p| p.to_string())
                    .collect(),
                routes: evaluator.allowed_routes(role),
            })
            .collect();

        Self {
            sign_in_route: dashboards.sign_in_route().to_string(),
            roles,
        }
    }
}
