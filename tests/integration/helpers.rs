//! Shared test helpers for integration tests.

use std::sync::Arc;

use tokio::sync::mpsc;
use uuid::Uuid;

use schoolgate_authz::{
    ChannelNavigator, Guard, Permission, PermissionFacade, Policy, PolicyEvaluator, Principal,
    Role, SessionSnapshot,
};
use schoolgate_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// Evaluator over the policy under test
    pub evaluator: PolicyEvaluator,
}

impl TestApp {
    /// Create a test application with the built-in policy
    pub fn new() -> Self {
        Self::with_policy(Policy::builtin())
    }

    /// Create a test application from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let policy = Policy::from_config(&config.authz).expect("Failed to build policy");
        Self::with_policy(policy)
    }

    /// Create a test application with a specific policy
    pub fn with_policy(policy: Policy) -> Self {
        Self {
            evaluator: PolicyEvaluator::new(Arc::new(policy)),
        }
    }

    /// Build a guard whose redirects land on the returned receiver
    pub fn guard(&self) -> (Guard<ChannelNavigator>, mpsc::UnboundedReceiver<String>) {
        let (nav, rx) = ChannelNavigator::channel();
        (Guard::new(self.evaluator.clone(), nav), rx)
    }

    /// Build a facade over a fixed session
    pub fn facade(&self, session: SessionSnapshot) -> PermissionFacade<SessionSnapshot> {
        PermissionFacade::new(self.evaluator.clone(), session)
    }

    /// Check a permission directly
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.evaluator.has_permission(role, permission)
    }
}

/// Session for a signed-in principal with the given role
pub fn signed_in(role: Role) -> SessionSnapshot {
    SessionSnapshot::authenticated(Principal::new(Uuid::new_v4(), role))
}

/// Drain every redirect issued so far
pub fn drain(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<String> {
    let mut routes = Vec::new();
    while let Ok(route) = rx.try_recv() {
        routes.push(route);
    }
    routes
}
