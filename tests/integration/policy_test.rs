//! Integration tests for the role and route policy.

mod helpers;

use std::collections::{HashMap, HashSet};

use schoolgate_authz::catalogue::{RolePermissionBinding, RouteTable};
use schoolgate_authz::dashboard::DashboardResolver;
use schoolgate_authz::{MatchMode, Permission, Policy, RenderGate, Role};
use schoolgate_core::config::AppConfig;

#[test]
fn test_school_admin_manages_students() {
    let app = helpers::TestApp::new();
    assert!(app.has_permission(Role::SchoolAdmin, Permission::ManageStudents));
}

#[test]
fn test_unlisted_route_open_to_parent() {
    let app = helpers::TestApp::new();
    assert!(app.evaluator.can_access_route(Role::Parent, "/about"));
}

#[test]
fn test_any_of_route_requirement() {
    let routes = RouteTable::from_rows([(
        "/dashboard/people",
        HashSet::from([Permission::ManageUsers, Permission::ManageClasses]),
    )])
    .unwrap();
    let binding = RolePermissionBinding::from_rows(Role::ALL.into_iter().map(|role| {
        let row = match role {
            Role::HomeroomTeacher => HashSet::from([Permission::ManageClasses]),
            _ => HashSet::new(),
        };
        (role, row)
    }))
    .unwrap();
    let app = helpers::TestApp::with_policy(Policy::new(
        binding,
        routes,
        DashboardResolver::default(),
    ));

    assert!(app.evaluator.can_access_route(Role::HomeroomTeacher, "/dashboard/people"));
    assert!(!app.evaluator.can_access_route(Role::Student, "/dashboard/people"));
}

#[test]
fn test_missing_role_row_is_configuration_error() {
    let rows = Role::ALL
        .into_iter()
        .filter(|role| *role != Role::SubjectTeacher)
        .map(|role| (role, HashSet::from([Permission::ViewAssignments])));
    let err = RolePermissionBinding::from_rows(rows).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_config_overrides_flow_into_guard_policy() {
    let mut config = AppConfig::default();
    config.authz.sign_in_route = "/auth/sign-in".to_string();
    config.authz.route_permissions = HashMap::from([(
        "/about".to_string(),
        vec!["view_analytics".to_string()],
    )]);
    let app = helpers::TestApp::from_config(&config);

    assert!(!app.evaluator.can_access_route(Role::Parent, "/about"));
    assert!(app.evaluator.can_access_route(Role::SuperAdmin, "/about"));

    let (mut guard, mut nav) = app.guard();
    guard.evaluate(&schoolgate_authz::SessionSnapshot::anonymous(), "/about");
    assert_eq!(helpers::drain(&mut nav), vec!["/auth/sign-in"]);
}

#[test]
fn test_render_gate_over_live_facade() {
    let app = helpers::TestApp::new();
    let finance = RenderGate::new().permissions(
        [Permission::ViewFinancialReports, Permission::ManagePayments],
        MatchMode::Any,
    );

    let admin = app.facade(helpers::signed_in(Role::SchoolAdmin));
    let teacher = app.facade(helpers::signed_in(Role::SubjectTeacher));

    assert_eq!(finance.render(&admin, || "billing", None), Some("billing"));
    assert_eq!(finance.render(&teacher, || "billing", None), None);
    assert!(RenderGate::teacher_only().allows(&teacher));
}
