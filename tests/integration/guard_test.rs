//! Integration tests for guard decisions and redirects.

mod helpers;

use schoolgate_authz::{Decision, GuardOptions, GuardView, Role, SessionSnapshot};

#[test]
fn test_unauthenticated_redirects_to_sign_in() {
    let app = helpers::TestApp::new();
    let (mut guard, mut nav) = app.guard();

    let decision = guard.evaluate(&SessionSnapshot::anonymous(), "/dashboard/reports");

    assert_eq!(decision, Decision::Unauthenticated);
    assert_eq!(guard.render(|| "report"), GuardView::Nothing);
    assert_eq!(helpers::drain(&mut nav), vec!["/login"]);
}

#[test]
fn test_student_denied_grades_goes_to_student_dashboard() {
    let app = helpers::TestApp::new();
    let (mut guard, mut nav) = app.guard();

    let decision = guard.evaluate(&helpers::signed_in(Role::Student), "/dashboard/teacher/grades");

    assert_eq!(decision, Decision::Forbidden);
    let dashboard = app
        .evaluator
        .policy()
        .dashboards()
        .dashboard_path_for(Role::Student)
        .to_string();
    assert_eq!(helpers::drain(&mut nav), vec![dashboard]);
}

#[test]
fn test_pending_session_never_leaks_content() {
    let app = helpers::TestApp::new();
    let (mut guard, mut nav) = app.guard();

    for route in ["/dashboard/admin/settings", "/about", "/dashboard/finance/payments"] {
        assert_eq!(
            guard.evaluate(&SessionSnapshot::resolving(), route),
            Decision::Pending
        );
        assert_eq!(guard.render(|| "secret"), GuardView::Loading);
    }
    assert!(helpers::drain(&mut nav).is_empty());
}

#[test]
fn test_idempotent_evaluation_redirects_once() {
    let app = helpers::TestApp::new();
    let (mut guard, mut nav) = app.guard();
    let session = helpers::signed_in(Role::Parent);

    let first = guard.evaluate(&session, "/dashboard/admin/users");
    let second = guard.evaluate(&session, "/dashboard/admin/users");

    assert_eq!(first, second);
    assert_eq!(helpers::drain(&mut nav).len(), 1);
}

#[test]
fn test_session_resolution_sequence() {
    let app = helpers::TestApp::new();
    let (mut guard, mut nav) = app.guard();
    let route = "/dashboard/admin/students";

    assert_eq!(
        guard.evaluate(&SessionSnapshot::resolving(), route),
        Decision::Pending
    );
    assert_eq!(
        guard.evaluate(&helpers::signed_in(Role::SchoolAdmin), route),
        Decision::Allowed
    );
    assert_eq!(guard.render(|| 42), GuardView::Content(42));
    assert!(helpers::drain(&mut nav).is_empty());
}

#[test]
fn test_admin_only_guard_with_fallback() {
    let app = helpers::TestApp::new();
    let (guard, mut nav) = app.guard();
    let mut guard = guard.with_options(
        GuardOptions::new()
            .allowed_roles(Role::ADMIN_ROLES)
            .fallback_route("/dashboard"),
    );

    assert_eq!(
        guard.evaluate(&helpers::signed_in(Role::HomeroomTeacher), "/dashboard/reports"),
        Decision::Forbidden
    );
    assert_eq!(
        guard.evaluate(&helpers::signed_in(Role::AssistantAdmin), "/dashboard/reports"),
        Decision::Allowed
    );
    assert_eq!(helpers::drain(&mut nav), vec!["/dashboard"]);
}
