//! Integration tests for reactive guard re-evaluation.

mod helpers;

use tokio::sync::watch;

use schoolgate_authz::{Decision, GuardOptions, Role, SessionSnapshot};

#[tokio::test]
async fn test_role_change_mid_session_is_re_evaluated() {
    let app = helpers::TestApp::new();
    let (guard, mut nav) = app.guard();

    let (session_tx, session_rx) = watch::channel(helpers::signed_in(Role::SchoolAdmin));
    let (route_tx, route_rx) = watch::channel("/dashboard/finance/payments".to_string());
    let (options_tx, options_rx) = watch::channel(GuardOptions::default());
    let (decision_tx, mut decision_rx) = watch::channel(Decision::Pending);

    let handle = tokio::spawn(guard.watch(session_rx, route_rx, options_rx, decision_tx));

    decision_rx.changed().await.unwrap();
    assert_eq!(*decision_rx.borrow_and_update(), Decision::Allowed);

    session_tx.send(helpers::signed_in(Role::Parent)).unwrap();
    decision_rx.changed().await.unwrap();
    assert_eq!(*decision_rx.borrow_and_update(), Decision::Forbidden);
    assert_eq!(nav.recv().await.unwrap(), "/dashboard/parent");

    session_tx.send(SessionSnapshot::anonymous()).unwrap();
    decision_rx.changed().await.unwrap();
    assert_eq!(*decision_rx.borrow_and_update(), Decision::Unauthenticated);
    assert_eq!(nav.recv().await.unwrap(), "/login");

    drop(session_tx);
    drop(route_tx);
    drop(options_tx);
    handle.await.unwrap();
}
