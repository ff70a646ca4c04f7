//! Reactive re-evaluation of a guard.
//!
//! The session collaborator, the router and the owning view each publish on
//! a `tokio::sync::watch` channel. The guard evaluates once up front and
//! again after every change on any channel, one evaluation at a time.

use tokio::sync::watch;

use super::{Decision, Guard, GuardOptions};
use crate::navigation::Navigator;
use crate::session::SessionSnapshot;

impl<N: Navigator> Guard<N> {
    /// Drives the guard from session, route and options channels, publishing
    /// every decision on `decisions`.
    ///
    /// The current value of `options_rx` replaces the guard's options before
    /// each evaluation. Returns the guard once every input is closed or every
    /// decision receiver has been dropped.
    pub async fn watch(
        mut self,
        mut session_rx: watch::Receiver<SessionSnapshot>,
        mut route_rx: watch::Receiver<String>,
        mut options_rx: watch::Receiver<GuardOptions>,
        decisions: watch::Sender<Decision>,
    ) -> Self {
        let mut session_open = true;
        let mut route_open = true;
        let mut options_open = true;

        loop {
            let session = *session_rx.borrow_and_update();
            let route = route_rx.borrow_and_update().clone();
            self.set_options(options_rx.borrow_and_update().clone());
            let decision = self.evaluate(&session, &route);

            decisions.send_if_modified(|current| {
                if *current == decision {
                    false
                } else {
                    *current = decision;
                    true
                }
            });

            if !session_open && !route_open && !options_open {
                break;
            }

            tokio::select! {
                changed = session_rx.changed(), if session_open => {
                    session_open = changed.is_ok();
                }
                changed = route_rx.changed(), if route_open => {
                    route_open = changed.is_ok();
                }
                changed = options_rx.changed(), if options_open => {
                    options_open = changed.is_ok();
                }
                _ = decisions.closed() => {
                    tracing::debug!("Guard watcher stopped: no decision receivers");
                    break;
                }
            }
        }

        self
    }
}
