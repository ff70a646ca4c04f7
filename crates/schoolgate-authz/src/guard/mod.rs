//! View-boundary gate for protected routes.
//!
//! Transition rules, first match wins:
//!
//! 1. Session still resolving → [`Decision::Pending`], no redirect.
//! 2. No principal, or principal not authenticated → [`Decision::Unauthenticated`],
//!    redirect to sign-in.
//! 3. Role outside `allowed_roles` (when set) → [`Decision::Forbidden`].
//! 4. Route not reachable for the role → [`Decision::Forbidden`].
//! 5. Otherwise → [`Decision::Allowed`].
//!
//! Forbidden redirects go to the fallback route when one is set, else to
//! the role's dashboard. A redirect is issued once per distinct
//! (session, route, outcome); re-evaluating unchanged inputs is silent.

pub mod decision;
pub mod options;
pub mod watcher;

pub use decision::{Decision, GuardView};
pub use options::GuardOptions;

use crate::catalogue::routes::normalize;
use crate::evaluator::PolicyEvaluator;
use crate::navigation::Navigator;
use crate::session::{SessionSnapshot, SessionSource};

/// Decision plus the redirect target it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Outcome {
    decision: Decision,
    redirect: Option<String>,
}

/// Inputs of the last evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Inputs {
    session: SessionSnapshot,
    route: String,
}

/// Guards a protected view.
#[derive(Debug)]
pub struct Guard<N> {
    evaluator: PolicyEvaluator,
    navigator: N,
    options: GuardOptions,
    last: Option<(Inputs, Outcome)>,
}

impl<N: Navigator> Guard<N> {
    /// Creates a guard with no role restriction.
    pub fn new(evaluator: PolicyEvaluator, navigator: N) -> Self {
        Self {
            evaluator,
            navigator,
            options: GuardOptions::default(),
            last: None,
        }
    }

    /// Sets the guard options.
    pub fn with_options(mut self, options: GuardOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the options. Takes effect on the next evaluation.
    pub fn set_options(&mut self, options: GuardOptions) {
        self.options = options;
    }

    /// Runs the transition rules for the session and route, issuing a
    /// redirect when the outcome calls for one and has not been issued yet.
    pub fn evaluate<S>(&mut self, session: &S, route: &str) -> Decision
    where
        S: SessionSource + ?Sized,
    {
        let inputs = Inputs {
            session: session.snapshot(),
            route: route.to_string(),
        };
        let outcome = self.decide(&inputs.session, route);

        let repeated = self
            .last
            .as_ref()
            .is_some_and(|(last_inputs, last_outcome)| {
                *last_inputs == inputs && *last_outcome == outcome
            });

        if !repeated {
            tracing::debug!(
                route = %route,
                decision = %outcome.decision,
                redirect = outcome.redirect.as_deref().unwrap_or("-"),
                "Guard evaluated"
            );
            if let Some(target) = &outcome.redirect {
                self.navigator.navigate_to(target);
            }
        }

        let decision = outcome.decision;
        self.last = Some((inputs, outcome));
        decision
    }

    /// Decision of the last evaluation; [`Decision::Pending`] before the first.
    pub fn decision(&self) -> Decision {
        self.last
            .as_ref()
            .map(|(_, outcome)| outcome.decision)
            .unwrap_or_default()
    }

    /// Redirect target of the last evaluation, if any.
    pub fn last_redirect(&self) -> Option<&str> {
        self.last
            .as_ref()
            .and_then(|(_, outcome)| outcome.redirect.as_deref())
    }

    /// Draws the view for the last decision. `content` runs only when allowed.
    pub fn render<T>(&self, content: impl FnOnce() -> T) -> GuardView<T> {
        match self.decision() {
            Decision::Pending => GuardView::Loading,
            Decision::Allowed => GuardView::Content(content()),
            Decision::Unauthenticated | Decision::Forbidden => GuardView::Nothing,
        }
    }

    fn decide(&self, session: &SessionSnapshot, route: &str) -> Outcome {
        if session.is_resolving {
            return Outcome {
                decision: Decision::Pending,
                redirect: None,
            };
        }

        let Some(role) = session.role() else {
            let sign_in = self.evaluator.policy().dashboards().sign_in_route();
            return self.redirecting(Decision::Unauthenticated, sign_in, route);
        };

        let role_allowed = self
            .options
            .allowed_roles
            .as_ref()
            .is_none_or(|roles| roles.contains(&role));

        if role_allowed && self.evaluator.can_access_route(role, route) {
            return Outcome {
                decision: Decision::Allowed,
                redirect: None,
            };
        }

        let target = match &self.options.fallback_route {
            Some(fallback) => fallback.as_str(),
            None => self.evaluator.policy().dashboards().dashboard_path_for(role),
        };
        self.redirecting(Decision::Forbidden, target, route)
    }

    /// Builds a redirecting outcome, dropping the redirect when the target
    /// is the route being evaluated.
    fn redirecting(&self, decision: Decision, target: &str, route: &str) -> Outcome {
        let redirect = (normalize(target) != normalize(route)).then(|| target.to_string());
        Outcome { decision, redirect }
    }
}
