//! Redirect capability supplied by the view layer.

use tokio::sync::mpsc;

/// Issues a navigation to a route.
///
/// The guard calls this only for its two redirect cases: sign-in and
/// forbidden fallback.
pub trait Navigator {
    /// Navigates to the route.
    fn navigate_to(&self, route: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate_to(&self, route: &str) {
        self(route)
    }
}

/// Forwards navigation requests to the view layer over a channel.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelNavigator {
    /// Creates a navigator and the receiver the view layer drains.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate_to(&self, route: &str) {
        if self.tx.send(route.to_string()).is_err() {
            tracing::debug!(route = %route, "Navigation dropped: view layer is gone");
        }
    }
}
