//! Guard outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// The session is still resolving. Show a loading indicator only.
    #[default]
    Pending,
    /// No valid principal. Redirect to sign-in.
    Unauthenticated,
    /// Principal lacks the role or permission. Redirect to a fallback.
    Forbidden,
    /// Render the protected content.
    Allowed,
}

impl Decision {
    /// Return the decision as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Unauthenticated => "unauthenticated",
            Self::Forbidden => "forbidden",
            Self::Allowed => "allowed",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the view boundary should draw for a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardView<T> {
    /// Neutral loading indicator.
    Loading,
    /// The protected content.
    Content(T),
    /// Nothing; a redirect is under way.
    Nothing,
}
