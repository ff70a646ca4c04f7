//! Read-only view of the external session collaborator.
//!
//! Identity resolution lives outside this crate. The engine only reads a
//! [`SessionSnapshot`] on demand and never writes back.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use uuid::Uuid;

use crate::catalogue::Role;

/// The actor making a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Identity assigned by the session collaborator.
    pub id: Uuid,
    /// The single role held by the principal.
    pub role: Role,
    /// Whether the session credentials are still valid.
    pub is_authenticated: bool,
}

impl Principal {
    /// Creates an authenticated principal.
    pub fn new(id: Uuid, role: Role) -> Self {
        Self {
            id,
            role,
            is_authenticated: true,
        }
    }

    /// The role, if the principal is authenticated.
    pub fn authenticated_role(&self) -> Option<Role> {
        self.is_authenticated.then_some(self.role)
    }
}

/// Session state as published by the session collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The resolved principal, if any.
    pub principal: Option<Principal>,
    /// True while the session is still being resolved.
    pub is_resolving: bool,
}

impl SessionSnapshot {
    /// A session that has not finished resolving.
    pub fn resolving() -> Self {
        Self {
            principal: None,
            is_resolving: true,
        }
    }

    /// A resolved session with no principal.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A resolved session for an authenticated principal.
    pub fn authenticated(principal: Principal) -> Self {
        Self {
            principal: Some(principal),
            is_resolving: false,
        }
    }

    /// The principal's role when resolved and authenticated.
    pub fn role(&self) -> Option<Role> {
        if self.is_resolving {
            return None;
        }
        self.principal.and_then(|p| p.authenticated_role())
    }
}

/// Source of the live session snapshot.
pub trait SessionSource {
    /// Reads the current session state.
    fn snapshot(&self) -> SessionSnapshot;
}

impl SessionSource for SessionSnapshot {
    fn snapshot(&self) -> SessionSnapshot {
        *self
    }
}

impl SessionSource for watch::Receiver<SessionSnapshot> {
    fn snapshot(&self) -> SessionSnapshot {
        *self.borrow()
    }
}

impl<S: SessionSource + ?Sized> SessionSource for &S {
    fn snapshot(&self) -> SessionSnapshot {
        (**self).snapshot()
    }
}
