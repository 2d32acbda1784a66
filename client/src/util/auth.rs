//! Route guard: decides whether a protected view may render.
//!
//! SYSTEM CONTEXT
//! ==============
//! Consulted by `ProtectedRoute` on every navigation, before the protected
//! view is constructed. Reads nothing itself; the caller passes the current
//! session and the route's policy, so every evaluation sees fresh state.
//!
//! DESIGN
//! ======
//! "Not logged in" and "wrong role" both land on `RedirectToHome`. The routing
//! layer does not tell them apart.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::role::{Role, RoleClaim};
use crate::state::session::Session;

/// Public landing path that every refused navigation is sent to.
pub const HOME_PATH: &str = "/";

/// Outcome of evaluating a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Render,
    RedirectToHome,
}

/// Roles permitted on one protected route. Declared once with the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteAccessPolicy {
    allowed_roles: &'static [Role],
}

impl RouteAccessPolicy {
    /// For `const` policy items only, where an empty list fails the build.
    ///
    /// # Panics
    ///
    /// Panics if `allowed_roles` is empty.
    pub(crate) const fn new(allowed_roles: &'static [Role]) -> Self {
        assert!(!allowed_roles.is_empty(), "route policy must allow at least one role");
        Self { allowed_roles }
    }

    pub fn allowed_roles(&self) -> &'static [Role] {
        self.allowed_roles
    }

    pub fn permits(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }

    pub fn authorize(&self, session: &Session) -> Decision {
        authorize(self.allowed_roles, session)
    }
}

/// Evaluate a session against a route's allowed roles.
///
/// The token check always runs first, so a cleared or expired session never
/// reaches the role comparison.
pub fn authorize(allowed_roles: &[Role], session: &Session) -> Decision {
    if session.token.as_deref().is_none_or(str::is_empty) {
        return Decision::RedirectToHome;
    }
    match session.role() {
        Some(RoleClaim::Known(role)) if allowed_roles.contains(role) => Decision::Render,
        Some(RoleClaim::Known(_) | RoleClaim::Unrecognized(_)) | None => Decision::RedirectToHome,
    }
}
