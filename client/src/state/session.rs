//! Session store: who is currently logged in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes the session, the navbar and route guards read it, and
//! logout clears it. The store is injected through Leptos context rather than
//! reached as ambient global state, so tests can swap the backend for memory.
//!
//! PERSISTENCE
//! ===========
//! Two string keys, `token` and `role`, both absent when logged out. No schema
//! versioning. In the browser they live in `localStorage`, so a reload keeps
//! the session.
//!
//! MALFORMED SESSIONS
//! ==================
//! `get_auth` returns exactly what is stored. `session` sanitizes it: an absent
//! or empty token means anonymous, and any stored role is dropped with it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use super::role::RoleClaim;
use crate::util::storage::{StorageBackend, default_backend};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";

/// The raw `{token, role}` pair as persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredAuth {
    pub token: Option<String>,
    pub role: Option<String>,
}

/// Sanitized identity consumed by the route guard and role-aware UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<RoleClaim>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Role claim of an authenticated session.
    pub fn role(&self) -> Option<&RoleClaim> {
        self.role.as_ref()
    }
}

impl From<StoredAuth> for Session {
    fn from(stored: StoredAuth) -> Self {
        let Some(token) = stored.token.filter(|t| !t.is_empty()) else {
            return Session::anonymous();
        };
        let role = stored.role.filter(|r| !r.is_empty()).map(|r| RoleClaim::parse(&r));
        Session { token: Some(token), role }
    }
}

/// Handle to the session keys in durable storage. Clones share the backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by `localStorage` when hydrated, memory otherwise.
    pub fn browser() -> Self {
        Self::new(default_backend())
    }

    /// Persist a freshly issued token and role.
    ///
    /// Role is written first. A reader between the two writes sees no token and
    /// treats the session as anonymous rather than half-authenticated. Role
    /// membership is not validated here.
    pub fn save_auth(&self, token: &str, role: &str) {
        self.backend.set_item(ROLE_KEY, role);
        self.backend.set_item(TOKEN_KEY, token);
    }

    /// Read both keys as stored. Never fails.
    pub fn get_auth(&self) -> StoredAuth {
        StoredAuth {
            token: self.backend.get_item(TOKEN_KEY),
            role: self.backend.get_item(ROLE_KEY),
        }
    }

    /// Remove both keys. Token goes first; calling this on an empty store is a no-op.
    pub fn clear_auth(&self) {
        self.backend.remove_item(TOKEN_KEY);
        self.backend.remove_item(ROLE_KEY);
    }

    /// Current sanitized session, re-read from storage on every call.
    pub fn session(&self) -> Session {
        Session::from(self.get_auth())
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}
