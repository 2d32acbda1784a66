//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reactive mirror of the `SessionStore`, provided as `RwSignal<AuthState>`.
//! The navbar renders from it and route guards re-run when it changes. The
//! store stays the source of truth; this only tells the UI when to look again.
//!
//! SSR renders with `loading: true` because the session lives in browser
//! storage. The client flips it once hydrated.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::role::RoleClaim;
use super::session::{Session, SessionStore};
use crate::net::types::Credentials;
use crate::routes::AppRoute;

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: Session::anonymous(), loading: true }
    }
}

impl AuthState {
    /// Snapshot of the store, marked as loaded.
    pub fn loaded_from(store: &SessionStore) -> Self {
        Self { session: store.session(), loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.session.is_authenticated()
    }
}

/// Re-read the store into the reactive auth state.
pub fn refresh(auth: RwSignal<AuthState>, store: &SessionStore) {
    auth.set(AuthState::loaded_from(store));
}

/// Persist credentials from a successful login and pick the landing route.
///
/// Runs only after the login round trip has completed, so a failed login
/// leaves whatever session was stored before untouched.
pub fn complete_login(store: &SessionStore, credentials: &Credentials) -> AppRoute {
    store.save_auth(&credentials.token, &credentials.role);
    AppRoute::landing_for(&RoleClaim::parse(&credentials.role))
}

/// Clear the stored session and publish the anonymous state.
pub fn sign_out(auth: RwSignal<AuthState>, store: &SessionStore) {
    store.clear_auth();
    refresh(auth, store);
}
