//! Route wrapper that consults the guard before mounting a protected page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected `<Route>` in `app.rs` wraps its page in `ProtectedRoute`.
//! The page's own view (and any data loading it does) is only constructed
//! after the guard says `Render`.
//!
//! TRADE-OFFS
//! ==========
//! The session lives in browser storage, so SSR cannot decide. Server output
//! and the first hydrated frame show a neutral placeholder; the decision is
//! taken in an effect once the client has loaded the session, and again
//! whenever the auth state changes.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::session::{Session, SessionStore};
use crate::util::auth::{Decision, HOME_PATH};

/// Guard decision for `route`. Public routes always render.
pub fn decide(route: AppRoute, session: &Session) -> Decision {
    route
        .policy()
        .map_or(Decision::Render, |policy| policy.authorize(session))
}

/// Navigation used for every guard-initiated trip home. Replaces the current
/// history entry so Back does not return to the refused page.
pub fn home_redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// One guard evaluation against the live auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardStep {
    /// Session not loaded yet; keep the placeholder.
    Wait,
    Render,
    Redirect { path: &'static str, replace: bool },
}

impl GuardStep {
    pub fn decision(&self) -> Option<Decision> {
        match self {
            GuardStep::Wait => None,
            GuardStep::Render => Some(Decision::Render),
            GuardStep::Redirect { .. } => Some(Decision::RedirectToHome),
        }
    }
}

/// Evaluate `route` once the auth state has loaded.
///
/// The store is re-read rather than trusting `auth.session`, so a write that
/// has not been mirrored into the signal yet is still honoured.
pub fn evaluate(route: AppRoute, auth: &AuthState, store: &SessionStore) -> GuardStep {
    if auth.loading {
        return GuardStep::Wait;
    }
    match decide(route, &store.session()) {
        Decision::Render => GuardStep::Render,
        Decision::RedirectToHome => GuardStep::Redirect {
            path: HOME_PATH,
            replace: home_redirect_options().replace,
        },
    }
}

/// Build the protected view only after a `Render` decision.
pub fn guarded_view<V>(
    decision: Option<Decision>,
    children: impl FnOnce() -> V,
    placeholder: impl FnOnce() -> V,
) -> V {
    match decision {
        Some(Decision::Render) => children(),
        Some(Decision::RedirectToHome) | None => placeholder(),
    }
}

/// Render `children` only when the current session may see `route`.
#[component]
pub fn ProtectedRoute(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let decision = RwSignal::new(None::<Decision>);

    Effect::new(move || {
        let step = evaluate(route, &auth.get(), &store);
        if step == GuardStep::Wait {
            return;
        }
        decision.set(step.decision());
        if let GuardStep::Redirect { path, replace } = step {
            #[cfg(feature = "hydrate")]
            log::debug!("route guard: {} refused, redirecting home", route.path());
            navigate(path, NavigateOptions { replace, ..NavigateOptions::default() });
        }
    });

    move || {
        guarded_view(
            decision.get(),
            || children().into_any(),
            || {
                view! {
                    <div class="route-guard">
                        <p>"Checking access..."</p>
                    </div>
                }
                .into_any()
            },
        )
    }
}
