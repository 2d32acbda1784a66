//! Top navigation bar with role panel link and login/logout controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every route. Reads the reactive auth state only; the route
//! guard remains responsible for whether a linked page actually renders.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::protected_route::home_redirect_options;
use crate::routes::AppRoute;
use crate::state::auth::{AuthState, sign_out};
use crate::state::role::Role;
use crate::state::session::SessionStore;
use crate::util::auth::HOME_PATH;

/// The role-specific dashboard button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelLink {
    pub route: AppRoute,
    pub label: &'static str,
}

/// Which auth buttons the navbar shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthControls {
    Logout,
    /// Register + Login.
    Guest,
}

pub fn panel_link(state: &AuthState) -> Option<PanelLink> {
    if !state.is_authenticated() {
        return None;
    }
    let role = state.session.role()?.known()?;
    let label = match role {
        Role::Admin => "Admin Panel",
        Role::LogisticsOfficer => "Logistics Panel",
        Role::BaseCommander => "Base Commander",
    };
    Some(PanelLink { route: AppRoute::panel_for(role), label })
}

/// `None` while the session is still loading.
pub fn auth_controls(state: &AuthState) -> Option<AuthControls> {
    if state.loading {
        None
    } else if state.session.is_authenticated() {
        Some(AuthControls::Logout)
    } else {
        Some(AuthControls::Guest)
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move || {
        sign_out(auth, &store);
        #[cfg(feature = "hydrate")]
        log::info!("signed out");
        navigate(HOME_PATH, home_redirect_options());
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=AppRoute::Home.path()>
                "Indian Military"
            </a>
            <div class="navbar__links">
                {move || {
                    panel_link(&auth.get())
                        .map(|link| {
                            view! {
                                <a class="btn btn--panel" href=link.route.path()>
                                    {link.label}
                                </a>
                            }
                        })
                }}
                {move || {
                    let on_logout = on_logout.clone();
                    auth_controls(&auth.get())
                        .map(|controls| match controls {
                            AuthControls::Logout => {
                                view! {
                                    <button class="btn btn--danger" on:click=move |_| on_logout()>
                                        "Logout"
                                    </button>
                                }
                                    .into_any()
                            }
                            AuthControls::Guest => {
                                view! {
                                    <a class="btn btn--panel" href=AppRoute::Register.path()>
                                        "Register"
                                    </a>
                                    <a class="btn btn--outline" href=AppRoute::Login.path()>
                                        "Login"
                                    </a>
                                }
                                    .into_any()
                            }
                        })
                }}
            </div>
        </nav>
    }
}
