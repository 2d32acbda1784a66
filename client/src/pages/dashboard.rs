//! Common dashboard, reachable without logging in.
//!
//! Shows a role-aware hint pointing signed-in users at their own desk.

use leptos::prelude::*;

use crate::components::navbar::panel_link;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Common Dashboard"</h1>
                <small>"Asset movement across all bases"</small>
            </header>
            <p class="dashboard-page__hint">
                {move || match panel_link(&auth.get()) {
                    Some(link) => {
                        view! {
                            "Your desk: "
                            <a href=link.route.path()>{link.label}</a>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <a href=AppRoute::Login.path()>"Log in"</a>
                            " to open your desk."
                        }
                            .into_any()
                    }
                }}
            </p>
        </div>
    }
}
