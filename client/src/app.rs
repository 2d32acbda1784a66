//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::config::ApiConfig;
use crate::pages::{
    dashboard::DashboardPage,
    desks::{Desk, DeskPage},
    home::HomePage,
    login::LoginPage,
    records::{RecordKind, RecordsPage},
    register::RegisterPage,
};
use crate::routes::AppRoute;
use crate::state::auth::{AuthState, refresh};
use crate::state::session::SessionStore;
use crate::util::auth::HOME_PATH;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, its reactive mirror, and the API config, then
/// declares every route. Protected routes are wrapped in `ProtectedRoute`
/// here, at declaration, with the policy taken from `AppRoute`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::browser();
    let auth = RwSignal::new(AuthState::default());

    provide_context(store.clone());
    provide_context(auth);
    provide_context(ApiConfig::from_env());

    // Effects only run in the browser, after hydration.
    Effect::new(move || refresh(auth, &store));

    view! {
        <Stylesheet id="leptos" href="/pkg/asset-console.css"/>
        <Title text="Military Asset Management"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route
                        path=StaticSegment("home")
                        view=|| {
                            view! {
                                <Redirect
                                    path=HOME_PATH
                                    options=NavigateOptions { replace: true, ..NavigateOptions::default() }
                                />
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("logistics")
                        view=|| view! {
                            <ProtectedRoute route=AppRoute::Logistics>
                                <DeskPage desk=Desk::Logistics/>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=StaticSegment("commander")
                        view=|| view! {
                            <ProtectedRoute route=AppRoute::Commander>
                                <DeskPage desk=Desk::Commander/>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! {
                            <ProtectedRoute route=AppRoute::Admin>
                                <DeskPage desk=Desk::Admin/>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=StaticSegment("purchases")
                        view=|| view! {
                            <ProtectedRoute route=AppRoute::Purchases>
                                <RecordsPage kind=RecordKind::Purchases/>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=StaticSegment("transfers")
                        view=|| view! {
                            <ProtectedRoute route=AppRoute::Transfers>
                                <RecordsPage kind=RecordKind::Transfers/>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=StaticSegment("assignments")
                        view=|| view! {
                            <ProtectedRoute route=AppRoute::Assignments>
                                <RecordsPage kind=RecordKind::Assignments/>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=StaticSegment("expenditures")
                        view=|| view! {
                            <ProtectedRoute route=AppRoute::Expenditures>
                                <RecordsPage kind=RecordKind::Expenditures/>
                            </ProtectedRoute>
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
        </div>
    }
}
