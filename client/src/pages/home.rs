//! Public landing page. Also the target of every refused navigation.

use leptos::prelude::*;

use crate::routes::AppRoute;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Welcome to Military Assets Management System"</h1>
            <p class="hero__lead">
                "Efficiently manage, track, and maintain military assets with our comprehensive management system"
            </p>
            <div class="hero__actions">
                <a class="btn btn--primary" href=AppRoute::Login.path()>
                    "Get Started"
                </a>
                <a class="btn btn--outline" href=AppRoute::Dashboard.path()>
                    "Common Dashboard"
                </a>
            </div>
        </section>
    }
}
