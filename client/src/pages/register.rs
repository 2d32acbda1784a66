//! Account registration form.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use super::login::message_tone;
use crate::net::types::RegisterRequest;
use crate::state::role::Role;
#[cfg(feature = "hydrate")]
use crate::{config::ApiConfig, net::api::REGISTER_ERROR_MESSAGE, routes::AppRoute};

pub const INCOMPLETE_FORM_MESSAGE: &str = "Fill in every field and choose a role and base.";

/// Bases a new account can be assigned to.
pub const BASE_OPTIONS: [&str; 4] = ["Base A", "Base B", "Base C", "Headquarters"];

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
    pub base: String,
}

/// Build the registration body from the form.
///
/// # Errors
///
/// Returns the message to show when a field is blank or no role is chosen.
pub fn validate_register_input(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let name = form.name.trim();
    let email = form.email.trim();
    let base = form.base.trim();
    let Some(role) = form.role else {
        return Err(INCOMPLETE_FORM_MESSAGE);
    };
    if name.is_empty() || email.is_empty() || form.password.is_empty() || !BASE_OPTIONS.contains(&base) {
        return Err(INCOMPLETE_FORM_MESSAGE);
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        role,
        base: base.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let config = expect_context::<ApiConfig>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&form.get()) {
            Ok(request) => request,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&config, &request).await {
                    Ok(text) => {
                        message.set(text);
                        navigate(AppRoute::Login.path(), NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("registration failed: {err}");
                        message.set(REGISTER_ERROR_MESSAGE.to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        drop(request);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Register for Military Asset System"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Full Name"
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Enter your full name"
                            required
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Email Address"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="Enter your email"
                            required
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Create a password"
                            required
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Role"
                        <select
                            class="auth-input"
                            required
                            on:change=move |ev| form.update(|f| f.role = Role::from_name(&event_target_value(&ev)))
                        >
                            <option value="">"Select role"</option>
                            {Role::ALL
                                .into_iter()
                                .map(|role| view! { <option value=role.as_str()>{role.as_str()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="auth-form__label">
                        "Base"
                        <select
                            class="auth-input"
                            required
                            on:change=move |ev| form.update(|f| f.base = event_target_value(&ev))
                        >
                            <option value="">"Select base"</option>
                            {BASE_OPTIONS
                                .into_iter()
                                .map(|base| view! { <option value=base>{base}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                    <Show when=move || !message.get().is_empty()>
                        <p class=move || message_tone(&message.get()).class() role="alert">
                            {move || message.get()}
                        </p>
                    </Show>
                </form>
            </div>
        </div>
    }
}
