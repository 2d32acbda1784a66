//! Login page: email + password exchanged for a token and role.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is written only after the backend has answered with a token.
//! A failed or interrupted login leaves the stored session as it was.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::net::types::LoginRequest;
#[cfg(feature = "hydrate")]
use crate::{
    config::ApiConfig,
    net::api::LOGIN_ERROR_MESSAGE,
    state::auth::{AuthState, complete_login, refresh},
    state::session::SessionStore,
};

pub const MISSING_FIELDS_MESSAGE: &str = "Enter both email and password.";

/// How a status message should be styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageTone {
    Error,
    Info,
}

impl MessageTone {
    pub fn class(self) -> &'static str {
        match self {
            MessageTone::Error => "alert alert--danger",
            MessageTone::Info => "alert alert--info",
        }
    }
}

/// Messages mentioning a failure or an error are styled as errors.
pub fn message_tone(message: &str) -> MessageTone {
    if message.contains("failed") || message.contains("Error") {
        MessageTone::Error
    } else {
        MessageTone::Info
    }
}

/// Build the login body from raw form values.
///
/// # Errors
///
/// Returns the message to show when either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let store = expect_context::<SessionStore>();
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let config = expect_context::<ApiConfig>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&config, &request).await {
                    Ok(credentials) => {
                        let landing = complete_login(&store, &credentials);
                        refresh(auth, &store);
                        log::info!("signed in as {}", credentials.role);
                        navigate(landing.path(), NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        message.set(err.user_message(LOGIN_ERROR_MESSAGE));
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
                <h1>"Login"</h1>
                <p class="auth-card__subtitle">"Access your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email Address"
                        <input
                            class="auth-input"
                            type="email"
                            name="email"
                            placeholder="Enter your email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            name="password"
                            placeholder="Enter your password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign In"
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
