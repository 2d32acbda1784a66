//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as `ApiError`; nothing here touches the session
//! store. Pages decide what to persist and what text to show.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::{LoginResponse, MessageBody};
use super::error::ApiError;
use super::types::{Credentials, LoginRequest, RegisterRequest};
use crate::config::ApiConfig;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

pub const LOGIN_ERROR_MESSAGE: &str = "Error logging in";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful!";
pub const REGISTER_ERROR_MESSAGE: &str = "Error during registration";

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Map a login HTTP exchange onto credentials or an error.
///
/// `body` is the decoded JSON, or the decode error text.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_login(status: u16, body: Result<LoginResponse, String>) -> Result<Credentials, ApiError> {
    match body {
        Ok(resp) if is_success(status) => resp.into_credentials(),
        Ok(resp) => match resp.message {
            Some(message) => Err(ApiError::Rejected(message)),
            None => Err(ApiError::Status(status)),
        },
        Err(detail) if is_success(status) => Err(ApiError::Decode(detail)),
        Err(_) => Err(ApiError::Status(status)),
    }
}

/// Map a registration HTTP exchange onto the confirmation text.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_register(status: u16, body: Result<MessageBody, String>) -> Result<String, ApiError> {
    if !is_success(status) {
        return match body {
            Ok(MessageBody { message: Some(message) }) => Err(ApiError::Rejected(message)),
            Ok(MessageBody { message: None }) | Err(_) => Err(ApiError::Status(status)),
        };
    }
    match body {
        Ok(MessageBody { message: Some(message) }) if !message.is_empty() => Ok(message),
        Ok(MessageBody { .. }) | Err(_) => Ok(REGISTER_SUCCESS_MESSAGE.to_owned()),
    }
}

/// Exchange email and password for a token and role via `POST /auth/login`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` when the backend refuses the login, and
/// transport/decode errors when the exchange itself fails.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn login(config: &ApiConfig, request: &LoginRequest) -> Result<Credentials, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint(LOGIN_PATH))
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.json::<LoginResponse>().await.map_err(|e| e.to_string());
        interpret_login(status, body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns an error if the HTTP request fails or the backend responds with a
/// non-success status.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn register(config: &ApiConfig, request: &RegisterRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint(REGISTER_PATH))
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.json::<MessageBody>().await.map_err(|e| e.to_string());
        interpret_register(status, body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
