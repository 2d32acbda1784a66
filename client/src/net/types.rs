//! Request and response bodies for the REST backend.
//!
//! DESIGN
//! ======
//! Response fields are all optional. The backend signals failure by omitting
//! `token` and filling `message`, so decoding never rejects a well-formed
//! error body.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::state::role::Role;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body returned by `POST /auth/login`, successful or not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Token and role issued by a successful login, ready for the session store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub role: String,
}

impl LoginResponse {
    /// A present, non-empty `token` is the only success signal.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` with the server's `message`, or
    /// `"Login failed"` when it sent none or a blank one.
    pub fn into_credentials(self) -> Result<Credentials, ApiError> {
        match self.token.filter(|t| !t.is_empty()) {
            Some(token) => Ok(Credentials { token, role: self.role.unwrap_or_default() }),
            None => Err(ApiError::Rejected(
                self.message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_owned()),
            )),
        }
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub base: String,
}

/// Generic `{ "message": ... }` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}
