//! Error type shared by REST helpers.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a backend call did not produce a usable result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered and explained the refusal.
    #[error("{0}")]
    Rejected(String),
    /// Non-success status without a readable explanation.
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    /// REST calls only run in the hydrated browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text to show the user: the backend's own message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(message) if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}
