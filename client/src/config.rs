//! Build-time client configuration.
//!
//! The WASM bundle has no process environment at runtime, so values are read
//! with `option_env!` when the crate is compiled:
//!
//! - `ASSET_API_BASE_URL`: REST backend origin, default `http://localhost:3001`
//! - `ASSET_LOG_LEVEL`: browser console log level, default `info`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Where the REST backend lives. Provided to pages through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_raw(option_env!("ASSET_API_BASE_URL"))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let base = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self { base_url: base.trim_end_matches('/').to_owned() }
    }

    /// Absolute URL for an API path such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn log_level_name(raw: Option<&str>) -> &str {
    raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Console log level for the hydrated app.
#[cfg(feature = "hydrate")]
pub fn log_level() -> log::Level {
    log_level_name(option_env!("ASSET_LOG_LEVEL"))
        .parse()
        .unwrap_or(log::Level::Info)
}
