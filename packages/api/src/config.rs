//! Auth service location, from the environment.

use reqwest::Url;

use crate::error::SubmissionError;

/// Base URL used when `AUTH_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Path of the registration endpoint, relative to the base URL.
pub const REGISTER_PATH: &str = "/v1/auth/register";

/// Name of the environment variable holding the auth service base URL.
pub const BASE_URL_VAR: &str = "AUTH_API_URL";

/// Where the authentication service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from `AUTH_API_URL`, falling back to [`DEFAULT_BASE_URL`].
    ///
    /// Native builds read the variable at runtime (after loading `.env`); wasm
    /// builds have no process environment, so the value is baked in at compile time.
    pub fn from_env() -> Self {
        match read_base_url() {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Full URL of the registration endpoint.
    pub fn register_url(&self) -> Result<Url, SubmissionError> {
        let raw = format!("{}{}", self.base_url.trim_end_matches('/'), REGISTER_PATH);
        Url::parse(&raw).map_err(|e| SubmissionError::InvalidEndpoint(format!("{}: {}", raw, e)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_base_url() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(BASE_URL_VAR).ok()
}

#[cfg(target_arch = "wasm32")]
fn read_base_url() -> Option<String> {
    option_env!("AUTH_API_URL").map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_service() {
        let url = ApiConfig::default().register_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/v1/auth/register");
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        let config = ApiConfig::new("https://auth.example.com/");
        assert_eq!(
            config.register_url().unwrap().as_str(),
            "https://auth.example.com/v1/auth/register"
        );
    }

    #[test]
    fn test_base_path_is_kept() {
        let config = ApiConfig::new("https://example.com/gateway");
        assert_eq!(
            config.register_url().unwrap().as_str(),
            "https://example.com/gateway/v1/auth/register"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiConfig::new("not a url").register_url().unwrap_err();
        assert!(matches!(err, SubmissionError::InvalidEndpoint(_)));
    }
}
