//! Controller configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREFRONT_API_BASE` - Base URL of the storefront serving the REST
//!   API (e.g., `https://shop.goldenbeet.example`)
//!
//! ## Optional
//! - `STOREFRONT_SESSION_COOKIE` - Cookie header value identifying an
//!   existing session (e.g., `session=...`); without it every call runs as
//!   a guest
//! - `SENTRY_DSN` - Sentry error tracking DSN (used by the CLI binary)

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront controller configuration.
///
/// Implements `Debug` manually to redact the session cookie.
#[derive(Clone)]
pub struct ControllerConfig {
    /// Base URL of the storefront REST API.
    pub api_base: Url,
    /// Cookie header value carrying the session, if any.
    pub session_cookie: Option<SecretString>,
    /// Sentry DSN for error tracking.
    pub sentry_dsn: Option<String>,
}

impl std::fmt::Debug for ControllerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerConfig")
            .field("api_base", &self.api_base.as_str())
            .field(
                "session_cookie",
                &self.session_cookie.as_ref().map(|_| "[REDACTED]"),
            )
            .field("sentry_dsn", &self.sentry_dsn)
            .finish()
    }
}

impl ControllerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `STOREFRONT_API_BASE` is missing or not a
    /// valid absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base = parse_api_base(&get_required_env("STOREFRONT_API_BASE")?)?;
        let session_cookie = get_optional_env("STOREFRONT_SESSION_COOKIE").map(SecretString::from);
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            api_base,
            session_cookie,
            sentry_dsn,
        })
    }

}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse and validate the API base URL.
fn parse_api_base(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| {
        ConfigError::InvalidEnvVar("STOREFRONT_API_BASE".to_string(), e.to_string())
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "STOREFRONT_API_BASE".to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(url)
}
