//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `APP_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//! - `BIGCOMMERCE_STORE_HASH` - Store hash from the API path (e.g. `abc123xy`)
//! - `BIGCOMMERCE_ACCESS_TOKEN` - API account access token
//!
//! ## Optional
//! - `APP_HOST` - Bind address (default: 127.0.0.1)
//! - `APP_PORT` - Listen port (default: 3000)
//! - `BIGCOMMERCE_API_URL` - API base URL (default: `https://api.bigcommerce.com`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_API_BASE: &str = "https://api.bigcommerce.com";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "insert",
    "enter-",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// BigCommerce API configuration
    pub bigcommerce: BigCommerceConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

/// BigCommerce API configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct BigCommerceConfig {
    /// Store hash identifying the store in API paths
    pub store_hash: String,
    /// API account access token (sent as `X-Auth-Token`)
    pub access_token: SecretString,
    /// API base URL, overridable for tests
    pub api_base: String,
}

impl std::fmt::Debug for BigCommerceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BigCommerceConfig")
            .field("store_hash", &self.store_hash)
            .field("access_token", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid,
    /// or if the access token looks like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("APP_DATABASE_URL")?;
        let host = get_env_or_default("APP_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("APP_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("APP_PORT".to_string(), e.to_string()))?;

        let bigcommerce = BigCommerceConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            database_url,
            host,
            port,
            bigcommerce,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl BigCommerceConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let token = get_required_env("BIGCOMMERCE_ACCESS_TOKEN")?;
        validate_secret("BIGCOMMERCE_ACCESS_TOKEN", &token)?;

        Ok(Self {
            store_hash: get_required_env("BIGCOMMERCE_STORE_HASH")?,
            access_token: SecretString::from(token),
            api_base: get_env_or_default("BIGCOMMERCE_API_URL", DEFAULT_API_BASE),
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

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Reject secrets that are obviously placeholders.
fn validate_secret(var_name: &str, value: &str) -> Result<(), ConfigError> {
    let lower = value.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_secret_rejects_placeholder() {
        let result = validate_secret("TEST_VAR", "your-token-here");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InsecureSecret(_, _)
        ));
    }

    #[test]
    fn test_validate_secret_accepts_real_token() {
        assert!(validate_secret("TEST_VAR", "k9f2mq07ab31xzlc8d4wvu65").is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            bigcommerce: BigCommerceConfig {
                store_hash: "abc123xy".to_string(),
                access_token: SecretString::from("k9f2mq07ab31xzlc"),
                api_base: DEFAULT_API_BASE.to_string(),
            },
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_bigcommerce_config_debug_redacts_token() {
        let config = BigCommerceConfig {
            store_hash: "abc123xy".to_string(),
            access_token: SecretString::from("super_secret_token_k9f2"),
            api_base: DEFAULT_API_BASE.to_string(),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("abc123xy"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_token_k9f2"));
    }
}
