//! Application configuration.

use serde::Deserialize;
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Remote API configuration.
    pub api: ApiConfig,
}

/// Remote ScamGuard API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, including the version prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds. The backend applies none of its own, so
    /// this defaults to unset and a stalled request stays in flight.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Pre-established bearer token, for sessions restored out of band.
    #[serde(default)]
    pub token: Option<String>,
}

fn default_base_url() -> String {
    "https://scammer-backend.vercel.app/v1".to_string()
}

fn default_user_agent() -> String {
    format!("scamguard-rs/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: None,
            token: None,
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `SCAMGUARD_ENV`)
    /// 3. Environment variables with `SCAMGUARD_` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = std::env::var("SCAMGUARD_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SCAMGUARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("SCAMGUARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
