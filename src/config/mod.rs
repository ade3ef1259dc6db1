//! Configuration management
//!
//! Values are layered with the `config` crate: built-in defaults, then
//! `DIALOUT_<SECTION>__<KEY>` variables, then the deployment-level `PORT` and
//! `TWILIO_PHONE` variables.

use config::{ConfigError, Environment};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Prefix for structured environment overrides
pub const ENV_PREFIX: &str = "DIALOUT";

/// Listening port when `PORT` is not set
pub const DEFAULT_PORT: u16 = 5000;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "dialout=info,tower_http=info";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub telephony: TelephonyConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelephonyConfig {
    /// Caller ID presented on outbound calls
    #[serde(default)]
    pub from_number: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Customer dataset file; the bundled dataset is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Load configuration from an explicit set of environment variables.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        // Empty deployment variables count as unset
        let non_empty = |key: &str| vars.get(key).filter(|v| !v.is_empty()).cloned();
        let port = non_empty("PORT");
        let from_number = non_empty("TWILIO_PHONE");

        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("telephony.timeout_secs", 10_i64)?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(Some(vars)),
            )
            .set_override_option("server.port", port)?
            .set_override_option("telephony.from_number", from_number)?
            .build()?
            .try_deserialize()
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl TelephonyConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
