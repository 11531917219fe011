//! Configuration for the bank core

use serde::{Deserialize, Serialize};

/// Bank configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// First account number handed out by a fresh bank
    pub account_number_base: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "bank-core".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            account_number_base: 1001,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(base) = std::env::var("BANK_ACCOUNT_NUMBER_BASE") {
            config.account_number_base = base.parse().map_err(|e| {
                crate::Error::Config(format!("Invalid BANK_ACCOUNT_NUMBER_BASE: {}", e))
            })?;
        }

        if let Ok(name) = std::env::var("BANK_SERVICE_NAME") {
            config.service_name = name;
        }

        Ok(config)
    }
}
