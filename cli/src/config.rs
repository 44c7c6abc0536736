//! CLI configuration with TOML file support.
//!
//! The config file is the base layer; environment variables and flags
//! override it field by field in `main`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use ironclad_types::NetworkId;

#[derive(Debug, Error)]
#[error("config error: {0}")]
pub struct ConfigError(pub String);

/// Settings the `ironclad` binary reads from a TOML file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CliConfig {
    /// Which network to talk to.
    #[serde(default = "default_network")]
    pub network: NetworkId,

    /// Gateway URL override; the network default applies when unset.
    #[serde(default)]
    pub gateway_url: Option<String>,

    /// Principal to act as.
    #[serde(default)]
    pub principal: Option<String>,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_network() -> NetworkId {
    NetworkId::Local
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("CliConfig is always serializable to TOML")
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            gateway_url: None,
            principal: None,
            log_level: default_log_level(),
        }
    }
}
