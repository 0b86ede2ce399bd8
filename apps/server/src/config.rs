//! Server configuration.

use std::{env, path::PathBuf};

use advisor::{AdvisorConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Directory for the file-backed store. Records stay in memory when unset.
    pub data_dir: Option<PathBuf>,
    /// Log level used when `RUST_LOG` is not set.
    pub log_level: String,
    /// AI advisor settings.
    pub advisor: AdvisorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_dir: None,
            log_level: "info".to_string(),
            advisor: AdvisorConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("FINANCE_FLOW_SERVER_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("FINANCE_FLOW_SERVER_PORT is not a valid port: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let api_key = lookup("API_KEY")
            .or_else(|| lookup("GEMINI_API_KEY"))
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            host: lookup("FINANCE_FLOW_SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            data_dir: lookup("FINANCE_FLOW_DATA_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            log_level: lookup("FINANCE_FLOW_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            advisor: AdvisorConfig {
                api_key,
                model: lookup("FINANCE_FLOW_AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: lookup("FINANCE_FLOW_AI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            },
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
