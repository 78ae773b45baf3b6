use crate::filters::LandSearchFilters;
use crate::http_client::DEFAULT_USER_AGENT;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

pub const CONFIG_PATH: &str = "data/config.yaml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Site origin, or a CORS relay that forwards to it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Pause between pages when the CLI walks several of them
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Filters applied before any given on the command line
    #[serde(default)]
    pub default_filters: LandSearchFilters,
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_base_url() -> String {
    "https://suumo.jp".to_string()
}

fn default_request_delay_ms() -> u64 {
    2000 // 2 seconds between pages
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracing_level: default_tracing_level(),
            user_agent: default_user_agent(),
            base_url: default_base_url(),
            request_delay_ms: default_request_delay_ms(),
            timeout_secs: default_timeout_secs(),
            default_filters: LandSearchFilters::default(),
        }
    }
}

impl Config {
    /// Load data/config.yaml (or defaults when it doesn't exist), then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match fs::read_to_string(CONFIG_PATH) {
            Ok(config_str) => Self::from_yaml_str(&config_str)
                .with_context(|| format!("Failed to parse {}", CONFIG_PATH))?,
            Err(_) => Config::default(),
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Override fields from a key lookup (the process environment in `load`)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(tracing_level) = lookup("TRACING_LEVEL") {
            self.tracing_level = tracing_level;
        }

        if let Some(user_agent) = lookup("USER_AGENT") {
            self.user_agent = user_agent;
        }

        if let Some(base_url) = lookup("SUUMO_BASE_URL") {
            self.base_url = base_url;
        }

        if let Some(request_delay) = lookup("REQUEST_DELAY_MS") {
            self.request_delay_ms = request_delay.parse()
                .context("Failed to parse REQUEST_DELAY_MS environment variable")?;
        }

        if let Some(timeout) = lookup("REQUEST_TIMEOUT_SECS") {
            self.timeout_secs = timeout.parse()
                .context("Failed to parse REQUEST_TIMEOUT_SECS environment variable")?;
        }

        if self.base_url.trim().is_empty() {
            anyhow::bail!("base_url must not be empty (set via {} or SUUMO_BASE_URL env var)", CONFIG_PATH);
        }

        Ok(())
    }

    pub fn create_default() -> Result<()> {
        // Ensure data directory exists
        fs::create_dir_all("data")?;

        let default_config = Config {
            default_filters: LandSearchFilters {
                prefecture: Some("Tokyo".to_string()),
                ..Default::default()
            },
            ..Config::default()
        };

        let config_str = serde_yaml::to_string(&default_config)?;
        fs::write(CONFIG_PATH, config_str)?;
        Ok(())
    }
}
