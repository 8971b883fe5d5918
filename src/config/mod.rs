use anyhow::{Context, Result};
use config::{Config as ConfigLoader, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::dashboard::DEFAULT_SYMBOLS;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub coinlayer: CoinlayerConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoinlayerConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://api.coinlayer.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for CoinlayerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CoinlayerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub default_symbols: Vec<String>,
    pub cards_per_row: usize,
    pub random_count: usize,
    /// Days of history fetched for the search view
    pub history_days: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            cards_per_row: 3,
            random_count: 6,
            history_days: 7,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub refresh_rate_ms: u64,
    pub log_file: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: 250,
            log_file: "cryptoeconomy.log".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Config {
    /// Load from `path` (or the default lookup) and `CRYPTOECONOMY_*` env vars
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        let settings = ConfigLoader::builder()
            .add_source(File::from(config_path.clone()).required(path.is_some()))
            .add_source(
                config::Environment::with_prefix("CRYPTOECONOMY")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("dashboard.default_symbols")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to build configuration from {}", config_path.display()))?;

        settings
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    fn config_path() -> PathBuf {
        let local_config = PathBuf::from("config/default.toml");
        if local_config.exists() {
            return local_config;
        }

        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let exe_config = exe_dir.join("config/default.toml");
                if exe_config.exists() {
                    return exe_config;
                }
            }
        }

        local_config
    }

    pub fn has_api_key(&self) -> bool {
        !self.coinlayer.api_key.trim().is_empty()
    }
}
