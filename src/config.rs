use std::env;
use std::time::Duration;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use profetch_inquiry::RouteTable;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub inquiry: InquiryConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Per-kind endpoint paths and wire contracts. Defaults to the unified
    /// inquiry routes; deployments pinned to a legacy backend override the
    /// path and contract here instead of patching call sites.
    #[serde(default)]
    pub routes: RouteTable,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            routes: RouteTable::default(),
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct InquiryConfig {
    /// How long a confirmed-success modal stays on screen before closing
    /// itself.
    #[serde(default = "default_auto_close_ms")]
    pub auto_close_ms: u64,
}

impl Default for InquiryConfig {
    fn default() -> Self {
        Self {
            auto_close_ms: default_auto_close_ms(),
        }
    }
}

impl InquiryConfig {
    pub fn auto_close(&self) -> Duration {
        Duration::from_millis(self.auto_close_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_auto_close_ms() -> u64 {
    2500
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PROFETCH__BACKEND__BASE_URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional; defaults cover everything.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PROFETCH")
                .separator("__")
                .try_parsing(true),
        );

        // Also support the conventional unprefixed override.
        if let Ok(base_url) = env::var("BACKEND_BASE_URL") {
            builder = builder.set_override("backend.base_url", base_url)?;
        }

        builder.build()?.try_deserialize()
    }
}
