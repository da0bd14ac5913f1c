//! Runtime configuration.
//!
//! Values are merged in order, later sources winning:
//!
//! 1. built-in defaults
//! 2. `order-engine.toml` in the working directory, if present
//! 3. `ORDER_ENGINE_*` environment variables (e.g. `ORDER_ENGINE_COMPENSATION=restore_stock`)

use crate::engine::CompensationPolicy;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE: &str = "order-engine.toml";
pub const ENV_PREFIX: &str = "ORDER_ENGINE_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Capacity of every actor's request channel.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer: usize,
    /// What a failed table order does to the members already placed.
    #[serde(default)]
    pub compensation: CompensationPolicy,
    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_channel_buffer() -> usize {
    32
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: default_channel_buffer(),
            compensation: CompensationPolicy::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl SystemConfig {
    /// The provider chain without extracting it.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads and validates the configuration.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::Invalid("channel_buffer must be greater than zero".into()));
        }
        Ok(())
    }
}
