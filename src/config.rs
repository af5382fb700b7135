//! Runtime settings for the command line tool.
//!
//! Values come from the environment (a `.env` file is loaded by `main`) and
//! can be overridden by command line flags. The library itself reads nothing
//! from the environment.

use clap::ValueEnum;
use std::error::Error;
use std::fmt;

use crate::processing::DEFAULT_MAX_SUBNETS;

pub const ENV_MAX_SUBNETS: &str = "SUBNET_CALC_MAX_SUBNETS";
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Enumeration ceiling for subnetting.
    pub max_subnets: u64,
    pub format: OutputFormat,
    /// Path of the log4rs configuration file.
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_subnets: DEFAULT_MAX_SUBNETS,
            format: OutputFormat::default(),
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(max) = lookup(ENV_MAX_SUBNETS) {
            config.max_subnets = max
                .trim()
                .parse()
                .map_err(|e| format!("{ENV_MAX_SUBNETS}='{max}': {e}"))?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = OutputFormat::from_str(format.trim(), true)
                .map_err(|e| format!("{ENV_FORMAT}='{format}': {e}"))?;
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = path;
        }
        Ok(config)
    }
}
