//! Application configuration.
//!
//! Layered lowest to highest: built-in defaults, `config/default.toml`,
//! `config/{MAVEX_ENV}.toml`, then `MAVEX__SECTION__KEY` environment
//! variables. Every file is optional.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Seed for the vitals generator; entropy when unset.
    pub seed: Option<u64>,
    /// JSON roster to use instead of the built-in ward list.
    pub roster_path: Option<PathBuf>,
    pub sidebar_visible: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

/// Load configuration from `config/` and the environment.
pub fn load_config() -> Result<Config> {
    let env = std::env::var("MAVEX_ENV").unwrap_or_else(|_| "development".into());
    load_from("config", &env)
}

pub fn load_from(dir: &str, env: &str) -> Result<Config> {
    let settings = config::Config::builder()
        .set_default("dashboard.sidebar_visible", true)?
        .set_default("logging.level", "info")?
        .set_default("logging.json", false)?
        .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
        .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
        .add_source(config::Environment::with_prefix("MAVEX").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
