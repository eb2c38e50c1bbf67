//! Configuration management

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_APP_ENV, DEFAULT_APP_NAME, DEFAULT_HOST, DEFAULT_INDEX_FILE, DEFAULT_LOG_LEVEL,
    DEFAULT_NOT_FOUND_PAGE, DEFAULT_PORT, DEFAULT_STATIC_ROOT, ENV_PREFIX, PORT_ENV_VAR,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub static_files: StaticSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

/// Where the static asset responder reads files from.
#[derive(Debug, Deserialize, Clone)]
pub struct StaticSettings {
    pub root: String,
    pub index: String,
    pub not_found_page: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
    /// Daily rolling log files are written here when set.
    #[serde(default)]
    pub directory: Option<String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: true,
            directory: None,
        }
    }
}

impl AppConfig {
    /// Loads `.env`, then layers defaults, `config/default`, `config/<APP_ENV>`,
    /// `AUTH__SECTION__KEY` environment variables and finally `PORT`.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_APP_ENV.into());
        let port = std::env::var(PORT_ENV_VAR).ok();

        Self::load_from(
            Path::new("config"),
            &app_env,
            port.as_deref(),
            environment(),
        )
    }

    pub fn load_from(
        config_dir: &Path,
        app_env: &str,
        port_override: Option<&str>,
        environment: Environment,
    ) -> Result<Self, AppError> {
        let port = port_override.map(parse_port).transpose()?;

        let config = Config::builder()
            .set_default("app.env", app_env)?
            .set_default("app.host", DEFAULT_HOST)?
            .set_default("app.port", i64::from(DEFAULT_PORT))?
            .set_default("app.name", DEFAULT_APP_NAME)?
            .set_default("static_files.root", DEFAULT_STATIC_ROOT)?
            .set_default("static_files.index", DEFAULT_INDEX_FILE)?
            .set_default("static_files.not_found_page", DEFAULT_NOT_FOUND_PAGE)?
            .set_default("log.level", DEFAULT_LOG_LEVEL)?
            .set_default("log.json", true)?
            .add_source(File::with_name(&config_dir.join("default").to_string_lossy()).required(false))
            .add_source(File::with_name(&config_dir.join(app_env).to_string_lossy()).required(false))
            .add_source(environment)
            .set_override_option("app.port", port.map(i64::from))?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Only `AUTH__`-prefixed variables are read, so unrelated variables such
/// as `LOG` or `PATH` never reach the config tree.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn parse_port(value: &str) -> Result<u16, AppError> {
    value.trim().parse::<u16>().map_err(|e| AppError::InvalidPort {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
