//! Layered configuration shared by both binaries.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use pos_models::{
    PosError, Result, ServerConfig, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_DATABASE, DEFAULT_HOST,
    DEFAULT_PORT, DEFAULT_USER,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Prefix for environment overrides, e.g. `POS__DATABASE__HOST`.
pub const ENV_PREFIX: &str = "POS";

/// Top-level settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server targeted by `init-database`.
    #[serde(default)]
    pub database: ServerConfig,
    /// Settings for `print-migration`.
    #[serde(default)]
    pub printer: PrinterConfig,
}

/// Settings for `print-migration`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrinterConfig {
    /// Replaces the `migration.sql` next to the executable.
    pub migration_path: Option<PathBuf>,
}

impl AppConfig {
    /// Built-in defaults, then `config/default`, `config/{RUN_MODE}`,
    /// `config/local`, then `POS__*` environment variables.
    pub fn new() -> Result<Self> {
        let config = Self::with_defaults(Self::sources())
            .and_then(ConfigBuilder::<DefaultState>::build)
            .map_err(config_error)?;
        Self::from_config(config)
    }

    /// Only the `printer` section, read from the same sources as [`AppConfig::new`].
    /// Database settings are never deserialized here.
    pub fn printer() -> Result<PrinterConfig> {
        let config = Self::sources().build().map_err(config_error)?;
        Self::printer_from(&config)
    }

    /// Deserializes every section of an already built [`Config`].
    pub fn from_config(config: Config) -> Result<Self> {
        config.try_deserialize().map_err(config_error)
    }

    /// Deserializes the `printer` section, defaulting when it is absent.
    pub fn printer_from(config: &Config) -> Result<PrinterConfig> {
        match config.get::<PrinterConfig>("printer") {
            Ok(printer) => Ok(printer),
            Err(ConfigError::NotFound(_)) => Ok(PrinterConfig::default()),
            Err(e) => Err(config_error(e)),
        }
    }

    fn sources() -> ConfigBuilder<DefaultState> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
    }

    fn with_defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> std::result::Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_default("database.host", DEFAULT_HOST)?
            .set_default("database.port", i64::from(DEFAULT_PORT))?
            .set_default("database.user", DEFAULT_USER)?
            .set_default("database.password", "")?
            .set_default("database.database", DEFAULT_DATABASE)?
            .set_default("database.connect_timeout_secs", DEFAULT_CONNECT_TIMEOUT_SECS)
    }
}

fn config_error(e: ConfigError) -> PosError {
    PosError::Config(e.to_string())
}
