//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, LatencySettings, LoggingConfig, SessionSettings};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// The file is optional; built-in defaults fill anything it leaves out.
/// Variables such as `STOCKCAST__SESSION__DEFAULT_HORIZON=14` override both.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("STOCKCAST")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
