use crate::error::{BreakdownError, Result};
use crate::money::CurrencyFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_PREFIX: &str = "PRICE_BREAKDOWN";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub currency: CurrencyFormat,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// EnvFilter directive, overridden by RUST_LOG (default: "info")
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "text" or "json" (default: "text")
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Load configuration from an optional TOML file plus environment overrides
///
/// A missing file is not an error; every field has a default. Environment
/// variables use the `PRICE_BREAKDOWN` prefix and `__` as the nesting
/// separator, e.g. `PRICE_BREAKDOWN__CURRENCY__SYMBOL=€`.
pub fn load_config(path: &Path) -> Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> Result<()> {
    cfg.currency.validate()?;

    match cfg.logging.format.to_ascii_lowercase().as_str() {
        "text" | "json" => {}
        other => {
            return Err(BreakdownError::Config(format!(
                "Log format must be 'text' or 'json', got '{}'",
                other
            )))
        }
    }

    if cfg.logging.level.trim().is_empty() {
        return Err(BreakdownError::Config(
            "Log level cannot be empty".to_string(),
        ));
    }

    Ok(())
}
