//! Application configuration loaded from TOML.
//!
//! Every key is optional; a missing key falls back to its default.
//!
//! ```toml
//! currency_unit = "GNF"
//! theme = "dark"              # light | dark
//! input_policy = "clamp"      # pass-through | clamp
//!
//! [defaults]
//! daily_surplus_kwh = 8
//! price_per_kwh = 200
//! sharing_percentage = 40
//!
//! [logging]
//! level = "debug"
//! file = "solibox.log"
//! console = true             # log records on stderr
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use solar_core::format::DEFAULT_CURRENCY_UNIT;
use solar_core::{InputPolicy, RevenueEstimatorConfig, RevenueInputs, ThemeMode};
use thiserror::Error;
use tracing::debug;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "solibox.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` wins when set.
    pub level: String,
    /// Append log records to this file as well.
    pub file: Option<PathBuf>,
    /// Write log records to stderr. Stdout is reserved for the views.
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            console: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Suffix printed after revenue figures.
    pub currency_unit: String,
    /// Theme the session starts in.
    pub theme: ThemeMode,
    /// Treatment of out-of-range calculator inputs.
    pub input_policy: InputPolicy,
    /// Inputs a freshly opened calculator starts with.
    pub defaults: RevenueInputs,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_unit: DEFAULT_CURRENCY_UNIT.to_string(),
            theme: ThemeMode::default(),
            input_policy: InputPolicy::default(),
            defaults: RevenueInputs::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(
        text: &str,
        origin: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Reads and parses the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Loads `path` when given. Otherwise loads [`DEFAULT_CONFIG_FILE`] if it
    /// exists, and falls back to defaults if it does not.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn estimator_config(&self) -> RevenueEstimatorConfig {
        RevenueEstimatorConfig::with_policy(self.input_policy)
    }
}
